#![allow(dead_code)]

use anyhow::{bail, Context, Result};
use assert_cmd::Command;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

pub fn sentra_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sentra").unwrap();
    cmd.env_remove("SENTRA_ROOT");
    cmd.env_remove("SENTRA_ENDPOINT");
    cmd.env_remove("SENTRA_LOG");
    cmd
}

/// Initialize a journal in `path`
pub fn init_journal(path: &Path) {
    sentra_cmd().arg("init").arg(path).assert().success();
}

/// Read the stored entry log as raw JSON
pub fn read_journal(root: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(root.join(".sentra/sentra_journal.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

/// Single-purpose HTTP server answering every request with the same
/// canned response. Request bodies are recorded in arrival order.
pub struct StubServer {
    pub url: String,
    bodies: Receiver<String>,
}

impl StubServer {
    pub fn start(status: u16, body: &str) -> Result<Self> {
        let listener =
            TcpListener::bind(("127.0.0.1", 0)).context("bind localhost ephemeral port")?;
        let url = format!("http://{}", listener.local_addr()?);
        let (tx, rx) = mpsc::channel();
        let body = body.to_string();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else {
                    break;
                };
                if serve_one(stream, status, &body, &tx).is_err() {
                    continue;
                }
            }
        });

        Ok(StubServer { url, bodies: rx })
    }

    /// Request bodies received so far
    pub fn received(&self) -> Vec<String> {
        self.bodies.try_iter().collect()
    }
}

fn serve_one(stream: TcpStream, status: u16, body: &str, tx: &Sender<String>) -> Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut content_length = 0usize;
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            bail!("connection closed before end of headers");
        }
        let header = line.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().context("content-length")?;
            }
        }
    }

    let mut request_body = vec![0u8; content_length];
    reader.read_exact(&mut request_body)?;
    let _ = tx.send(String::from_utf8_lossy(&request_body).into_owned());

    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );

    let mut stream = stream;
    stream.write_all(response.as_bytes())?;
    stream.flush()?;
    Ok(())
}
