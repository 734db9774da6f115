//! Interactive journal shell
//!
//! Each input line is parsed into a [`ShellCommand`] and dispatched to the
//! journal or analysis controller built once at startup.

use crate::application::{AnalysisController, JournalController, JournalEvent};
use crate::cli::view::{show_details, TerminalView};
use crate::domain::MoodLevel;
use crate::error::Result;
use crate::infrastructure::{
    Config, FileEntryStore, FileSystemRepository, HttpClassifier, SessionStore, TokioScheduler,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

pub const SHELL_HELP: &str = "\
Commands:
  mood <1-5>       pick a mood (5 great .. 1 rough)
  save [text]      save an entry with the picked mood
  show             show entries and the mood trend
  analyze <text>   classify text with the remote classifier
  details          open the detailed view of the last analysis
  clear            hide the last analysis result
  help             show this help
  quit             leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Mood(MoodLevel),
    Save(String),
    Show,
    Analyze(String),
    Details,
    Clear,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> std::result::Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "mood" => ShellCommand::Mood(rest.parse().map_err(|e| format!("{} (try: mood 4)", e))?),
        "save" | "write" => ShellCommand::Save(rest.to_string()),
        "show" | "list" | "trend" => ShellCommand::Show,
        "analyze" => ShellCommand::Analyze(rest.to_string()),
        "details" => ShellCommand::Details,
        "clear" => ShellCommand::Clear,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("Unknown command: '{}'. Type 'help'.", other)),
    };

    Ok(Some(command))
}

/// Controllers and handoff state shared by every shell command
struct ShellSession {
    journal: JournalController<FileEntryStore, TerminalView, TokioScheduler>,
    analysis: AnalysisController<HttpClassifier, TerminalView>,
    classifier: HttpClassifier,
    session: SessionStore,
    analysis_input: String,
}

impl ShellSession {
    async fn run(&mut self, command: ShellCommand) -> Result<()> {
        match command {
            ShellCommand::Mood(level) => self.journal.handle(JournalEvent::PickMood(level))?,
            ShellCommand::Save(text) => self.journal.handle(JournalEvent::Save(text))?,
            ShellCommand::Show => self.journal.handle(JournalEvent::Render)?,
            ShellCommand::Analyze(text) => {
                self.analysis_input = text;
                self.analysis.classify(&self.analysis_input).await;
            }
            ShellCommand::Details => {
                if self
                    .analysis
                    .follow_details_link(&self.analysis_input, &self.session)?
                {
                    show_details(&self.classifier, &self.session).await?;
                } else {
                    eprintln!("Analyze some text first.");
                }
            }
            ShellCommand::Clear => {
                self.analysis_input.clear();
                self.analysis.clear();
            }
            ShellCommand::Help => println!("{}", SHELL_HELP),
            ShellCommand::Quit => {}
        }
        Ok(())
    }
}

/// Read commands from stdin until `quit` or end of input.
///
/// A failing command is reported on stderr and the shell keeps reading.
pub async fn run_shell(repository: &FileSystemRepository, config: &Config) -> Result<()> {
    let session = SessionStore::for_repository(repository);
    session.clear()?;

    let classifier = HttpClassifier::from_config(config)?;
    let mut shell = ShellSession {
        journal: JournalController::new(
            FileEntryStore::for_repository(repository),
            TerminalView::interactive(),
            TokioScheduler,
            config.date_format.clone(),
        ),
        analysis: AnalysisController::new(classifier.clone(), TerminalView::interactive()),
        classifier,
        session,
        analysis_input: String::new(),
    };

    println!("{}", SHELL_HELP);
    shell.journal.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                eprintln!("{}", msg);
                continue;
            }
        };

        if command == ShellCommand::Quit {
            break;
        }
        if let Err(err) = shell.run(command).await {
            warn!(error = %err, "shell command failed");
            eprintln!("Error: {}", err.display_with_suggestions());
        }
    }

    Ok(())
}
