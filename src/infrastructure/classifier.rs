//! HTTP transport for the remote mood classifier

use crate::domain::ClassificationResult;
use crate::error::{Result, SentraError};
use crate::infrastructure::Config;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Something that can label free text with a mood category
#[async_trait(?Send)]
pub trait Classifier {
    /// Classify `text`. Any transport or decoding fault is a
    /// [`SentraError::Transport`].
    async fn classify(&self, text: &str) -> Result<ClassificationResult>;
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    message: &'a str,
}

/// Client for `POST {endpoint}/predict`
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: reqwest::Client,
    predict_url: String,
}

impl HttpClassifier {
    /// `timeout` bounds the whole request; `None` leaves it to reqwest's defaults
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SentraError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(HttpClassifier {
            client,
            predict_url: predict_url(base_url),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.get_endpoint(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

fn predict_url(base_url: &str) -> String {
    format!("{}/predict", base_url.trim().trim_end_matches('/'))
}

#[async_trait(?Send)]
impl Classifier for HttpClassifier {
    async fn classify(&self, text: &str) -> Result<ClassificationResult> {
        debug!(url = %self.predict_url, chars = text.chars().count(), "sending classification request");

        let response = self
            .client
            .post(&self.predict_url)
            .json(&PredictRequest { message: text })
            .send()
            .await
            .map_err(|e| {
                SentraError::Transport(format!("request to {} failed: {}", self.predict_url, e))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SentraError::Transport(format!("failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(SentraError::Transport(format!(
                "classifier responded with status {}",
                status
            )));
        }

        let result: ClassificationResult = serde_json::from_str(&body)
            .map_err(|e| SentraError::Transport(format!("malformed response body: {}", e)))?;

        debug!(mood = %result.mood_label, "classification received");
        Ok(result)
    }
}
