//! HTTP text classifier
//!
//! Talks to a Hugging Face style inference endpoint: the request body is
//! `{"inputs": "<text>"}` and the response is a list of `{label, score}`
//! objects, optionally nested one level for batched inputs.

use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};
use workbench_core::{WorkbenchError, WorkbenchResult};

use crate::traits::{Classification, TextClassifier};

/// Classifier backed by a remote inference endpoint
pub struct HttpClassifier {
    /// Blocking HTTP client
    client: reqwest::blocking::Client,
    /// Endpoint URL
    endpoint: String,
    /// Optional bearer token
    api_token: Option<String>,
}

impl HttpClassifier {
    /// Create a classifier for `endpoint`
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> WorkbenchResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                WorkbenchError::Inference(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_token: None,
        })
    }

    /// Send `token` as a bearer token with every request
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TextClassifier for HttpClassifier {
    fn classify(&self, text: &str) -> WorkbenchResult<Vec<Classification>> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "inputs": text }));
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "Classifier request failed");
            WorkbenchError::Inference(format!("request to {} failed: {}", self.endpoint, e))
        })?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            WorkbenchError::Inference(format!("failed to read classifier response: {}", e))
        })?;

        if !status.is_success() {
            warn!(endpoint = %self.endpoint, status = %status, "Classifier returned an error");
            return Err(WorkbenchError::Inference(format!(
                "classifier returned {}: {}",
                status,
                body.trim()
            )));
        }

        debug!(endpoint = %self.endpoint, bytes = body.len(), "Classifier responded");
        parse_response(&body)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClassifierResponse {
    Flat(Vec<Classification>),
    Batched(Vec<Vec<Classification>>),
    Error { error: String },
}

/// Decode a classifier response body
fn parse_response(body: &str) -> WorkbenchResult<Vec<Classification>> {
    let response: ClassifierResponse = serde_json::from_str(body).map_err(|e| {
        WorkbenchError::Inference(format!("malformed classifier response: {}", e))
    })?;

    match response {
        ClassifierResponse::Flat(labels) => Ok(labels),
        ClassifierResponse::Batched(batches) => {
            Ok(batches.into_iter().next().unwrap_or_default())
        }
        ClassifierResponse::Error { error } => Err(WorkbenchError::Inference(error)),
    }
}
