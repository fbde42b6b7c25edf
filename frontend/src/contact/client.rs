use gloo_net::http::Request;
use log::debug;
use thiserror::Error;

use crate::config::EmailJsConfig;
use crate::contact::payload::EmailJsRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("could not build email request: {0}")]
    Build(String),
    #[error("email request failed: {0}")]
    Network(String),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Thin client for the hosted email-delivery REST endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsClient {
    api_url: String,
}

impl EmailJsClient {
    pub fn new(config: &EmailJsConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
        }
    }

    /// One attempt, no retry. Any 2xx counts as delivered.
    pub async fn send(&self, request: &EmailJsRequest) -> Result<(), SendError> {
        debug!("Posting lead to {}", self.api_url);

        let response = Request::post(&self.api_url)
            .json(request)
            .map_err(|e| SendError::Build(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(SendError::Rejected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_describe_themselves() {
        let rejected = SendError::Rejected {
            status: 400,
            body: "The user ID is invalid".to_string(),
        };
        assert_eq!(
            rejected.to_string(),
            "email service rejected the message (400): The user ID is invalid"
        );
        assert_eq!(
            SendError::Network("offline".to_string()).to_string(),
            "email request failed: offline"
        );
    }

    #[test]
    fn client_targets_configured_endpoint() {
        let config = EmailJsConfig {
            api_url: "http://localhost:3001/send".to_string(),
            ..EmailJsConfig::default()
        };
        assert_eq!(EmailJsClient::new(&config).api_url, "http://localhost:3001/send");
    }
}
