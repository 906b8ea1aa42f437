use super::types::ErrorBody;
use crate::domain::ContactSubmission;
use contact_errors::ContactError;

#[derive(Clone)]
pub struct ContactApiClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl ContactApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one POST with the submission as JSON. Every response body is
    /// parsed as JSON; a body that is not JSON counts as a transport failure.
    pub async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Contact request to {} failed: {}", self.endpoint, e);
                ContactError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body: serde_json::Value = response.json().await.map_err(|e| {
            tracing::warn!("Contact endpoint returned {} with a non-JSON body: {}", status, e);
            ContactError::Transport(e.to_string())
        })?;

        if !status.is_success() {
            tracing::warn!("Contact endpoint error: {}", status);
            return Err(ContactError::Application(ErrorBody::from_json(&body)));
        }

        Ok(())
    }
}
