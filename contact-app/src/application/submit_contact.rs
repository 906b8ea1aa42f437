use crate::domain::ContactSubmission;
use crate::infrastructure::contact_api::ContactApiClient;
use contact_errors::ContactError;

/// Sends a validated submission to the contact endpoint.
pub struct SubmitContact {
    client: ContactApiClient,
}

impl SubmitContact {
    pub fn new(client: ContactApiClient) -> Self {
        Self { client }
    }

    pub async fn execute(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        tracing::info!("Sending contact submission to {}", self.client.endpoint());

        let outcome = self.client.send(submission).await;
        if outcome.is_ok() {
            tracing::info!("Contact submission accepted");
        }
        outcome
    }
}
