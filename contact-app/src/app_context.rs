use crate::application::SubmitContact;
use crate::config::{ConfigError, ContactConfig};
use crate::infrastructure::contact_api::ContactApiClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub submit_contact: Arc<SubmitContact>,
    pub config: ContactConfig,
}

impl AppContext {
    pub fn new(config: ContactConfig) -> Self {
        let client = ContactApiClient::new(config.contact_api_url.clone());
        Self {
            submit_contact: Arc::new(SubmitContact::new(client)),
            config,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let config = ContactConfig::from_env()?;
        tracing::info!("Contact submissions go to {}", config.contact_api_url);
        Ok(Self::new(config))
    }
}
