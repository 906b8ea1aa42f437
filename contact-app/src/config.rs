pub const CONTACT_API_URL_VAR: &str = "CONTACT_API_URL";
pub const DEFAULT_CONTACT_API_URL: &str = "http://localhost:5000/api/contact";
/// `<meta name=..>` the server renders so the browser posts where the server was told to.
pub const CONTACT_API_URL_META: &str = "contact-api-url";

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} must use http or https, got {scheme}")]
    UnsupportedScheme { var: &'static str, scheme: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub contact_api_url: String,
}

impl ContactConfig {
    pub fn new(contact_api_url: &str) -> Result<Self, ConfigError> {
        let trimmed = contact_api_url.trim();
        let parsed = url::Url::parse(trimmed).map_err(|_| ConfigError::InvalidUrl {
            var: CONTACT_API_URL_VAR,
            value: trimmed.to_string(),
        })?;

        let scheme = parsed.scheme().to_lowercase();
        if !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
            return Err(ConfigError::UnsupportedScheme {
                var: CONTACT_API_URL_VAR,
                scheme,
            });
        }

        Ok(Self {
            contact_api_url: trimmed.to_string(),
        })
    }

    /// Reads `CONTACT_API_URL` from the process environment, then from the
    /// value baked in at compile time (the only source in a wasm build), and
    /// falls back to the local development endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONTACT_API_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::new(option_env!("CONTACT_API_URL").unwrap_or(DEFAULT_CONTACT_API_URL)),
        }
    }

    /// Browser-side resolution: the URL served in the page wins, otherwise
    /// the same order as `from_env`.
    pub fn resolve(served_url: Option<&str>) -> Result<Self, ConfigError> {
        match served_url {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::from_env(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            contact_api_url: DEFAULT_CONTACT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_endpoints() {
        let config = ContactConfig::new("https://api.example.com/api/contact").unwrap();
        assert_eq!(config.contact_api_url, "https://api.example.com/api/contact");

        let config = ContactConfig::new("  http://localhost:5000/api/contact\n").unwrap();
        assert_eq!(config.contact_api_url, DEFAULT_CONTACT_API_URL);
    }

    #[test]
    fn test_invalid_endpoints() {
        assert!(matches!(
            ContactConfig::new("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ContactConfig::new("ftp://example.com/contact"),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_served_url_takes_precedence() {
        let config = ContactConfig::resolve(Some("https://prod.example.com/api/contact")).unwrap();
        assert_eq!(config.contact_api_url, "https://prod.example.com/api/contact");

        assert!(matches!(
            ContactConfig::resolve(Some("ftp://prod.example.com/contact")),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_missing_served_url_falls_back_to_env() {
        assert_eq!(ContactConfig::resolve(None), ContactConfig::from_env());
        assert_eq!(ContactConfig::resolve(Some("  ")), ContactConfig::from_env());
    }

    #[test]
    fn test_default_is_local_endpoint() {
        assert_eq!(ContactConfig::default().contact_api_url, DEFAULT_CONTACT_API_URL);
        assert!(ContactConfig::new(DEFAULT_CONTACT_API_URL).is_ok());
    }
}
