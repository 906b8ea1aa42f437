pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";
pub const APPLICATION_FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure of a contact submission after it left the form.
///
/// Per-field validation problems never become a `ContactError`; they stay
/// with the form as inline messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// No usable response: the request failed or the body was not JSON.
    #[error("Contact request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("Contact endpoint rejected the submission: {}", .0.as_deref().unwrap_or("no detail"))]
    Application(Option<String>),
}

impl ContactError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::Transport(_) => TRANSPORT_FAILURE_MESSAGE,
            Self::Application(Some(detail)) if !detail.is_empty() => detail,
            Self::Application(_) => APPLICATION_FALLBACK_MESSAGE,
        }
    }
}
