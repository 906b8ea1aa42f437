use contact_errors::ContactError;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message. We will get back to you soon!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Outcome banner shown after a submission reached the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl SubmissionStatus {
    pub fn success() -> Self {
        Self {
            kind: StatusKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    pub fn from_outcome(outcome: &Result<(), ContactError>) -> Self {
        match outcome {
            Ok(()) => Self::success(),
            Err(e) => Self::error(e.user_message()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}
