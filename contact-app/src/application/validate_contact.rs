use crate::domain::{ContactDraft, ContactField, ContactSubmission, FieldErrors};
use regex_lite::Regex;
use std::sync::LazyLock;

const MIN_MESSAGE_LEN: usize = 10;

// Leading '.' and ".." are rejected in `is_valid_email`, regex-lite has no lookaround.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

pub struct ContactValidator;

impl ContactValidator {
    /// Checks every field and returns either the validated submission or one
    /// message per offending field. Never short-circuits on the first failure.
    pub fn validate(draft: &ContactDraft) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        for field in ContactField::ALL {
            if let Some(message) = Self::check_field(field, draft.get(field)) {
                errors.insert(field, message);
            }
        }

        if errors.is_empty() {
            Ok(ContactSubmission::from_valid_draft(draft.clone()))
        } else {
            tracing::debug!(
                "Contact form rejected, invalid fields: {:?}",
                errors.fields().map(ContactField::name).collect::<Vec<_>>()
            );
            Err(errors)
        }
    }

    pub fn check_field(field: ContactField, value: &str) -> Option<&'static str> {
        match field {
            ContactField::FirstName => Self::required(value, "First name is required"),
            ContactField::LastName => Self::required(value, "Last name is required"),
            ContactField::CompanyName => Self::required(value, "Company name is required"),
            ContactField::ServiceInterested => Self::required(value, "Service is required"),
            ContactField::Email => {
                (!Self::is_valid_email(value)).then_some("Invalid email address")
            }
            // UTF-16 code units, the unit browsers report for input length.
            ContactField::Message => (value.encode_utf16().count() < MIN_MESSAGE_LEN)
                .then_some("Message must be at least 10 characters"),
        }
    }

    pub fn is_valid_email(email: &str) -> bool {
        !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
    }

    fn required(value: &str, message: &'static str) -> Option<&'static str> {
        value.trim().is_empty().then_some(message)
    }
}
