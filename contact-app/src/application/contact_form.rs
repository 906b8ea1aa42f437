use super::ContactValidator;
use crate::domain::{ContactDraft, ContactField, ContactSubmission, FieldErrors, SubmissionStatus};
use contact_errors::ContactError;

const SUBMIT_LABEL: &str = "Submit";
const SENDING_LABEL: &str = "Sending...";

/// Local state of one mounted contact form.
///
/// `idle --begin_submit(valid)--> loading --finish--> idle`. An invalid draft
/// stays idle with inline errors, and a submit while loading is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormState {
    draft: ContactDraft,
    errors: FieldErrors,
    loading: bool,
    status: Option<SubmissionStatus>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.draft.get(field)
    }

    pub fn set_value(&mut self, field: ContactField, value: String) {
        self.draft.set(field, value);
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> Option<&SubmissionStatus> {
        self.status.as_ref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Validates the draft and, if it passes, drops the previous status,
    /// enters the loading state and hands back the submission to send.
    /// Returns `None` when nothing should be sent; an invalid attempt keeps
    /// the last status banner.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.loading {
            tracing::debug!("Contact submit ignored, a request is already in flight");
            return None;
        }

        match ContactValidator::validate(&self.draft) {
            Ok(submission) => {
                self.status = None;
                self.errors = FieldErrors::new();
                self.loading = true;
                Some(submission)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Records the result of the request started by `begin_submit`.
    pub fn finish(&mut self, outcome: Result<(), ContactError>) {
        let status = SubmissionStatus::from_outcome(&outcome);
        if status.is_success() {
            self.draft.clear();
        }
        self.status = Some(status);
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StatusKind, SUCCESS_MESSAGE};

    fn filled_form() -> ContactFormState {
        let mut form = ContactFormState::new();
        form.set_value(ContactField::FirstName, "Jane".to_string());
        form.set_value(ContactField::LastName, "Doe".to_string());
        form.set_value(ContactField::Email, "jane@x.com".to_string());
        form.set_value(ContactField::CompanyName, "Acme".to_string());
        form.set_value(ContactField::ServiceInterested, "Consulting".to_string());
        form.set_value(ContactField::Message, "I need help with my servers.".to_string());
        form
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut form = filled_form();
        form.set_value(ContactField::Message, "hi".to_string());

        assert!(form.begin_submit().is_none());
        assert!(!form.is_loading());
        assert!(form.status().is_none());
        assert_eq!(
            form.error(ContactField::Message),
            Some("Message must be at least 10 characters")
        );
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.value(ContactField::Message), "hi");
    }

    #[test]
    fn test_valid_submit_enters_loading() {
        let mut form = filled_form();

        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.company_name(), "Acme");
        assert!(form.is_loading());
        assert_eq!(form.submit_label(), "Sending...");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut form = filled_form();

        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert!(form.is_loading());
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish(Ok(()));

        assert!(!form.is_loading());
        assert_eq!(form.submit_label(), "Submit");
        let status = form.status().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.message, SUCCESS_MESSAGE);
        for field in ContactField::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish(Err(ContactError::Application(Some("X".to_string()))));

        assert!(!form.is_loading());
        let status = form.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, "X");
        assert_eq!(form.value(ContactField::FirstName), "Jane");
    }

    #[test]
    fn test_transport_failure_message() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish(Err(ContactError::Transport("connection reset".to_string())));

        assert!(!form.is_loading());
        assert_eq!(
            form.status().unwrap().message,
            "Failed to send message. Please try again later."
        );
    }

    #[test]
    fn test_invalid_attempt_keeps_previous_status() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish(Err(ContactError::Application(None)));

        form.set_value(ContactField::Email, "not-an-email".to_string());
        assert!(form.begin_submit().is_none());
        assert_eq!(
            form.status().unwrap().message,
            "Something went wrong. Please try again."
        );
        assert_eq!(form.error(ContactField::Email), Some("Invalid email address"));
    }

    #[test]
    fn test_valid_attempt_clears_previous_status() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish(Err(ContactError::Application(None)));
        assert!(form.status().is_some());

        assert!(form.begin_submit().is_some());
        assert!(form.status().is_none());
    }

    #[test]
    fn test_fixing_a_field_clears_its_error_on_next_submit() {
        let mut form = filled_form();
        form.set_value(ContactField::LastName, String::new());
        assert!(form.begin_submit().is_none());
        assert!(form.error(ContactField::LastName).is_some());

        form.set_value(ContactField::LastName, "Doe".to_string());
        assert!(form.begin_submit().is_some());
        assert!(form.error(ContactField::LastName).is_none());
    }
}
