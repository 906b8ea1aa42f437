mod contact_field;
mod contact_submission;
mod field_errors;
mod submission_status;

pub use contact_field::{ContactField, InputKind};
pub use contact_submission::{ContactDraft, ContactSubmission};
pub use field_errors::FieldErrors;
pub use submission_status::{StatusKind, SubmissionStatus, SUCCESS_MESSAGE};
