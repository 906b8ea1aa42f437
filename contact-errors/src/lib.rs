mod contact_error;

pub use contact_error::{ContactError, APPLICATION_FALLBACK_MESSAGE, TRANSPORT_FAILURE_MESSAGE};
