mod contact_form;
mod submit_contact;
mod validate_contact;

pub use contact_form::ContactFormState;
pub use submit_contact::SubmitContact;
pub use validate_contact::ContactValidator;
