mod contact_form;
mod form_field;
mod status_banner;

pub use contact_form::ContactForm;
pub use form_field::FormField;
pub use status_banner::StatusBanner;
