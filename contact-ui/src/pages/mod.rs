mod contact;

pub use contact::ContactPage;
