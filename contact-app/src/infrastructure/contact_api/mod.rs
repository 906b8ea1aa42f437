mod client;
mod types;

pub use client::ContactApiClient;
pub use types::ErrorBody;
