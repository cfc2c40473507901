pub mod client;
pub mod error;
pub mod payload;
mod types;

pub use client::TranslateClient;
pub use error::TranslateError;
pub use payload::{build_payload, with_localization};
