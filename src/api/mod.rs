pub mod admin_auth;
pub mod basket;
pub mod catalog;
pub mod client;
pub mod envelope;
pub mod error;
pub mod reviews;

pub use client::ApiClient;
pub use error::ApiError;
