pub mod admin_api;
pub mod auth_api;
pub mod campaign_api;
pub mod client;
pub mod payment_api;

pub use client::ApiClient;
