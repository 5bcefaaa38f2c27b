pub mod admin;
pub mod campaign;
pub mod payment;
pub mod user;
