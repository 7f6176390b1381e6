pub mod auth;
pub mod remedio;
