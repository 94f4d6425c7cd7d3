// Library exports for integration tests and the server binary

pub mod api;
pub mod config;
pub mod errors;
pub mod services;
pub mod types;
