pub mod config;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod query;
pub mod services;

pub use config::CatalogConfig;
pub use errors::CoreError;
