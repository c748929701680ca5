pub mod address;
pub mod client;
pub mod config;
pub mod health;

pub use address::HEALTH_PATH;
pub use client::{ApiError, ServiceClient};
pub use config::{ClientConfig, DEFAULT_VERSION_PREFIX};
pub use health::HealthCheck;
