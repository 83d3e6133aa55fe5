pub mod config;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod models;
pub mod present;

pub use config::{GatewayConfig, DEFAULT_HOST};
pub use error::{GatewayError, Result};
pub use gateway::{DreamGatewayClient, ImageClient, MediaFetcher, VideoClient};
pub use models::*;
