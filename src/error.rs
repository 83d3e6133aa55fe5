use std::fmt;

#[derive(Debug)]
pub enum GatewayError {
    ConfigError(String),
    ClientError(String),
    RequestError(String),
    ResponseError(String),
    SerializationError(String),
    ApiError(String),
    DownloadError(u16),
    IoError(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GatewayError::ClientError(msg) => write!(f, "Client error: {}", msg),
            GatewayError::RequestError(msg) => write!(f, "Request error: {}", msg),
            GatewayError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            GatewayError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            GatewayError::ApiError(msg) => write!(f, "Gateway API error: {}", msg),
            GatewayError::DownloadError(status) => {
                write!(f, "Download error: media endpoint returned HTTP {}", status)
            }
            GatewayError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

pub type Result<T> = std::result::Result<T, GatewayError>;
