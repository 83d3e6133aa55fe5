use std::env;

/// Default Dream Gateway host used when no host is configured.
pub const DEFAULT_HOST: &str = "https://dream-gateway.livepeer.cloud";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: Option<String>,
    pub api_key: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            host: None,
            api_key: None,
        }
    }
}

impl GatewayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let host = env::var("DREAM_GATEWAY_HOST").ok();
        let api_key = env::var("DREAM_GATEWAY_API_KEY").ok();

        GatewayConfig { host, api_key }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The host every request and download is resolved against.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_host() {
        let config = GatewayConfig::new();
        assert_eq!(config.host(), DEFAULT_HOST);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = GatewayConfig::new()
            .with_host("http://localhost:8935")
            .with_api_key("secret");
        assert_eq!(config.host(), "http://localhost:8935");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }
}
