use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default record service URL
const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Default static credential pair attached to every request. There is no
/// login flow; the gateway expects this fixed account.
const DEFAULT_USERNAME: &str = "medilabo";
const DEFAULT_PASSWORD: &str = "medilabo123";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("MEDILABO_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let username =
            std::env::var("MEDILABO_API_USER").unwrap_or_else(|_| DEFAULT_USERNAME.to_string());
        let password =
            std::env::var("MEDILABO_API_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_string());
        let app = AppConfig::builder()
            .server_url(server_url)
            .credentials(username, password)
            .build()
            .expect("default app config is valid");
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Static service username
    pub fn username(&self) -> &str {
        self.app.username.as_deref().unwrap_or(DEFAULT_USERNAME)
    }

    /// Static service password
    pub fn password(&self) -> &str {
        self.app.password.as_deref().unwrap_or(DEFAULT_PASSWORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    #[test]
    fn test_api_url() {
        let config = Config::with_builder(
            AppConfig::builder().server_url("http://127.0.0.1:9999".to_string()),
        )
        .unwrap();
        assert_eq!(config.api_url("/patient/all"), "http://127.0.0.1:9999/patient/all");
    }

    #[test]
    fn test_default_credentials_present() {
        let config = Config::with_builder(AppConfig::builder()).unwrap();
        assert!(!config.username().is_empty());
        assert!(!config.password().is_empty());
    }
}
