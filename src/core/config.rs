//! Application configuration.
//!
//! Contact delivery credentials are baked into the bundle at compile time,
//! since the browser is the one calling EmailJS:
//!
//! - `PORTFOLIO_EMAILJS_SERVICE_ID`
//! - `PORTFOLIO_EMAILJS_TEMPLATE_ID`
//! - `PORTFOLIO_EMAILJS_PUBLIC_KEY`
//!
//! The server reads its own settings at startup with `Config::from_env()`
//! after calling `dotenvy::dotenv()`.

use thiserror::Error;

/// EmailJS send endpoint
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// Credentials for the EmailJS delivery service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS public key, sent as `user_id`
    pub public_key: String,
    pub endpoint: String,
}

impl EmailJsConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            endpoint: EMAILJS_ENDPOINT.to_string(),
        }
    }

    /// Credentials captured from the build environment (empty when unset)
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("PORTFOLIO_EMAILJS_SERVICE_ID").unwrap_or_default(),
            option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID").unwrap_or_default(),
            option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY").unwrap_or_default(),
        )
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// First missing credential, if any
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("PORTFOLIO_EMAILJS_SERVICE_ID", &self.service_id),
            ("PORTFOLIO_EMAILJS_TEMPLATE_ID", &self.template_id),
            ("PORTFOLIO_EMAILJS_PUBLIC_KEY", &self.public_key),
        ];
        match required.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::Missing(name)),
            None => Ok(()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Server configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directive, from `PORTFOLIO_LOG`
    /// Example: info,portfolio=debug
    pub log_filter: String,

    /// Delivery credentials compiled into the client bundle
    pub emailjs: EmailJsConfig,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            log_filter: std::env::var("PORTFOLIO_LOG").unwrap_or_else(|_| "info".to_string()),
            emailjs: EmailJsConfig::from_build_env(),
        }
    }

    /// Check if the contact form can deliver messages
    pub fn has_delivery(&self) -> bool {
        self.emailjs.is_configured()
    }
}

#[cfg(feature = "ssr")]
impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
