use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_contact::{EmailJsConfig, GeminiConfig};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Display name the delivered email is addressed to.
    pub recipient_name: String,
    #[serde(default)]
    pub owner_email: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Unprefixed variables kept for existing deployments (EMAILJS_SERVICE_ID, GEMINI_API_KEY, ...)
    /// 2. Environment variables (FOLIO__EMAILJS__SERVICE_ID, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("contact.recipient_name", "Sidarth")?
            .set_default("contact.owner_email", "iamsidarth@gmail.com")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("EMAILJS_SERVICE_ID", "emailjs.service_id"),
            ("EMAILJS_TEMPLATE_ID", "emailjs.template_id"),
            ("EMAILJS_PUBLIC_KEY", "emailjs.public_key"),
            ("EMAILJS_PRIVATE_KEY", "emailjs.private_key"),
            ("VITE_GEMINI_API_KEY", "gemini.api_key"),
            ("GEMINI_API_KEY", "gemini.api_key"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Email credentials are not checked here: a site without them still
    /// serves every page and reports the problem on submission.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.recipient_name.trim().is_empty() {
            return Err("Contact recipient_name must not be empty".to_string());
        }
        Ok(())
    }
}
