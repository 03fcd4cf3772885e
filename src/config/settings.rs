use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed cross-origin callers. Only these origins may use the API
    /// from a browser; methods and headers are restricted in the CORS layer.
    /// Single-word key so SERVER_ORIGINS maps to it from the environment.
    #[serde(default = "default_origins")]
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Delivery backend: "resend" (HTTP provider) or "console" (log only)
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Provider credential, required for the resend backend
    #[serde(default)]
    pub key: Option<String>,
    /// Sender address shown on outbound mail
    #[serde(default = "default_from")]
    pub from: String,
    /// Internal mailbox for admin copies; copies are sent only when set
    #[serde(default)]
    pub admin: Option<String>,
    /// Outbound HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "https://sunnyshelf.org".to_string(),
        "https://www.sunnyshelf.org".to_string(),
    ]
}

fn default_backend() -> String {
    "resend".to_string()
}

fn default_from() -> String {
    "Sunny Shelf Toy Library <hello@sunnyshelf.org>".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("email.backend", "resend")?
            .set_default("email.from", default_from())?
            .set_default("email.timeout", 30)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // SERVER_HOST, SERVER_PORT, SERVER_ORIGINS, EMAIL_KEY, EMAIL_FROM,
            // EMAIL_ADMIN, etc.
            .add_source(
                Environment::default()
                    .separator("_")
                    .try_parsing(true)
                    .list_separator(","),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            origins: default_origins(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            key: None,
            from: default_from(),
            admin: None,
            timeout: default_timeout(),
        }
    }
}
