//! Configuration management for the guestbook server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::error::{AppError, AppResult};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Google Sheets log location and secrets.
///
/// Secrets are optional at load time: a server without them still boots and
/// answers each request with a configuration error.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SheetsConfig {
    /// Service-account credential bundle (JSON)
    pub credentials: Option<String>,
    /// Target spreadsheet identifier
    pub spreadsheet_id: Option<String>,
    /// A1 range holding the log rows
    pub range: String,
    pub api_base: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub sheets: SheetsConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // e.g. GUESTBOOK_SERVER__PORT=9000
            .add_source(
                Environment::with_prefix("GUESTBOOK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option(
                "sheets.credentials",
                env::var("GOOGLE_SHEETS_CREDENTIALS").ok(),
            )?
            .set_override_option(
                "sheets.spreadsheet_id",
                env::var("GOOGLE_SHEETS_ID").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

/// Service-account identity used to sign token requests
#[derive(Debug, Clone)]
pub struct ServiceAccountKey {
    pub client_email: String,
    /// PEM-encoded private key with real newlines
    pub private_key: String,
    pub token_uri: String,
}

#[derive(Deserialize)]
struct RawServiceAccountKey {
    client_email: Option<String>,
    private_key: Option<String>,
    token_uri: Option<String>,
}

impl ServiceAccountKey {
    /// Parse a credential bundle.
    ///
    /// Keys delivered through environment variables carry `\n` escapes; they are
    /// turned back into newlines here and nowhere else.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let parsed: RawServiceAccountKey = serde_json::from_str(raw)
            .map_err(|e| AppError::Configuration(format!("Invalid credentials format: {}", e)))?;

        let client_email = parsed
            .client_email
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Configuration("Credentials missing client_email".to_string()))?;
        let private_key = parsed
            .private_key
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Configuration("Credentials missing private_key".to_string()))?;

        Ok(Self {
            client_email,
            private_key: private_key.replace("\\n", "\n"),
            token_uri: parsed
                .token_uri
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
        })
    }
}

/// Everything needed to reach the log for one request
#[derive(Debug, Clone)]
pub struct SheetsTarget {
    pub key: ServiceAccountKey,
    pub spreadsheet_id: String,
}

impl SheetsConfig {
    /// Whether both secrets are present (not whether they are valid)
    pub fn is_configured(&self) -> bool {
        present(&self.credentials).is_some() && present(&self.spreadsheet_id).is_some()
    }

    /// Resolve the secrets into a usable target, or fail with a configuration error
    pub fn target(&self) -> AppResult<SheetsTarget> {
        let (credentials, spreadsheet_id) =
            match (present(&self.credentials), present(&self.spreadsheet_id)) {
                (Some(c), Some(id)) => (c, id),
                _ => {
                    return Err(AppError::Configuration(
                        "Missing Google Sheets configuration".to_string(),
                    ))
                }
            };

        Ok(SheetsTarget {
            key: ServiceAccountKey::from_json(credentials)?,
            spreadsheet_id: spreadsheet_id.to_string(),
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            spreadsheet_id: None,
            range: "Sheet1!A:G".to_string(),
            api_base: "https://sheets.googleapis.com".to_string(),
            request_timeout_secs: 30,
        }
    }
}
