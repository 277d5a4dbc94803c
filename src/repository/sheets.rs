//! Google Sheets visit log
//!
//! Every call authenticates from scratch: a service-account assertion is
//! signed, exchanged for an access token, and used for exactly one values
//! request. Nothing is cached between calls.

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

use crate::{
    config::{SheetsConfig, SheetsTarget},
    error::{AppError, AppResult},
    models::LogRow,
};

use super::VisitLogRepository;

pub const SCOPE_READ_WRITE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const SCOPE_READ_ONLY: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Claims of the service-account assertion sent to the token endpoint
#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// `ValueRange` as returned by the values API; `values` is omitted for an empty range
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

pub struct SheetsVisitLog {
    config: SheetsConfig,
}

impl SheetsVisitLog {
    pub fn new(config: SheetsConfig) -> Self {
        Self { config }
    }

    /// Authenticate a fresh client for one request
    async fn connect(&self, scope: &str) -> AppResult<SheetsSession> {
        // Configuration problems must surface before anything goes on the wire
        let target = self.config.target()?;
        let signing_key = EncodingKey::from_rsa_pem(target.key.private_key.as_bytes())
            .map_err(|e| AppError::Configuration(format!("Invalid private key: {}", e)))?;
        let values_url = values_url(&self.config.api_base, &target.spreadsheet_id)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(self.config.request_timeout_secs))
            .build()?;

        let assertion = sign_assertion(&target, scope, &signing_key)?;

        tracing::debug!("Requesting access token for {}", target.key.client_email);
        let response = http
            .post(&target.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;
        let token: TokenResponse = ensure_success(response, "Token request")
            .await?
            .json()
            .await?;

        Ok(SheetsSession {
            http,
            access_token: token.access_token,
            values_url,
        })
    }
}

fn sign_assertion(target: &SheetsTarget, scope: &str, key: &EncodingKey) -> AppResult<String> {
    let iat = Utc::now().timestamp();
    let claims = AssertionClaims {
        iss: &target.key.client_email,
        scope,
        aud: &target.key.token_uri,
        iat,
        exp: iat + ASSERTION_LIFETIME_SECS,
    };
    encode(&Header::new(Algorithm::RS256), &claims, key)
        .map_err(|e| AppError::Configuration(format!("Failed to sign service account assertion: {}", e)))
}

/// `{api_base}/v4/spreadsheets/{id}/values`
fn values_url(api_base: &str, spreadsheet_id: &str) -> AppResult<Url> {
    let mut url = Url::parse(api_base)
        .map_err(|e| AppError::Configuration(format!("Invalid Sheets API base URL: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| AppError::Configuration("Sheets API base URL cannot carry a path".to_string()))?
        .pop_if_empty()
        .extend(["v4", "spreadsheets", spreadsheet_id, "values"]);
    Ok(url)
}

/// Append a single path segment to a URL that is known to have a path
fn with_segment(base: &Url, segment: &str) -> AppResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::Internal("Values URL cannot carry a path".to_string()))?
        .push(segment);
    Ok(url)
}

async fn ensure_success(response: Response, what: &str) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::Dependency(format!("{} failed with {}: {}", what, status, body)))
}

struct SheetsSession {
    http: Client,
    access_token: String,
    values_url: Url,
}

#[async_trait]
impl VisitLogRepository for SheetsVisitLog {
    async fn append_row(&self, row: &LogRow) -> AppResult<()> {
        let session = self.connect(SCOPE_READ_WRITE).await?;
        let url = with_segment(&session.values_url, &format!("{}:append", self.config.range))?;

        let response = session
            .http
            .post(url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(&session.access_token)
            .json(&json!({ "values": [row.fields()] }))
            .send()
            .await?;
        ensure_success(response, "Append").await?;

        Ok(())
    }

    async fn read_all_rows(&self) -> AppResult<Vec<LogRow>> {
        let session = self.connect(SCOPE_READ_ONLY).await?;
        let url = with_segment(&session.values_url, &self.config.range)?;

        let response = session
            .http
            .get(url)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        let range: ValueRange = ensure_success(response, "Read")
            .await?
            .json()
            .await?;

        Ok(range.values.into_iter().map(LogRow::from_cells).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_url() {
        let url = values_url("https://sheets.googleapis.com", "abc123").unwrap();
        assert_eq!(url.as_str(), "https://sheets.googleapis.com/v4/spreadsheets/abc123/values");

        let url = with_segment(&url, "Sheet1!A:G:append").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/Sheet1!A:G:append"
        );
    }

    #[test]
    fn test_values_url_trailing_slash() {
        let url = values_url("http://localhost:9000/", "id").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/v4/spreadsheets/id/values");
    }

    #[test]
    fn test_value_range_without_values() {
        let range: ValueRange = serde_json::from_str(r#"{"range":"Sheet1!A1:G1000","majorDimension":"ROWS"}"#).unwrap();
        assert!(range.values.is_empty());
    }

    #[tokio::test]
    async fn test_missing_secrets_fail_before_network() {
        let log = SheetsVisitLog::new(SheetsConfig::default());
        let row = LogRow::from(vec!["3/10/2025, 10.27.04"]);
        assert!(matches!(log.append_row(&row).await, Err(AppError::Configuration(_))));
        assert!(matches!(log.read_all_rows().await, Err(AppError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_invalid_private_key_is_configuration_error() {
        let log = SheetsVisitLog::new(SheetsConfig {
            credentials: Some(r#"{"client_email":"a@b","private_key":"not a pem"}"#.to_string()),
            spreadsheet_id: Some("id".to_string()),
            ..SheetsConfig::default()
        });
        assert!(matches!(log.read_all_rows().await, Err(AppError::Configuration(_))));
    }
}
