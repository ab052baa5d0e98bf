//! Breach check - k-anonymity range lookup against a HIBP-style service.
//!
//! Only the first five hex characters of the password's SHA-1 digest are
//! ever sent over the wire; the suffix comparison happens locally.

use data_encoding::HEXUPPER;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use std::time::Duration;
use thiserror::Error;

use crate::types::BreachStatus;

const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Error, Debug)]
enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("service responded with status {0}")]
    Status(StatusCode),
    #[error("malformed record in range response")]
    MalformedRecord,
}

/// Client for the breach-database range endpoint.
///
/// The base URL and timeout are adjustable so tests can point the client at
/// a local fixture; production use wants the defaults.
#[derive(Debug, Clone)]
pub struct BreachClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Default for BreachClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BreachClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Looks up the password's breach count.
    ///
    /// Never fails: any transport error, non-200 status, timeout or
    /// malformed record resolves to `BreachStatus::LookupFailed` after a
    /// single error-level log entry. A clean full scan of the range
    /// response is `Count(0)`.
    pub async fn check(&self, password: &SecretString) -> BreachStatus {
        let (prefix, suffix) = sha1_prefix_suffix(password);

        match self.lookup(&prefix, &suffix).await {
            Ok(count) => BreachStatus::Count(count),
            Err(e) => {
                tracing::error!(error = %e, "breach lookup failed");
                BreachStatus::LookupFailed
            }
        }
    }

    async fn lookup(&self, prefix: &str, suffix: &str) -> Result<u64, LookupError> {
        let url = range_url(&self.base_url, prefix);

        let resp = self
            .http
            .get(&url)
            .header("Add-Padding", "true")
            .timeout(self.timeout)
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            return Err(LookupError::Status(resp.status()));
        }

        let body = resp.text().await?;
        scan_range_body(&body, suffix)
    }
}

/// Splits the uppercase hex SHA-1 digest into the 5-char range prefix and
/// the 35-char suffix kept local.
fn sha1_prefix_suffix(password: &SecretString) -> (String, String) {
    let digest = HEXUPPER.encode(Sha1::digest(password.expose_secret().as_bytes()).as_slice());
    let (prefix, suffix) = digest.split_at(5);
    (prefix.to_string(), suffix.to_string())
}

fn range_url(base_url: &str, prefix: &str) -> String {
    format!("{}/range/{}", base_url, prefix)
}

/// Scans `HEXSUFFIX:COUNT` lines for an exact, case-sensitive suffix match.
fn scan_range_body(body: &str, suffix: &str) -> Result<u64, LookupError> {
    for line in body.lines() {
        let (record_suffix, count) = line
            .trim_end()
            .split_once(':')
            .ok_or(LookupError::MalformedRecord)?;

        if record_suffix == suffix {
            return count
                .trim()
                .parse::<u64>()
                .map_err(|_| LookupError::MalformedRecord);
        }
    }

    Ok(0)
}
