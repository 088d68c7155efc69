use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing tiers offered by the transcription backend.
///
/// The tier is sent verbatim as the `model` field of both the estimate and
/// the upload request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingTier {
    #[default]
    Small,
    Medium,
    Large,
}

impl ProcessingTier {
    /// Get the string identifier for this tier
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingTier::Small => "small",
            ProcessingTier::Medium => "medium",
            ProcessingTier::Large => "large",
        }
    }

    /// List all available tiers
    pub fn all() -> &'static [ProcessingTier] {
        &[
            ProcessingTier::Small,
            ProcessingTier::Medium,
            ProcessingTier::Large,
        ]
    }

    /// Human-readable display name for this tier
    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessingTier::Small => "Small (fastest)",
            ProcessingTier::Medium => "Medium (slower, more accurate)",
            ProcessingTier::Large => "Large (most accurate, slowest)",
        }
    }
}

impl fmt::Display for ProcessingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProcessingTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(ProcessingTier::Small),
            "medium" => Ok(ProcessingTier::Medium),
            "large" => Ok(ProcessingTier::Large),
            _ => Err(format!(
                "Unknown processing tier: {}. Available: small, medium, large",
                s
            )),
        }
    }
}

/// Environment variable holding the transcription service base URL
pub const API_URL_ENV_VAR: &str = "SCRIVANO_API_URL";

/// Base URL of the transcription service.
///
/// Supplied via external configuration (`SCRIVANO_API_URL`), never hardcoded.
/// The estimate and upload endpoints are derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate and normalize a base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        if base_url.is_empty() {
            anyhow::bail!(
                "Transcription service URL not configured.\n\
                 Set the {API_URL_ENV_VAR} environment variable, e.g. {API_URL_ENV_VAR}=http://localhost:8000"
            );
        }

        let trimmed = base_url.trim();
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            anyhow::bail!(
                "Invalid service URL: must start with http:// or https://\n\
                 Got: {}\n\
                 Example: {}=http://localhost:8000",
                trimmed,
                API_URL_ENV_VAR
            );
        }

        // Basic validation: ensure there's a host after the scheme
        let after_scheme = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .unwrap_or("");
        if after_scheme.is_empty() || after_scheme.starts_with('/') {
            anyhow::bail!(
                "Invalid service URL: missing host\n\
                 Got: {}\n\
                 Example: {}=http://localhost:8000",
                trimmed,
                API_URL_ENV_VAR
            );
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Read the base URL from the environment.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_URL_ENV_VAR) {
            Ok(url) => Self::new(&url),
            Err(_) => Self::new(""),
        }
    }

    /// Full URL of the time-estimate endpoint
    pub fn estimate_url(&self) -> String {
        format!("{}/estimate", self.base_url)
    }

    /// Full URL of the upload endpoint
    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tier_round_trips_through_str() {
        for tier in ProcessingTier::all() {
            assert_eq!(ProcessingTier::from_str(tier.as_str()), Ok(*tier));
        }
    }

    #[test]
    fn tier_from_str_is_case_insensitive() {
        assert_eq!(
            ProcessingTier::from_str("LARGE"),
            Ok(ProcessingTier::Large)
        );
    }

    #[test]
    fn tier_from_str_rejects_unknown() {
        assert!(ProcessingTier::from_str("tiny").is_err());
    }

    #[test]
    fn default_tier_is_small() {
        assert_eq!(ProcessingTier::default(), ProcessingTier::Small);
    }

    #[test]
    fn config_builds_endpoint_urls() {
        let config = ApiConfig::new("http://localhost:8000").unwrap();
        assert_eq!(config.estimate_url(), "http://localhost:8000/estimate");
        assert_eq!(config.upload_url(), "http://localhost:8000/upload");
    }

    #[test]
    fn config_strips_trailing_slash() {
        let config = ApiConfig::new("https://api.example.com/").unwrap();
        assert_eq!(config.upload_url(), "https://api.example.com/upload");
    }

    #[test]
    fn config_rejects_empty_url() {
        assert!(ApiConfig::new("").is_err());
    }

    #[test]
    fn config_rejects_missing_scheme() {
        assert!(ApiConfig::new("localhost:8000").is_err());
    }

    #[test]
    fn config_rejects_missing_host() {
        assert!(ApiConfig::new("http://").is_err());
        assert!(ApiConfig::new("https:///upload").is_err());
    }
}
