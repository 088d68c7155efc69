//! Transcription service interface: request/response types and the client seam.

mod http;

pub use http::{DEFAULT_TIMEOUT_SECS, HttpApi};

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::ProcessingTier;
use crate::media::SelectedFile;

/// Fields of the best-effort time-estimate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateRequest {
    pub file_size: u64,
    pub extension: String,
    pub tier: ProcessingTier,
}

impl EstimateRequest {
    /// Derive the estimate fields from a selected file.
    pub fn for_file(file: &SelectedFile, tier: ProcessingTier) -> Self {
        Self {
            file_size: file.size(),
            extension: file.extension(),
            tier,
        }
    }
}

/// Estimate endpoint response.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct EstimateResponse {
    /// Predicted processing duration in seconds.
    pub estimated_time: f64,
}

/// Fields of the mandatory upload call.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
    pub tier: ProcessingTier,
    pub split_text: bool,
}

impl UploadRequest {
    pub fn for_file(file: &SelectedFile, tier: ProcessingTier, split_text: bool) -> Self {
        Self {
            file_name: file.name().to_string(),
            mime_type: file.mime_type().to_string(),
            data: file.data().to_vec(),
            tier,
            split_text,
        }
    }
}

/// Upload endpoint response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    /// The transcribed text.
    pub text: String,
}

/// Client seam for the transcription service.
///
/// The orchestrator only sees this trait; tests substitute their own
/// backends for the reqwest implementation.
#[async_trait]
pub trait TranscriptionApi: Send + Sync {
    /// Request a processing-time prediction.
    ///
    /// Best-effort: callers treat any failure as "no estimate available".
    async fn estimate(&self, request: EstimateRequest) -> Result<EstimateResponse>;

    /// Upload the file for transcription and wait for the text.
    async fn upload(&self, request: UploadRequest) -> Result<UploadResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_request_derives_file_fields() {
        let file = SelectedFile::new("talk.MP4", vec![0u8; 10_000_000]);
        let request = EstimateRequest::for_file(&file, ProcessingTier::Small);
        assert_eq!(request.file_size, 10_000_000);
        assert_eq!(request.extension, "mp4");
        assert_eq!(request.tier, ProcessingTier::Small);
    }

    #[test]
    fn upload_request_carries_file_and_options() {
        let file = SelectedFile::new("talk.mp4", vec![1, 2, 3]);
        let request = UploadRequest::for_file(&file, ProcessingTier::Medium, true);
        assert_eq!(request.file_name, "talk.mp4");
        assert_eq!(request.mime_type, "video/mp4");
        assert_eq!(request.data, vec![1, 2, 3]);
        assert!(request.split_text);
    }

    #[test]
    fn estimate_response_parses_numeric_seconds() {
        let parsed: EstimateResponse = serde_json::from_str(r#"{"estimated_time": 42}"#).unwrap();
        assert_eq!(parsed.estimated_time, 42.0);

        let parsed: EstimateResponse =
            serde_json::from_str(r#"{"estimated_time": 17.5}"#).unwrap();
        assert_eq!(parsed.estimated_time, 17.5);
    }

    #[test]
    fn upload_response_parses_text_field() {
        let parsed: UploadResponse = serde_json::from_str(r#"{"text": "hello world"}"#).unwrap();
        assert_eq!(parsed.text, "hello world");
    }

    #[test]
    fn responses_reject_missing_fields() {
        assert!(serde_json::from_str::<EstimateResponse>("{}").is_err());
        assert!(serde_json::from_str::<UploadResponse>(r#"{"test": "x"}"#).is_err());
    }
}
