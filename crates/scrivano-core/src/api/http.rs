//! reqwest implementation of the transcription service client.
//!
//! Both endpoints take multipart forms:
//! - `/estimate`: `file_size`, `extension`, `model` fields, JSON response
//!   with an `estimated_time` field
//! - `/upload`: `file` (binary part), `model`, `split` fields, JSON response
//!   with a `text` field

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::{EstimateRequest, EstimateResponse, TranscriptionApi, UploadRequest, UploadResponse};
use crate::config::ApiConfig;

/// Default request timeout. Transcribing long media can take minutes.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// HTTP client for the estimate and upload endpoints.
pub struct HttpApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl TranscriptionApi for HttpApi {
    async fn estimate(&self, request: EstimateRequest) -> Result<EstimateResponse> {
        let form = reqwest::multipart::Form::new()
            .text("file_size", request.file_size.to_string())
            .text("extension", request.extension)
            .text("model", request.tier.as_str());

        let response = self
            .client
            .post(self.config.estimate_url())
            .multipart(form)
            .send()
            .await
            .context("Failed to send estimate request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Estimate endpoint error ({status}): {error_text}");
        }

        let body = response
            .text()
            .await
            .context("Failed to read estimate response")?;
        let parsed: EstimateResponse =
            serde_json::from_str(&body).context("Failed to parse estimate response")?;
        Ok(parsed)
    }

    async fn upload(&self, request: UploadRequest) -> Result<UploadResponse> {
        let UploadRequest {
            file_name,
            mime_type,
            data,
            tier,
            split_text,
        } = request;

        crate::verbose!("Uploading {file_name} ({} bytes)...", data.len());

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(data)
                    .file_name(file_name)
                    .mime_str(&mime_type)?,
            )
            .text("model", tier.as_str())
            .text("split", split_text.to_string());

        let response = self
            .client
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await
            .context("Failed to send upload request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Upload endpoint error ({status}): {error_text}");
        }

        let body = response
            .text()
            .await
            .context("Failed to read upload response")?;
        let parsed: UploadResponse =
            serde_json::from_str(&body).context("Failed to parse upload response")?;
        Ok(parsed)
    }
}
