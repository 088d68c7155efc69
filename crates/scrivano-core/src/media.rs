//! The selected media file and its upload metadata.

use anyhow::{Context, Result};
use std::path::Path;

/// A media file chosen for submission.
///
/// Created on file pick and replaced wholesale on a new pick, never mutated
/// in place. The selection gate owns it; the orchestrator receives a clone
/// at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    data: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Load a file from disk, keeping its base name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Invalid file name: {}", path.display()))?
            .to_string();
        let data =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self { name, data })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Lower-cased suffix after the last `.` of the name.
    ///
    /// A name without a dot yields the whole lower-cased name.
    pub fn extension(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => self.name.to_lowercase(),
        }
    }

    /// MIME type for the upload part, derived from the extension.
    pub fn mime_type(&self) -> &'static str {
        mime_for_extension(&self.extension())
    }
}

/// Map a media extension to its MIME type.
///
/// Covers the formats the service accepts; anything else is sent as an
/// opaque byte stream.
fn mime_for_extension(extension: &str) -> &'static str {
    match extension {
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "flv" => "video/x-flv",
        "wmv" => "video/x-ms-wmv",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}
