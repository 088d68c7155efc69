pub mod api;
pub mod clipboard;
pub mod config;
pub mod gate;
pub mod media;
pub mod notify;
pub mod state;
pub mod submit;
pub mod ticker;
pub mod verbose;

pub use api::{
    DEFAULT_TIMEOUT_SECS, EstimateRequest, EstimateResponse, HttpApi, TranscriptionApi,
    UploadRequest, UploadResponse,
};
pub use clipboard::{CommandClipboard, CopyBackend, CopyError, NativeClipboard, copy_to_clipboard};
pub use config::{API_URL_ENV_VAR, ApiConfig, ProcessingTier};
pub use gate::{SelectionGate, SubmissionOptions};
pub use media::SelectedFile;
pub use notify::{CompletionChime, SystemChime};
pub use state::{Phase, SharedSubmissionState, SubmissionState, new_shared_state};
pub use submit::{Orchestrator, UPLOAD_ERROR_MESSAGE};
pub use ticker::TickerHandle;
pub use verbose::set_verbose;
