//! Submission orchestrator.
//!
//! Drives the four linear phases of one submission:
//! 1. Reset state and request the best-effort time estimate
//! 2. Start the elapsed-time ticker and upload the file
//! 3. Settle into `Done` or `Failed`
//! 4. Teardown: release the ticker, then attempt the completion chime
//!
//! Network failures never escape `submit()`: the estimate degrades the
//! display and an upload failure becomes the `Failed` phase.

use std::sync::Arc;

use crate::api::{EstimateRequest, TranscriptionApi, UploadRequest};
use crate::gate::SelectionGate;
use crate::notify::CompletionChime;
use crate::state::{Phase, SharedSubmissionState};
use crate::ticker::TickerHandle;

/// The one user-facing message for a failed upload. The underlying cause is
/// logged, never shown.
pub const UPLOAD_ERROR_MESSAGE: &str = "File upload failed";

/// Runs one submission at a time against the shared state.
///
/// The orchestrator is the only component that mutates [`SubmissionState`]
/// (via itself and its ticker task), calls the network, or starts a timer.
///
/// [`SubmissionState`]: crate::state::SubmissionState
pub struct Orchestrator {
    state: SharedSubmissionState,
    api: Arc<dyn TranscriptionApi>,
    chime: Arc<dyn CompletionChime>,
}

impl Orchestrator {
    pub fn new(
        state: SharedSubmissionState,
        api: Arc<dyn TranscriptionApi>,
        chime: Arc<dyn CompletionChime>,
    ) -> Self {
        Self { state, api, chime }
    }

    /// Run one submission for the gate's current file and options.
    ///
    /// A call while the gate reports `can_submit() == false` is a silent
    /// no-op: no queueing, no error, no state change.
    pub async fn submit(&self, gate: &SelectionGate) {
        if !gate.can_submit() {
            crate::verbose!("Submit ignored: no file selected or a submission is active");
            return;
        }
        let Some(file) = gate.file().cloned() else {
            return;
        };
        let options = gate.options().clone();

        // Idle → Estimating: zero the state for this run.
        self.state.lock().unwrap().reset_for_submission();

        // Best-effort: a failed estimate degrades the progress display and
        // nothing else.
        match self
            .api
            .estimate(EstimateRequest::for_file(&file, options.tier))
            .await
        {
            Ok(response) => {
                self.state.lock().unwrap().estimated_seconds = Some(response.estimated_time);
            }
            Err(err) => crate::warn!("Time estimate unavailable: {err:#}"),
        }

        // → Running: the ticker and the upload proceed concurrently. The
        // ticker knows nothing of the upload; it runs until stopped below.
        self.state.lock().unwrap().phase = Phase::Running;
        let mut ticker = TickerHandle::start(Arc::clone(&self.state));

        let outcome = self
            .api
            .upload(UploadRequest::for_file(&file, options.tier, options.split_text))
            .await;

        // Teardown: the ticker is released before the terminal phase is
        // written, on success and failure alike. TickerHandle's Drop covers
        // the panic path.
        ticker.stop();

        {
            let mut state = self.state.lock().unwrap();
            match outcome {
                Ok(response) => {
                    state.phase = Phase::Done;
                    state.result_text = Some(response.text);
                }
                Err(err) => {
                    crate::warn!("Upload failed: {err:#}");
                    state.phase = Phase::Failed;
                    state.error_message = Some(UPLOAD_ERROR_MESSAGE.to_string());
                }
            }
        }

        if options.sound_enabled
            && let Err(err) = self.chime.play()
        {
            crate::warn!("Completion sound failed: {err:#}");
        }
    }

    /// Handle to the state this orchestrator drives.
    pub fn state(&self) -> SharedSubmissionState {
        Arc::clone(&self.state)
    }
}
