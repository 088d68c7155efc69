//! scrivano — submit a media file to a transcription service.
//!
//! Reads the service base URL from `SCRIVANO_API_URL` (a `.env` file is
//! honored), runs one submission, renders a live progress line while the
//! service works, then prints the transcript and offers to copy it.

mod present;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use scrivano_core::{
    ApiConfig, HttpApi, Orchestrator, ProcessingTier, SelectedFile, SelectionGate,
    SubmissionOptions, SystemChime, new_shared_state, set_verbose,
};

#[derive(Parser)]
#[command(name = "scrivano", version, about = "Transcribe a media file via a remote service")]
struct Cli {
    /// Media file to transcribe
    file: PathBuf,

    /// Processing tier: small, medium or large
    #[arg(long, default_value = "small")]
    model: ProcessingTier,

    /// Ask the service to split the transcript into paragraphs
    #[arg(long)]
    split: bool,

    /// Skip the completion sound
    #[arg(long)]
    no_sound: bool,

    /// Copy the transcript to the clipboard without asking
    #[arg(long)]
    copy: bool,

    /// Print verbose progress information
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    set_verbose(cli.verbose);

    let config = ApiConfig::from_env()?;
    let api = Arc::new(HttpApi::new(config)?);

    let state = new_shared_state();
    let mut gate = SelectionGate::with_options(
        Arc::clone(&state),
        SubmissionOptions {
            tier: cli.model,
            split_text: cli.split,
            sound_enabled: !cli.no_sound,
        },
    );
    gate.select_file(SelectedFile::from_path(&cli.file)?);

    let orchestrator = Orchestrator::new(Arc::clone(&state), api, Arc::new(SystemChime));

    let progress = tokio::spawn(present::progress_line(Arc::clone(&state)));
    orchestrator.submit(&gate).await;
    progress.await?;

    let snapshot = state.lock().unwrap().clone();
    present::show_outcome(&snapshot, cli.copy)
}
