//! Completion chime played when a submission settles.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Seam for the completion sound so tests can observe or silence it.
pub trait CompletionChime: Send + Sync {
    /// Play the fixed notification sound.
    ///
    /// Failures are for the caller to log and ignore; they never affect the
    /// submission outcome.
    fn play(&self) -> Result<()>;
}

const CHIME_SAMPLE_RATE: u32 = 44_100;
const CHIME_FREQ_HZ: f32 = 880.0;
const CHIME_DURATION_MS: u32 = 350;

/// Players tried in order; each takes a WAV path as its final argument.
const PLAYERS: &[(&str, &[&str])] = &[("paplay", &[]), ("aplay", &["-q"]), ("afplay", &[])];

/// Plays a short synthesized chime through the first available system player.
pub struct SystemChime;

impl SystemChime {
    /// Render the chime as a mono 16-bit WAV at `path`.
    fn write_chime_wav(path: &Path) -> Result<()> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: CHIME_SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer =
            hound::WavWriter::create(path, spec).context("Failed to create chime file")?;

        let total_samples = CHIME_SAMPLE_RATE * CHIME_DURATION_MS / 1000;
        for n in 0..total_samples {
            let t = n as f32 / CHIME_SAMPLE_RATE as f32;
            // Linear fade-out keeps the cut-off from clicking.
            let envelope = 1.0 - n as f32 / total_samples as f32;
            let sample = (t * CHIME_FREQ_HZ * std::f32::consts::TAU).sin() * envelope;
            writer
                .write_sample((sample * i16::MAX as f32 * 0.5) as i16)
                .context("Failed to write chime sample")?;
        }
        writer.finalize().context("Failed to finalize chime file")?;
        Ok(())
    }
}

impl CompletionChime for SystemChime {
    fn play(&self) -> Result<()> {
        let wav_path =
            std::env::temp_dir().join(format!("scrivano_chime_{}.wav", std::process::id()));
        Self::write_chime_wav(&wav_path)?;

        let mut last_err = None;
        for (player, args) in PLAYERS {
            let status = Command::new(player)
                .args(*args)
                .arg(&wav_path)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();
            match status {
                Ok(status) if status.success() => {
                    let _ = std::fs::remove_file(&wav_path);
                    return Ok(());
                }
                Ok(status) => {
                    last_err = Some(anyhow::anyhow!("{player} exited with {status}"));
                }
                Err(err) => {
                    last_err =
                        Some(anyhow::Error::new(err).context(format!("Failed to spawn {player}")));
                }
            }
        }

        let _ = std::fs::remove_file(&wav_path);
        Err(last_err.unwrap_or_else(|| anyhow::anyhow!("No audio player available")))
    }
}
