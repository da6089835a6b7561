use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::output::AudioOutput;
use crate::speech::AudioBuffer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackAck {
    /// There was no audio to play. Not an error.
    NothingToPlay,
    /// Playback was started from `path` and runs in the background.
    Started { path: PathBuf },
}

/// Persists audio to a fixed path and starts fire-and-forget playback.
///
/// The path is the same for every cycle, so two processes sharing a working
/// directory overwrite each other's audio.
pub struct PlaybackSink {
    audio_path: PathBuf,
    output: Box<dyn AudioOutput>,
}

impl PlaybackSink {
    pub fn new(audio_path: impl Into<PathBuf>, output: Box<dyn AudioOutput>) -> Self {
        Self {
            audio_path: audio_path.into(),
            output,
        }
    }

    pub fn audio_path(&self) -> &Path {
        &self.audio_path
    }

    /// Write `audio` to the audio path and start playing it. Returns as soon
    /// as playback has been started.
    pub fn play(&mut self, audio: Option<&AudioBuffer>) -> Result<PlaybackAck> {
        let Some(audio) = audio.filter(|audio| !audio.is_empty()) else {
            warn!("No audio data available");
            return Ok(PlaybackAck::NothingToPlay);
        };

        self.write(audio)?;
        debug!(path = ?self.audio_path, bytes = audio.len(), "Audio file written");

        self.output.play_file(&self.audio_path)?;
        info!(path = ?self.audio_path, "Audio playback started");

        Ok(PlaybackAck::Started {
            path: self.audio_path.clone(),
        })
    }

    /// Whether the last started playback is still running
    pub fn is_playing(&self) -> bool {
        self.output.is_playing()
    }

    pub fn stop(&mut self) {
        self.output.stop();
    }

    fn write(&self, audio: &AudioBuffer) -> Result<()> {
        if let Some(parent) = self.audio_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {parent:?}"))?;
            }
        }

        fs::write(&self.audio_path, &audio.bytes)
            .with_context(|| format!("Failed to write audio to {:?}", self.audio_path))
    }
}
