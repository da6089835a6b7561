use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::output::AudioOutput;

/// A play command received by [`RecordingOutput`], with the file contents as
/// they were when playback was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCommand {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

#[derive(Default)]
struct RecordingState {
    commands: Vec<PlayCommand>,
    failure: Option<String>,
    playing: bool,
}

/// Audio output that records play commands instead of making sound. Clones
/// share state.
#[derive(Clone, Default)]
pub struct RecordingOutput {
    state: Arc<Mutex<RecordingState>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `play_file` calls fail with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        self.state.lock().unwrap().failure = Some(message.into());
    }

    pub fn commands(&self) -> Vec<PlayCommand> {
        self.state.lock().unwrap().commands.clone()
    }

    /// Simulate the end of the current playback
    pub fn finish(&self) {
        self.state.lock().unwrap().playing = false;
    }
}

impl AudioOutput for RecordingOutput {
    fn play_file(&mut self, path: &Path) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = &state.failure {
            bail!("{message}");
        }

        let contents =
            std::fs::read(path).with_context(|| format!("Failed to read audio file {path:?}"))?;
        state.commands.push(PlayCommand {
            path: path.to_path_buf(),
            contents,
        });
        state.playing = true;
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.state.lock().unwrap().playing
    }

    fn stop(&mut self) {
        self.state.lock().unwrap().playing = false;
    }
}
