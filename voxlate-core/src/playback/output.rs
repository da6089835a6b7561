use anyhow::{bail, Result};
use std::path::Path;

/// A local audio device that can decode and play a file.
///
/// Implementations are owned by the controller task and need not be `Send`.
pub trait AudioOutput {
    /// Start playing `path` without waiting for it to finish, replacing
    /// whatever is currently playing. The device is opened on first use.
    fn play_file(&mut self, path: &Path) -> Result<()>;

    /// Whether audio started by `play_file` is still playing.
    fn is_playing(&self) -> bool;

    fn stop(&mut self);
}

/// Output used when voxlate is built without the `audio` feature.
pub struct UnavailableOutput;

impl AudioOutput for UnavailableOutput {
    fn play_file(&mut self, path: &Path) -> Result<()> {
        bail!(
            "audio playback is not available in this build (enable the `audio` feature); audio was saved to {}",
            path.display()
        )
    }

    fn is_playing(&self) -> bool {
        false
    }

    fn stop(&mut self) {}
}

/// The system's default audio output.
pub fn default_output() -> Box<dyn AudioOutput> {
    #[cfg(feature = "audio")]
    {
        Box::new(super::rodio_output::RodioOutput::new())
    }
    #[cfg(not(feature = "audio"))]
    {
        Box::new(UnavailableOutput)
    }
}
