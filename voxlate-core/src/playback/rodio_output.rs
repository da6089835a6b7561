//! Audio playback using rodio

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::output::AudioOutput;

/// Plays files on the default output device. The device stream is opened on
/// the first `play_file` and kept for the life of the output.
#[derive(Default)]
pub struct RodioOutput {
    stream: Option<OutputStream>,
    sink: Option<Sink>,
}

impl RodioOutput {
    pub fn new() -> Self {
        Self::default()
    }

    fn stream(&mut self) -> Result<&OutputStream> {
        let stream = match self.stream.take() {
            Some(stream) => stream,
            None => {
                let mut stream = OutputStreamBuilder::open_default_stream()
                    .context("no audio output device available")?;
                stream.log_on_drop(false);
                tracing::info!("Audio output initialized");
                stream
            }
        };
        let stream: &OutputStream = self.stream.insert(stream);
        Ok(stream)
    }
}

impl AudioOutput for RodioOutput {
    fn play_file(&mut self, path: &Path) -> Result<()> {
        self.stop();

        let file = File::open(path).with_context(|| format!("Failed to open audio file {path:?}"))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("Failed to decode audio file {path:?}"))?;

        let sink = Sink::connect_new(self.stream()?.mixer());
        sink.append(source);
        self.sink = Some(sink);

        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.sink.as_ref().is_some_and(|sink| !sink.empty())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}
