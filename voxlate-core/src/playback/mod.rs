//! Writes synthesized audio to disk and hands it to the local audio device.

pub mod mock;
pub mod output;
#[cfg(feature = "audio")]
pub mod rodio_output;
pub mod sink;

pub use output::{default_output, AudioOutput};
pub use sink::{PlaybackAck, PlaybackSink};
