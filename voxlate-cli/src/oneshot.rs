use anyhow::{bail, Result};
use std::time::Duration;
use tracing::info;
use voxlate_core::{
    controller::{actor::create_gateways, interaction::run_pipeline, Interaction},
    playback::{default_output, PlaybackAck, PlaybackSink},
    SettingsManager,
};

use crate::formatter::Formatter;

const PLAYBACK_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Translate `text` once, print the result and optionally play it, waiting
/// until playback has finished before returning.
pub async fn run_once(
    settings_manager: SettingsManager,
    text: &str,
    language: &str,
    play: bool,
) -> Result<()> {
    let formatter = Formatter::new();
    let settings = settings_manager.settings();
    let mut interaction = Interaction::new();

    let prepared = match interaction.begin_translation(text, language) {
        Ok(prepared) => prepared,
        Err(failure) => bail!("{failure}"),
    };

    let (translator, synthesizer) = create_gateways(&settings).await;
    let result = run_pipeline(translator.as_ref(), synthesizer.as_ref(), &prepared).await;
    let failed = result.is_err();
    interaction.complete(result);

    if failed {
        bail!("{}", interaction.display());
    }
    formatter.print_translation(prepared.language.display_name, interaction.display());

    if !play {
        return Ok(());
    }

    let mut sink = PlaybackSink::new(settings.playback.audio_path.clone(), default_output());
    if let PlaybackAck::Started { path } = sink.play(interaction.audio())? {
        info!(?path, "Waiting for one-shot playback to finish");
        while sink.is_playing() {
            tokio::time::sleep(PLAYBACK_POLL_INTERVAL).await;
        }
    }

    Ok(())
}
