//! Runtime assembly
//!
//! Builds the playback controller from its real parts (ElevenLabs
//! client plus the rodio output) or from injected seams in tests, and
//! exposes the handful of operations the CLI needs.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::Receiver;
use crowvox_catalog::{crow, CrowId, VOICES};
use crowvox_playback::output::{AudioOutput, RodioOutput};
use crowvox_playback::{PlayOutcome, PlaybackController, PlaybackEvent, SynthesisProfile};
use crowvox_tts::{SpeechSynthesizer, VoiceSettings};
use crowvox_tts_elevenlabs::ElevenLabsClient;
use tracing::info;

/// Options for assembling the runtime.
#[derive(Clone, Debug)]
pub struct RuntimeOptions {
    pub voice_id: String,
    pub settings: VoiceSettings,
    pub api_key: String,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            voice_id: VOICES[0].id.to_string(),
            settings: VoiceSettings::default(),
            api_key: String::new(),
        }
    }
}

/// Handle to the assembled controller.
pub struct AppRuntime {
    controller: PlaybackController,
}

impl AppRuntime {
    /// Assemble with the real synthesizer and audio device.
    pub fn start(options: RuntimeOptions) -> Result<Self> {
        let output = RodioOutput::new().context("opening audio output")?;
        info!(voice = %options.voice_id, "runtime starting");
        Ok(Self::with_parts(
            Arc::new(ElevenLabsClient::new()),
            Arc::new(output),
            options,
        ))
    }

    /// Assemble from injected seams. Tests use this with scripted
    /// doubles.
    pub fn with_parts(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        output: Arc<dyn AudioOutput>,
        options: RuntimeOptions,
    ) -> Self {
        let controller = PlaybackController::new(
            synthesizer,
            output,
            SynthesisProfile {
                voice_id: options.voice_id,
                settings: options.settings,
                api_key: options.api_key,
            },
        );
        Self { controller }
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn subscribe(&self) -> Receiver<PlaybackEvent> {
        self.controller.subscribe()
    }

    /// Play one catalogue item by id, resolving its synthesis text.
    pub async fn play_crow(&self, id: CrowId) -> Result<PlayOutcome> {
        let entry = crow(id).ok_or_else(|| anyhow!("no crow with index {id}"))?;
        self.controller
            .play(id, entry.tts_text)
            .await
            .with_context(|| format!("playing {}", entry.lang))
    }
}
