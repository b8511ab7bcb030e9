//! Text-to-speech abstraction layer for Crowvox
//!
//! This crate provides the foundational types for on-demand speech
//! synthesis: voice settings, the cache fingerprint, the owned audio
//! asset, error classification, and the synthesizer trait that
//! provider crates implement.

use async_trait::async_trait;

pub mod error;
pub mod types;

pub use error::{TtsError, TtsResult};
pub use types::{AudioAsset, Fingerprint, VoiceSettings};

/// Speech synthesis interface
///
/// One invocation maps to exactly one provider call. Implementations do
/// not retry; callers decide whether a failed request is worth retrying.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` with the given voice and settings, returning
    /// the audio bytes as an owned asset.
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        api_key: &str,
        settings: &VoiceSettings,
    ) -> TtsResult<AudioAsset>;
}

/// Normalize an API credential: trim whitespace and drop anything
/// outside printable ASCII (pasted keys often pick up zero-width or
/// control characters).
pub fn normalize_api_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| ('\u{20}'..='\u{7e}').contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}
