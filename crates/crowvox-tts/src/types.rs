//! Core types for speech synthesis and caching

use std::sync::Arc;

use crowvox_catalog::CrowId;
use serde::{Deserialize, Serialize};

/// Synthesis parameters sent verbatim to the provider.
///
/// Any field change produces a logically distinct configuration; the
/// playback layer clears its cache whenever one changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// 0.0 = maximally varied delivery, 1.0 = maximally consistent
    pub stability: f32,
    /// How closely the output tracks the original voice (0.0-1.0)
    pub similarity_boost: f32,
    /// Style exaggeration (0.0-1.0)
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.30,
            similarity_boost: 0.75,
            style: 1.0,
            use_speaker_boost: true,
        }
    }
}

/// Cache key for one synthesized phrase.
///
/// Derived from the item, the voice, and the two settings fields that
/// audibly dominate the output. `similarity_boost` and
/// `use_speaker_boost` are intentionally not part of the key; settings
/// changes clear the whole cache anyway, so a stale entry cannot be
/// reached through the public API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    crow: CrowId,
    voice_id: String,
    stability_bits: u32,
    style_bits: u32,
}

impl Fingerprint {
    pub fn new(crow: CrowId, voice_id: &str, settings: &VoiceSettings) -> Self {
        Self {
            crow,
            voice_id: voice_id.to_string(),
            stability_bits: settings.stability.to_bits(),
            style_bits: settings.style.to_bits(),
        }
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}",
            self.crow,
            self.voice_id,
            f32::from_bits(self.stability_bits),
            f32::from_bits(self.style_bits)
        )
    }
}

/// An owned, playable audio resource produced by synthesis.
///
/// The bytes are refcounted so a playing session can hold a handle
/// while the cache remains the owner of record. Dropping the last
/// handle releases the buffer; there is no separate revocation step.
#[derive(Debug, Clone)]
pub struct AudioAsset {
    data: Arc<Vec<u8>>,
}

impl AudioAsset {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of live handles to this buffer, for release accounting.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }
}

impl AsRef<[u8]> for AudioAsset {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
