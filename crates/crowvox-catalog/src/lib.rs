//! Static reference data for Crowvox
//!
//! This crate holds the fixed catalogue of rooster-crow phrases, the
//! ElevenLabs voice roster, and the voice-setting presets. Everything
//! here is immutable; the playback core only ever reads it.

pub mod data;
pub mod types;

pub use data::{CROWS, PRESETS, VOICES};
pub use types::{Crow, CrowId, Preset, Region, Voice, VoiceGender};

/// Look up a catalogue entry by its stable index.
pub fn crow(id: CrowId) -> Option<&'static Crow> {
    CROWS.get(id)
}

/// Iterate catalogue entries for a region, paired with their ids.
pub fn crows_in_region(region: Region) -> impl Iterator<Item = (CrowId, &'static Crow)> {
    CROWS
        .iter()
        .enumerate()
        .filter(move |(_, c)| c.region == region)
}

/// Look up a voice by its provider id.
pub fn voice(voice_id: &str) -> Option<&'static Voice> {
    VOICES.iter().find(|v| v.id == voice_id)
}
