//! Core types for the crow catalogue

use serde::{Deserialize, Serialize};

/// Stable index of a catalogue entry.
pub type CrowId = usize;

/// Broad geographic grouping used for browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Europe,
    Americas,
    Asia,
    MiddleEast,
    Africa,
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Region::Europe => "Europe",
            Region::Americas => "Americas",
            Region::Asia => "Asia",
            Region::MiddleEast => "Middle East",
            Region::Africa => "Africa",
        };
        f.write_str(name)
    }
}

/// One catalogue entry: how a rooster crows in a given language.
#[derive(Debug, Clone, Serialize)]
pub struct Crow {
    /// Language name as shown to the user
    pub lang: &'static str,
    /// Flag emoji
    pub flag: &'static str,
    /// ISO 3166-1 alpha-2 code, where one country is representative
    pub country_code: Option<&'static str>,
    /// The crow phrase in its native spelling
    pub text: &'static str,
    /// IPA transcription
    pub ipa: &'static str,
    pub region: Region,
    /// Text actually sent to the synthesis provider (usually the phrase
    /// repeated, which reads better than a single bare interjection)
    pub tts_text: &'static str,
}

/// Voice gender as reported by the provider roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceGender {
    Male,
    Female,
}

/// An ElevenLabs voice available for synthesis.
#[derive(Debug, Clone, Serialize)]
pub struct Voice {
    /// Provider voice id
    pub id: &'static str,
    pub name: &'static str,
    /// One-word character tag
    pub tag: &'static str,
    pub gender: VoiceGender,
}

/// A named bundle of voice-setting values.
#[derive(Debug, Clone, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub icon: &'static str,
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
}
