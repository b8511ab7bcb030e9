//! Error classification for synthesis and playback

use thiserror::Error;

/// TTS error kinds, classified so the UI layer can decide between a
/// per-item error badge and an environment-level notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TtsError {
    /// No API key configured; surfaced as a credential prompt, never as
    /// a per-item error
    #[error("no API key configured")]
    CredentialMissing,

    /// Key is empty after normalization or was rejected by the provider
    #[error("invalid API key")]
    InvalidCredential,

    /// Provider rate/usage limit hit
    #[error("quota exceeded, try again later")]
    QuotaExceeded,

    /// The request failed before any HTTP response existed; the runtime
    /// environment is vetoing outbound calls
    #[error("outbound request blocked before reaching the provider")]
    OutboundBlocked,

    /// Any other non-success provider response
    #[error("provider error {status}: {detail}")]
    Provider { status: u16, detail: String },

    /// Synthesized audio could not be decoded or played
    #[error("audio playback failed: {0}")]
    Playback(String),
}

impl TtsError {
    /// Errors that describe the environment rather than a single item.
    pub fn is_environment(&self) -> bool {
        matches!(
            self,
            TtsError::CredentialMissing | TtsError::OutboundBlocked
        )
    }
}

/// Result type for TTS operations
pub type TtsResult<T> = Result<T, TtsError>;
