//! Crowvox application crate
//!
//! Wires the catalogue, the ElevenLabs synthesizer, and the playback
//! controller into a runnable CLI, plus the persistent preference
//! store (API key and favorites).

pub mod prefs;
pub mod runtime;

pub use prefs::{Prefs, PrefsStore};
pub use runtime::{AppRuntime, RuntimeOptions};
