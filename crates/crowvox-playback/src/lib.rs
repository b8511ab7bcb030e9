//! Synthesis-and-playback cache orchestration for Crowvox
//!
//! This crate is the stateful core of the app: an in-memory cache of
//! synthesized audio keyed by fingerprint, a single-slot playback
//! controller with toggle-to-stop and interrupt-on-switch semantics,
//! and the audio output seam (implemented for real with rodio, and
//! with scripted doubles for tests).

pub mod cache;
pub mod controller;
pub mod events;
pub mod metrics;
pub mod output;
pub mod testing;

pub use cache::AudioCache;
pub use controller::{PlayOutcome, PlaybackController, SynthesisProfile};
pub use events::PlaybackEvent;
pub use metrics::PlaybackMetrics;
pub use output::{AudioOutput, CompletionFn, RodioOutput, SessionHandle};
