//! Test doubles for the synthesis and audio seams
//!
//! `ScriptedSynthesizer` replays a queue of canned results, optionally
//! gating each one on a [`tokio::sync::Notify`] so tests can hold a
//! request in flight while they race another call against it.
//! `ManualOutput` records sessions and lets the test decide when each
//! one "finishes".

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use crowvox_tts::{AudioAsset, SpeechSynthesizer, TtsError, TtsResult, VoiceSettings};
use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::output::{AudioOutput, CompletionFn, SessionHandle};

struct Step {
    result: TtsResult<AudioAsset>,
    gate: Option<Arc<Notify>>,
}

/// Replays scripted synthesis results in order. Panics if called more
/// times than it was scripted for.
#[derive(Default)]
pub struct ScriptedSynthesizer {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl ScriptedSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, data: Vec<u8>) {
        self.steps.lock().push_back(Step {
            result: Ok(AudioAsset::new(data)),
            gate: None,
        });
    }

    pub fn push_err(&self, err: TtsError) {
        self.steps.lock().push_back(Step {
            result: Err(err),
            gate: None,
        });
    }

    /// Script a success that does not resolve until the returned gate
    /// is notified.
    pub fn push_gated_ok(&self, data: Vec<u8>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.steps.lock().push_back(Step {
            result: Ok(AudioAsset::new(data)),
            gate: Some(Arc::clone(&gate)),
        });
        gate
    }

    /// Number of synthesize calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechSynthesizer for ScriptedSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        _voice_id: &str,
        _api_key: &str,
        _settings: &VoiceSettings,
    ) -> TtsResult<AudioAsset> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self
            .steps
            .lock()
            .pop_front()
            .expect("synthesize called with no scripted step left");
        if let Some(gate) = step.gate {
            gate.notified().await;
        }
        step.result
    }
}

/// A session under manual control. The test drives completion through
/// [`ManualSession::complete`].
pub struct ManualSession {
    stopped: AtomicBool,
    completion: Mutex<Option<CompletionFn>>,
}

impl ManualSession {
    fn new() -> Self {
        Self {
            stopped: AtomicBool::new(false),
            completion: Mutex::new(None),
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Fire the registered completion callback, as the audio device
    /// would at end of stream. No-op if nothing registered yet.
    pub fn complete(&self) {
        if let Some(done) = self.completion.lock().take() {
            done();
        }
    }
}

impl SessionHandle for ManualSession {
    fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    fn on_complete(&self, done: CompletionFn) {
        *self.completion.lock() = Some(done);
    }
}

/// Audio output that records every started session instead of playing
/// anything.
#[derive(Default)]
pub struct ManualOutput {
    sessions: Mutex<Vec<Arc<ManualSession>>>,
    fail_next: AtomicBool,
}

impl ManualOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `start` call fail with a playback error.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().len()
    }

    /// The nth session started, panicking when out of range.
    pub fn session(&self, index: usize) -> Arc<ManualSession> {
        Arc::clone(&self.sessions.lock()[index])
    }

    pub fn last_session(&self) -> Arc<ManualSession> {
        Arc::clone(self.sessions.lock().last().expect("no session started"))
    }
}

impl AudioOutput for ManualOutput {
    fn start(&self, _asset: &AudioAsset) -> TtsResult<Arc<dyn SessionHandle>> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(TtsError::Playback("scripted output failure".to_string()));
        }
        let session = Arc::new(ManualSession::new());
        self.sessions.lock().push(Arc::clone(&session));
        Ok(session)
    }
}
