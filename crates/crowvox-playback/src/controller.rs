//! Single-slot playback controller
//!
//! At most one audio session sounds at any time. `play` on the item
//! that is already sounding is a toggle-off; `play` on anything else
//! interrupts whatever was active, then serves from the cache or
//! synthesizes on a miss. Every `play` call mints a generation token,
//! and asynchronous completions (synthesis responses, audio drain
//! notifications) must still hold the current token before they may
//! touch shared state.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use crowvox_catalog::CrowId;
use crowvox_tts::{AudioAsset, Fingerprint, SpeechSynthesizer, TtsError, TtsResult, VoiceSettings};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::cache::AudioCache;
use crate::events::PlaybackEvent;
use crate::metrics::PlaybackMetrics;
use crate::output::{AudioOutput, SessionHandle};

/// The synthesis configuration every fingerprint depends on.
#[derive(Debug, Clone)]
pub struct SynthesisProfile {
    pub voice_id: String,
    pub settings: VoiceSettings,
    pub api_key: String,
}

/// What a `play` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The item was already sounding; the call was a toggle-off.
    Stopped,
    /// A new session is sounding.
    Started { from_cache: bool },
    /// A newer call took the slot while this one was in flight; its
    /// result was discarded.
    Superseded,
}

struct ActiveSession {
    crow: CrowId,
    generation: u64,
    handle: Arc<dyn SessionHandle>,
}

struct ControllerState {
    profile: SynthesisProfile,
    cache: AudioCache,
    loading: HashSet<CrowId>,
    errors: HashMap<CrowId, String>,
    active: Option<ActiveSession>,
    /// Minted per play call; bumped by stop and cache clears as well so
    /// an in-flight synthesis can never start audio afterwards.
    generation: u64,
    outbound_notice_sent: bool,
}

struct Shared {
    state: Mutex<ControllerState>,
    event_tx: Sender<PlaybackEvent>,
    event_rx: Receiver<PlaybackEvent>,
    metrics: PlaybackMetrics,
}

impl Shared {
    fn emit(&self, event: PlaybackEvent) {
        let _ = self.event_tx.send(event);
    }

    /// Stop the active session (if any) and emit its terminal event.
    /// Callers must hold the state lock.
    fn stop_active(&self, state: &mut ControllerState) {
        if let Some(session) = state.active.take() {
            session.handle.stop();
            self.metrics.playback_interrupts.fetch_add(1, Ordering::Relaxed);
            self.emit(PlaybackEvent::Finished { crow: session.crow });
        }
    }

    /// Completion path for audio drain notifications. Discards the
    /// notification unless `token` still owns the active slot.
    fn finish_if_current(&self, crow: CrowId, token: u64) {
        let mut state = self.state.lock();
        let owns_slot = state
            .active
            .as_ref()
            .is_some_and(|session| session.generation == token);
        if !owns_slot {
            debug!(crow, "discarding stale playback completion");
            return;
        }
        state.active = None;
        self.metrics.playback_completions.fetch_add(1, Ordering::Relaxed);
        self.emit(PlaybackEvent::Finished { crow });
    }
}

enum Plan {
    Hit(AudioAsset),
    Miss {
        voice_id: String,
        api_key: String,
        settings: VoiceSettings,
    },
}

pub struct PlaybackController {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    output: Arc<dyn AudioOutput>,
    shared: Arc<Shared>,
}

impl PlaybackController {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        output: Arc<dyn AudioOutput>,
        profile: SynthesisProfile,
    ) -> Self {
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        Self {
            synthesizer,
            output,
            shared: Arc::new(Shared {
                state: Mutex::new(ControllerState {
                    profile,
                    cache: AudioCache::new(),
                    loading: HashSet::new(),
                    errors: HashMap::new(),
                    active: None,
                    generation: 0,
                    outbound_notice_sent: false,
                }),
                event_tx,
                event_rx,
                metrics: PlaybackMetrics::default(),
            }),
        }
    }

    /// Receive controller events. Events fire synchronously relative to
    /// the internal transitions, never batched.
    pub fn subscribe(&self) -> Receiver<PlaybackEvent> {
        self.shared.event_rx.clone()
    }

    pub fn metrics(&self) -> PlaybackMetrics {
        self.shared.metrics.clone()
    }

    /// Play one catalogue item, or toggle it off if it is already
    /// sounding. See the module docs for the full state machine.
    pub async fn play(&self, crow: CrowId, tts_text: &str) -> TtsResult<PlayOutcome> {
        let token;
        let fingerprint;
        let plan;
        {
            let mut state = self.shared.state.lock();

            if state.profile.api_key.is_empty() {
                self.shared.emit(PlaybackEvent::CredentialRequired);
                return Err(TtsError::CredentialMissing);
            }

            // Unconditionally silence whatever is sounding; if it was
            // this very item, the call is a pure stop.
            let toggled = state
                .active
                .as_ref()
                .is_some_and(|session| session.crow == crow);
            self.shared.stop_active(&mut state);
            if toggled {
                debug!(crow, "toggle-off");
                return Ok(PlayOutcome::Stopped);
            }

            state.generation += 1;
            token = state.generation;
            fingerprint = Fingerprint::new(crow, &state.profile.voice_id, &state.profile.settings);

            plan = match state.cache.get(&fingerprint) {
                Some(asset) => {
                    self.shared.metrics.cache_hits.fetch_add(1, Ordering::Relaxed);
                    Plan::Hit(asset.clone())
                }
                None => {
                    self.shared.metrics.cache_misses.fetch_add(1, Ordering::Relaxed);
                    debug!(key = %fingerprint, "cache miss, synthesizing");
                    state.loading.insert(crow);
                    state.errors.remove(&crow);
                    self.shared.emit(PlaybackEvent::LoadStarted { crow });
                    Plan::Miss {
                        voice_id: state.profile.voice_id.clone(),
                        api_key: state.profile.api_key.clone(),
                        settings: state.profile.settings.clone(),
                    }
                }
            };
        }

        let (asset, from_cache) = match plan {
            Plan::Hit(asset) => (asset, true),
            Plan::Miss {
                voice_id,
                api_key,
                settings,
            } => {
                let result = self
                    .synthesizer
                    .synthesize(tts_text, &voice_id, &api_key, &settings)
                    .await;

                let mut state = self.shared.state.lock();
                state.loading.remove(&crow);
                self.shared.emit(PlaybackEvent::LoadFinished { crow });

                let stale = state.generation != token;
                match result {
                    Ok(_) if stale => {
                        debug!(crow, "synthesis finished after takeover, discarding");
                        return Ok(PlayOutcome::Superseded);
                    }
                    Err(_) if stale => {
                        debug!(crow, "synthesis failed after takeover, discarding");
                        return Ok(PlayOutcome::Superseded);
                    }
                    Ok(asset) => {
                        state.cache.put(fingerprint.clone(), asset.clone());
                        (asset, false)
                    }
                    Err(err) => {
                        self.shared
                            .metrics
                            .synthesis_failures
                            .fetch_add(1, Ordering::Relaxed);
                        state.errors.insert(crow, err.to_string());
                        self.shared.emit(PlaybackEvent::Failed {
                            crow,
                            message: err.to_string(),
                        });
                        if err == TtsError::OutboundBlocked && !state.outbound_notice_sent {
                            state.outbound_notice_sent = true;
                            self.shared.emit(PlaybackEvent::OutboundBlocked);
                        }
                        warn!(crow, error = %err, "synthesis failed");
                        return Err(err);
                    }
                }
            }
        };

        // Start audio outside the lock: a scripted output is allowed to
        // complete synchronously.
        let handle = match self.output.start(&asset) {
            Ok(handle) => handle,
            Err(err) => {
                let mut state = self.shared.state.lock();
                if state.generation == token {
                    state.errors.insert(crow, err.to_string());
                    self.shared.emit(PlaybackEvent::Failed {
                        crow,
                        message: err.to_string(),
                    });
                }
                warn!(crow, error = %err, "audio output refused session");
                return Err(err);
            }
        };

        {
            let mut state = self.shared.state.lock();
            if state.generation != token {
                handle.stop();
                return Ok(PlayOutcome::Superseded);
            }
            state.active = Some(ActiveSession {
                crow,
                generation: token,
                handle: Arc::clone(&handle),
            });
            self.shared.emit(PlaybackEvent::Started { crow });
        }

        let shared = Arc::clone(&self.shared);
        handle.on_complete(Box::new(move || shared.finish_if_current(crow, token)));

        debug!(crow, from_cache, "playback started");
        Ok(PlayOutcome::Started { from_cache })
    }

    /// Halt any active session. Idempotent when nothing is playing.
    pub fn stop(&self) {
        let mut state = self.shared.state.lock();
        state.generation += 1;
        self.shared.stop_active(&mut state);
    }

    /// Release every cached asset and stop playback; an asset must not
    /// keep sounding past the clear that released it.
    pub fn clear_cache(&self) {
        let mut state = self.shared.state.lock();
        state.generation += 1;
        self.shared.stop_active(&mut state);
        state.cache.clear();
    }

    /// Switch voices. Invalidates the cache before the new voice takes
    /// effect, since every fingerprint depends on it.
    pub fn set_voice(&self, voice_id: impl Into<String>) {
        let mut state = self.shared.state.lock();
        state.generation += 1;
        self.shared.stop_active(&mut state);
        state.cache.clear();
        state.profile.voice_id = voice_id.into();
        info!(voice = %state.profile.voice_id, "voice changed, cache invalidated");
    }

    /// Replace the synthesis parameters. Invalidates the cache first.
    pub fn set_settings(&self, settings: VoiceSettings) {
        let mut state = self.shared.state.lock();
        state.generation += 1;
        self.shared.stop_active(&mut state);
        state.cache.clear();
        state.profile.settings = settings;
        info!("voice settings changed, cache invalidated");
    }

    /// Update the credential. Fingerprints do not depend on it, so the
    /// cache survives.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.shared.state.lock().profile.api_key = api_key.into();
    }

    pub fn has_api_key(&self) -> bool {
        !self.shared.state.lock().profile.api_key.is_empty()
    }

    pub fn voice_id(&self) -> String {
        self.shared.state.lock().profile.voice_id.clone()
    }

    pub fn settings(&self) -> VoiceSettings {
        self.shared.state.lock().profile.settings.clone()
    }

    /// Is this item's current-profile fingerprint already cached?
    pub fn is_cached(&self, crow: CrowId) -> bool {
        let state = self.shared.state.lock();
        let fingerprint = Fingerprint::new(crow, &state.profile.voice_id, &state.profile.settings);
        state.cache.contains(&fingerprint)
    }

    /// Number of items cached under the current profile. Parameter
    /// changes clear the cache, so every entry matches the profile.
    pub fn cached_count(&self) -> usize {
        self.shared.state.lock().cache.len()
    }

    pub fn is_loading(&self, crow: CrowId) -> bool {
        self.shared.state.lock().loading.contains(&crow)
    }

    pub fn error(&self, crow: CrowId) -> Option<String> {
        self.shared.state.lock().errors.get(&crow).cloned()
    }

    /// The item currently sounding, if any.
    pub fn playing(&self) -> Option<CrowId> {
        self.shared
            .state
            .lock()
            .active
            .as_ref()
            .map(|session| session.crow)
    }
}
