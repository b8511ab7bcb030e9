//! Audio output seam
//!
//! The controller only knows how to start a session from an asset,
//! stop it, and hear about completion. The real implementation drives
//! rodio from a dedicated thread (the output stream is not `Send`, so
//! it has to live somewhere fixed); tests substitute
//! [`crate::testing::ManualOutput`].

use std::io::Cursor;
use std::sync::Arc;

use crossbeam_channel::{bounded, unbounded, Sender};
use crowvox_tts::{AudioAsset, TtsError, TtsResult};
use rodio::{Decoder, OutputStream, Sink};
use tracing::{debug, warn};

/// Callback fired once when a session leaves the sounding state.
pub type CompletionFn = Box<dyn FnOnce() + Send + 'static>;

/// A single playback session bound to one asset.
pub trait SessionHandle: Send + Sync {
    /// Halt immediately and discard the queued audio.
    fn stop(&self);

    /// Register a callback fired when the session drains naturally or
    /// is stopped. The caller guards against stale completions, so
    /// firing after `stop()` is fine.
    fn on_complete(&self, done: CompletionFn);
}

/// Creates playback sessions from assets.
pub trait AudioOutput: Send + Sync {
    fn start(&self, asset: &AudioAsset) -> TtsResult<Arc<dyn SessionHandle>>;
}

enum OutputCommand {
    Start {
        asset: AudioAsset,
        reply: Sender<TtsResult<Arc<Sink>>>,
    },
}

/// Real audio output: decodes an asset and plays it on the default
/// device. The rodio output stream is owned by a long-lived audio
/// thread; sinks cross back over a channel (`Sink` is `Send`).
pub struct RodioOutput {
    command_tx: Sender<OutputCommand>,
}

impl RodioOutput {
    pub fn new() -> TtsResult<Self> {
        let (command_tx, command_rx) = unbounded::<OutputCommand>();
        let (ready_tx, ready_rx) = bounded::<TtsResult<()>>(1);

        std::thread::Builder::new()
            .name("crowvox-audio".to_string())
            .spawn(move || {
                let (_stream, handle) = match OutputStream::try_default() {
                    Ok(pair) => {
                        let _ = ready_tx.send(Ok(()));
                        pair
                    }
                    Err(e) => {
                        warn!(error = %e, "no audio output device");
                        let _ = ready_tx.send(Err(TtsError::Playback(e.to_string())));
                        return;
                    }
                };

                while let Ok(command) = command_rx.recv() {
                    match command {
                        OutputCommand::Start { asset, reply } => {
                            let result = Sink::try_new(&handle)
                                .map_err(|e| TtsError::Playback(e.to_string()))
                                .and_then(|sink| {
                                    let source = Decoder::new(Cursor::new(asset))
                                        .map_err(|e| TtsError::Playback(e.to_string()))?;
                                    sink.append(source);
                                    Ok(Arc::new(sink))
                                });
                            let _ = reply.send(result);
                        }
                    }
                }
                debug!("audio thread exiting");
            })
            .map_err(|e| TtsError::Playback(format!("failed to spawn audio thread: {e}")))?;

        ready_rx
            .recv()
            .map_err(|_| TtsError::Playback("audio thread died during startup".to_string()))??;

        Ok(Self { command_tx })
    }
}

impl AudioOutput for RodioOutput {
    fn start(&self, asset: &AudioAsset) -> TtsResult<Arc<dyn SessionHandle>> {
        let (reply_tx, reply_rx) = bounded(1);
        self.command_tx
            .send(OutputCommand::Start {
                asset: asset.clone(),
                reply: reply_tx,
            })
            .map_err(|_| TtsError::Playback("audio thread terminated".to_string()))?;
        let sink = reply_rx
            .recv()
            .map_err(|_| TtsError::Playback("audio thread terminated".to_string()))??;
        Ok(Arc::new(RodioSession { sink }))
    }
}

struct RodioSession {
    sink: Arc<Sink>,
}

impl SessionHandle for RodioSession {
    fn stop(&self) {
        self.sink.stop();
    }

    fn on_complete(&self, done: CompletionFn) {
        let sink = Arc::clone(&self.sink);
        // sleep_until_end returns when the queue drains or stop()
        // clears it, so the callback fires in both cases.
        std::thread::spawn(move || {
            sink.sleep_until_end();
            done();
        });
    }
}
