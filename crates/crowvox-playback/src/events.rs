//! Playback state-transition events

use crowvox_catalog::CrowId;

/// Closed set of events emitted by the controller, replacing ad-hoc
/// callbacks with a channel subscribers can drain.
///
/// Ordering guarantees for a single item: `LoadStarted` is always
/// followed by `LoadFinished`, then by either `Started` or `Failed`;
/// every `Started` is matched by exactly one `Finished`. A cache hit
/// emits no load events at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Synthesis request issued for this item
    LoadStarted { crow: CrowId },
    /// Synthesis request settled (either way)
    LoadFinished { crow: CrowId },
    /// Audio is sounding for this item
    Started { crow: CrowId },
    /// Audio stopped: natural end, toggle-off, interrupt, or stop()
    Finished { crow: CrowId },
    /// Synthesis or playback failed for this item
    Failed { crow: CrowId, message: String },
    /// No credential configured; prompt the user for one
    CredentialRequired,
    /// The environment is blocking outbound calls; emitted at most once
    /// so callers can show a single dismissible notice
    OutboundBlocked,
}
