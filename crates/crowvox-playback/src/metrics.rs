//! Shared playback counters

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

/// Cross-thread counters for cache and playback activity.
#[derive(Clone, Default)]
pub struct PlaybackMetrics {
    pub cache_hits: Arc<AtomicU64>,
    pub cache_misses: Arc<AtomicU64>,
    pub synthesis_failures: Arc<AtomicU64>,
    /// Sessions cut short by a switch, toggle, or explicit stop
    pub playback_interrupts: Arc<AtomicU64>,
    /// Sessions that drained naturally
    pub playback_completions: Arc<AtomicU64>,
}
