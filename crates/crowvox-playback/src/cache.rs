//! Fingerprint-keyed cache of synthesized audio

use std::collections::HashMap;

use crowvox_tts::{AudioAsset, Fingerprint};
use tracing::debug;

/// Single source of truth for "have we already paid to synthesize this".
///
/// Keys are unique, insertion order is irrelevant, and there is no
/// implicit eviction: entries leave only through [`AudioCache::clear`].
/// The cache is the owner of record for every asset it holds; clearing
/// drops them, which releases each underlying buffer once the last
/// playback handle (if any) goes away.
#[derive(Default)]
pub struct AudioCache {
    entries: HashMap<Fingerprint, AudioAsset>,
}

impl AudioCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.entries.contains_key(fingerprint)
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&AudioAsset> {
        self.entries.get(fingerprint)
    }

    /// Store an asset. Overwrites silently; under correct fingerprinting
    /// a duplicate key never carries different audio.
    pub fn put(&mut self, fingerprint: Fingerprint, asset: AudioAsset) {
        self.entries.insert(fingerprint, asset);
    }

    /// Release every held asset and empty the mapping. Idempotent.
    pub fn clear(&mut self) {
        let released = self.entries.len();
        self.entries.clear();
        if released > 0 {
            debug!(released, "audio cache cleared");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crowvox_tts::VoiceSettings;

    fn fp(crow: usize) -> Fingerprint {
        Fingerprint::new(crow, "voice", &VoiceSettings::default())
    }

    #[test]
    fn put_get_contains() {
        let mut cache = AudioCache::new();
        assert!(!cache.contains(&fp(0)));

        cache.put(fp(0), AudioAsset::new(vec![1]));
        assert!(cache.contains(&fp(0)));
        assert_eq!(cache.get(&fp(0)).unwrap().as_ref(), &[1]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn put_overwrites_same_key() {
        let mut cache = AudioCache::new();
        cache.put(fp(0), AudioAsset::new(vec![1]));
        cache.put(fp(0), AudioAsset::new(vec![2]));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&fp(0)).unwrap().as_ref(), &[2]);
    }

    #[test]
    fn clear_releases_assets_and_is_idempotent() {
        let mut cache = AudioCache::new();
        let asset = AudioAsset::new(vec![1, 2, 3]);
        cache.put(fp(0), asset.clone());
        cache.put(fp(1), AudioAsset::new(vec![4]));
        assert_eq!(asset.handle_count(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(asset.handle_count(), 1);

        // safe on an already-empty cache
        cache.clear();
        assert!(cache.is_empty());
    }
}
