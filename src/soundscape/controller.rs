use std::collections::BTreeMap;

use tracing::debug;

use super::backend::PlaybackBackend;
use super::catalog::{SoundTrack, TrackId};

/// The set of currently looping tracks.
///
/// Each active id maps to exactly one owned handle, so a track is active
/// precisely while its handle is alive. Removing an entry drops (and thereby
/// stops) its handle; dropping the controller stops everything.
pub struct Soundscape<B: PlaybackBackend> {
    backend: B,
    active: BTreeMap<TrackId, B::Handle>,
}

impl<B: PlaybackBackend> Soundscape<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            active: BTreeMap::new(),
        }
    }

    /// Start `track` if it is silent, stop it if it is playing.
    ///
    /// Returns whether the track is active afterwards.
    pub fn toggle(&mut self, track: &SoundTrack) -> bool {
        if self.active.remove(&track.id).is_some() {
            debug!(track = track.name, "soundscape off");
            return false;
        }

        let handle = self.backend.acquire(track);
        self.active.insert(track.id, handle);
        debug!(track = track.name, "soundscape on");
        true
    }

    pub fn is_active(&self, id: TrackId) -> bool {
        self.active.contains_key(&id)
    }

    pub fn active_ids(&self) -> Vec<TrackId> {
        self.active.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Stop and release every playing track.
    pub fn stop_all(&mut self) {
        if !self.is_empty() {
            debug!(count = self.len(), "stopping all soundscapes");
        }
        self.active.clear();
    }
}
