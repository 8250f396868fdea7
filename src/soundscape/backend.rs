use super::catalog::SoundTrack;

/// Something that can start looping playback of a catalog track.
pub trait PlaybackBackend {
    /// A live playback instance. Dropping it must stop playback and release
    /// whatever the backend allocated for it.
    type Handle;

    /// Begin looping `track` at full volume right away.
    ///
    /// Failures are the backend's to report; the caller always gets a handle
    /// back, which may be silent.
    fn acquire(&self, track: &SoundTrack) -> Self::Handle;
}
