//! Built-in soundscape catalog.

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackId(pub u32);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundTrack {
    pub id: TrackId,
    pub name: &'static str,
    /// Either an `http(s)://` URL or a file path; see `SourceLocation`.
    pub source: &'static str,
}

static CATALOG: [SoundTrack; 4] = [
    SoundTrack {
        id: TrackId(1),
        name: "Rain",
        source: "https://assets.mixkit.co/sfx/preview/mixkit-rain-loop-1243.mp3",
    },
    SoundTrack {
        id: TrackId(2),
        name: "Forest",
        source: "https://assets.mixkit.co/sfx/preview/mixkit-forest-ambience-352.mp3",
    },
    SoundTrack {
        id: TrackId(3),
        name: "Cafe",
        source: "https://assets.mixkit.co/sfx/preview/mixkit-busy-cafe-ambience-445.mp3",
    },
    SoundTrack {
        id: TrackId(4),
        name: "Waves",
        source: "sounds/ocean-waves-250310.mp3",
    },
];

pub fn catalog() -> &'static [SoundTrack] {
    &CATALOG
}

/// Look up a catalog entry by id.
pub fn find(id: TrackId) -> Option<&'static SoundTrack> {
    CATALOG.iter().find(|t| t.id == id)
}
