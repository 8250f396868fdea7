//! `rodio`-backed playback: one shared output stream, one `Sink` per track.
//!
//! Sources are fetched and decoded on a short-lived loader thread so a slow
//! download never stalls the UI. The loader only holds a `Weak` reference to
//! the sink: if the handle is released first, the decoded source is dropped
//! instead of being appended.

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::{Arc, Weak};
use std::thread;
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::warn;

use crate::config::AudioSettings;
use crate::error::SoundError;

use super::backend::PlaybackBackend;
use super::catalog::SoundTrack;
use super::source::SourceLocation;

pub struct RodioBackend {
    // Dropping the stream silences every sink, so it lives as long as the backend.
    stream: Option<OutputStream>,
    asset_dir: Option<PathBuf>,
    fetch_timeout: Duration,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn open(settings: &AudioSettings) -> Result<Self, SoundError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when the stream is dropped; that would land on
        // top of the TUI.
        stream.log_on_drop(false);
        Ok(Self::with_stream(Some(stream), settings))
    }

    /// A backend with no output device. Every handle it hands out is silent.
    pub fn silent(settings: &AudioSettings) -> Self {
        Self::with_stream(None, settings)
    }

    fn with_stream(stream: Option<OutputStream>, settings: &AudioSettings) -> Self {
        Self {
            stream,
            asset_dir: settings.asset_dir.clone(),
            fetch_timeout: Duration::from_secs(settings.fetch_timeout_secs),
        }
    }

    pub fn has_output(&self) -> bool {
        self.stream.is_some()
    }

    fn mixer(&self) -> Option<&Mixer> {
        self.stream.as_ref().map(|s| s.mixer())
    }
}

/// A looping track. Stops when dropped.
pub struct RodioHandle {
    sink: Option<Arc<Sink>>,
}

impl Drop for RodioHandle {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

impl PlaybackBackend for RodioBackend {
    type Handle = RodioHandle;

    fn acquire(&self, track: &SoundTrack) -> RodioHandle {
        let Some(mixer) = self.mixer() else {
            warn!(track = track.name, "no audio output; soundscape stays silent");
            return RodioHandle { sink: None };
        };

        let sink = Arc::new(Sink::connect_new(mixer));
        sink.set_volume(1.0);
        sink.play();

        let location = SourceLocation::parse(track.source).resolve(self.asset_dir.as_deref());
        spawn_loader(
            track.name,
            location,
            self.fetch_timeout,
            Arc::downgrade(&sink),
        );

        RodioHandle { sink: Some(sink) }
    }
}

fn spawn_loader(name: &'static str, location: SourceLocation, timeout: Duration, sink: Weak<Sink>) {
    thread::spawn(move || {
        let decoded = location.fetch_bytes(timeout).and_then(decode);

        match decoded {
            Ok(source) => {
                if let Some(sink) = sink.upgrade() {
                    sink.append(source.repeat_infinite());
                }
            }
            Err(e) => warn!(track = name, source = ?location, error = %e, "soundscape failed to load"),
        }
    });
}

pub(super) fn decode(bytes: Vec<u8>) -> Result<Decoder<Cursor<Vec<u8>>>, SoundError> {
    Ok(Decoder::new(Cursor::new(bytes))?)
}
