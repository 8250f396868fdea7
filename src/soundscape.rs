//! Looping ambient soundscapes.
//!
//! The controller in `controller` tracks which catalog entries are playing and
//! owns one playback handle per active entry. Handles come from a
//! `PlaybackBackend`; the real one is backed by `rodio`.

mod backend;
mod catalog;
mod controller;
mod rodio_backend;
mod source;

pub use backend::PlaybackBackend;
pub use catalog::*;
pub use controller::Soundscape;
pub use rodio_backend::RodioBackend;
