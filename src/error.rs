//! Error types for loading and playing soundscapes.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoundError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("failed to decode audio: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("no audio output: {0}")]
    Output(#[from] rodio::StreamError),
}
