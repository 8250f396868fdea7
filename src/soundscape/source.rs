//! Where a soundscape's audio comes from and how to read it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::SoundError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Remote(String),
    Local(PathBuf),
}

impl SourceLocation {
    pub fn parse(source: &str) -> Self {
        let s = source.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Remote(s.to_string())
        } else {
            Self::Local(PathBuf::from(s))
        }
    }

    /// Anchor relative local paths at `asset_dir`. Remote URLs and absolute
    /// paths are left as they are.
    pub fn resolve(self, asset_dir: Option<&Path>) -> Self {
        match (self, asset_dir) {
            (Self::Local(p), Some(dir)) if p.is_relative() => Self::Local(dir.join(p)),
            (other, _) => other,
        }
    }

    /// Read the whole source into memory.
    pub fn fetch_bytes(&self, timeout: Duration) -> Result<Vec<u8>, SoundError> {
        match self {
            Self::Local(path) => std::fs::read(path).map_err(|source| SoundError::Io {
                path: path.clone(),
                source,
            }),
            Self::Remote(url) => fetch_remote(url, timeout),
        }
    }
}

fn fetch_remote(url: &str, timeout: Duration) -> Result<Vec<u8>, SoundError> {
    let fetch_err = |source| SoundError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(fetch_err)?;

    let resp = client.get(url).send().map_err(fetch_err)?;
    if !resp.status().is_success() {
        return Err(SoundError::HttpStatus {
            url: url.to_string(),
            status: resp.status().as_u16(),
        });
    }

    let bytes = resp.bytes().map_err(fetch_err)?;
    Ok(bytes.to_vec())
}
