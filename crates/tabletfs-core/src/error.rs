//! Error types for the library.
//!
//! Errors are split by domain:
//!
//! - [`FetchError`] - a single listing request failed (transport, status, body)
//! - [`NavError`] - a cursor move was rejected or its listing request failed

/// Boxed transport cause, kept opaque so mock and HTTP transports share it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from requesting and decoding one listing.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Network unreachable, connection refused, timeout.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },
    /// Server answered with a non-2xx status.
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    /// Body is not a JSON array of entry descriptors.
    #[error("malformed listing: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// Build a transport error from any error cause.
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// Errors from navigator moves.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// The listing request behind a move failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// `move_folder` was given an unset folder.
    #[error("invalid target: folder has no id")]
    InvalidTarget,
    /// `move_parent` was called at root.
    #[error("no parent folder: already at root")]
    NoParent,
    /// The parent of the current folder was never cached.
    #[error("parent folder {parent_id} is not in the folder cache")]
    CacheMiss { parent_id: String },
}
