//! Error types for the Spotify provider.

use setlist_core::SetlistError;
use thiserror::Error;

/// Errors that can occur when talking to the Spotify Web API.
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Spotify returned a non-success response
    #[error("spotify error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to decode a success response
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Client constructed without a bearer token
    #[error("access token is empty")]
    MissingToken,
}

/// Result type for Spotify provider operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;

// The engine sees every provider failure as one opaque catalog error.
impl From<SpotifyError> for SetlistError {
    fn from(err: SpotifyError) -> Self {
        SetlistError::Catalog(err.to_string())
    }
}
