/// Playlist domain type
use serde::{Deserialize, Serialize};

/// A playlist created on the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Catalog-side playlist identifier
    pub id: String,

    /// Shareable URL for the playlist
    pub url: String,
}

impl Playlist {
    /// Create a new playlist reference
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}
