/// Track domain type
use serde::{Deserialize, Serialize};

/// A catalog search candidate.
///
/// Produced by a catalog provider, never constructed by the engine
/// itself. `id` is the catalog's canonical identifier and is the only
/// field used for playlist attachment; `name` is for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Canonical catalog identifier (for Spotify, the track URI)
    pub id: String,

    /// Human-readable label
    pub name: String,
}

impl Track {
    /// Create a new track
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
