//! Types for Spotify Web API requests and responses.

use serde::{Deserialize, Serialize};
use setlist_core::Track;

// =============================================================================
// Identity
// =============================================================================

/// Response from `GET /v1/me`.
#[derive(Debug, Deserialize)]
pub(crate) struct UserResponse {
    pub id: String,
}

// =============================================================================
// Search
// =============================================================================

/// Response from `GET /v1/search?type=track`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub tracks: SearchTracks,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchTracks {
    pub items: Vec<SearchItem>,
}

/// One ranked candidate from the search response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SearchArtist>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchArtist {
    pub name: String,
}

impl SearchItem {
    /// The track URI is the identifier playlist attachment expects;
    /// the display name folds the artists in for disambiguation.
    pub(crate) fn into_track(self) -> Track {
        let name = if self.artists.is_empty() {
            self.name
        } else {
            let artists: Vec<String> = self.artists.into_iter().map(|a| a.name).collect();
            format!("{} - {}", artists.join(", "), self.name)
        };

        Track::new(self.uri, name)
    }
}

// =============================================================================
// Playlists
// =============================================================================

/// Request body for `POST /v1/users/{user_id}/playlists`.
#[derive(Debug, Serialize)]
pub(crate) struct CreatePlaylistRequest {
    pub name: String,
    /// Playlists are always created private.
    pub public: bool,
}

/// Response from playlist creation.
#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistResponse {
    pub id: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExternalUrls {
    pub spotify: String,
}

/// Request body for `POST /v1/playlists/{playlist_id}/tracks`.
#[derive(Debug, Serialize)]
pub(crate) struct AddTracksRequest {
    pub uris: Vec<String>,
}

// =============================================================================
// Errors
// =============================================================================

/// Spotify's error envelope, returned on non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
