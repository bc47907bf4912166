//! Catalog trait abstracting the external music provider

use crate::error::Result;
use crate::types::{Playlist, Track};
use async_trait::async_trait;

/// Backend contract exposed by any music catalog provider.
///
/// The engine is agnostic to transport and authentication; it only
/// requires these four network-bound operations. Each call is
/// at-most-once from the engine's perspective: failures surface as a
/// single error and are never retried here.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Identity of the authenticated user.
    ///
    /// Used only to scope playlist creation; never called during
    /// search.
    async fn me(&self) -> Result<String>;

    /// Candidate matches for a free-text query, best match first.
    ///
    /// Zero matches is a normal outcome signaled by an empty list,
    /// not an error.
    async fn search_track(&self, query: &str) -> Result<Vec<Track>>;

    /// Create a playlist owned by the given user.
    async fn create_playlist(&self, user_id: &str, name: &str) -> Result<Playlist>;

    /// Attach tracks to a playlist, in the order given.
    async fn add_tracks_to_playlist(&self, playlist_id: &str, track_ids: &[String]) -> Result<()>;
}
