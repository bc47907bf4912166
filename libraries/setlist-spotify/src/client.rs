//! Spotify Web API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use setlist_core::{Catalog, Playlist, Track};
use tracing::{debug, info};

use crate::error::{Result, SpotifyError};
use crate::types::{
    AddTracksRequest, ApiErrorResponse, CreatePlaylistRequest, PlaylistResponse, SearchResponse,
    UserResponse,
};

const SPOTIFY_API_URL: &str = "https://api.spotify.com";

/// Client for the Spotify Web API.
///
/// Authenticates every request with the bearer token supplied at
/// construction. Implements [`Catalog`], so a `SpotifyClient` plugs
/// directly into the resolution engine.
pub struct SpotifyClient {
    http: Client,
    base_url: String,
    token: String,
}

impl SpotifyClient {
    /// Create a new client with the given bearer token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SpotifyError::MissingToken);
        }

        // HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Setlist/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: SPOTIFY_API_URL.to_string(),
            token,
        })
    }

    /// Point the client at a different API root (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Identifier of the user the token belongs to.
    pub async fn current_user(&self) -> Result<String> {
        let url = format!("{}/v1/me", self.base_url);
        debug!(url = %url, "fetching current user");

        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;
        let response = expect_status(response, StatusCode::OK).await?;

        let user: UserResponse = response
            .json()
            .await
            .map_err(|e| SpotifyError::Parse(format!("user response: {e}")))?;

        Ok(user.id)
    }

    /// Ranked candidate tracks for a free-text query.
    ///
    /// Zero items is a normal outcome and yields an empty list.
    pub async fn search(&self, query: &str) -> Result<Vec<Track>> {
        let url = format!("{}/v1/search", self.base_url);
        debug!(query = %query, "searching tracks");

        let response = self
            .http
            .get(&url)
            .query(&[("type", "track"), ("q", query)])
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = expect_status(response, StatusCode::OK).await?;

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| SpotifyError::Parse(format!("search response: {e}")))?;

        let tracks: Vec<Track> = search
            .tracks
            .items
            .into_iter()
            .map(crate::types::SearchItem::into_track)
            .collect();

        debug!(query = %query, matches = tracks.len(), "search complete");
        Ok(tracks)
    }

    /// Create a private playlist owned by the given user.
    pub async fn create_playlist(&self, user_id: &str, name: &str) -> Result<Playlist> {
        let url = format!("{}/v1/users/{}/playlists", self.base_url, user_id);
        debug!(user_id = %user_id, name = %name, "creating playlist");

        let request = CreatePlaylistRequest {
            name: name.to_string(),
            public: false,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;
        let response = expect_status(response, StatusCode::CREATED).await?;

        let playlist: PlaylistResponse = response
            .json()
            .await
            .map_err(|e| SpotifyError::Parse(format!("playlist response: {e}")))?;

        info!(playlist_id = %playlist.id, name = %name, "playlist created");
        Ok(Playlist::new(playlist.id, playlist.external_urls.spotify))
    }

    /// Attach tracks to a playlist, in the order given.
    pub async fn add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        let url = format!("{}/v1/playlists/{}/tracks", self.base_url, playlist_id);
        debug!(playlist_id = %playlist_id, tracks = track_ids.len(), "attaching tracks");

        let request = AddTracksRequest {
            uris: track_ids.to_vec(),
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;
        expect_status(response, StatusCode::CREATED).await?;

        Ok(())
    }
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn me(&self) -> setlist_core::Result<String> {
        Ok(self.current_user().await?)
    }

    async fn search_track(&self, query: &str) -> setlist_core::Result<Vec<Track>> {
        Ok(self.search(query).await?)
    }

    async fn create_playlist(&self, user_id: &str, name: &str) -> setlist_core::Result<Playlist> {
        Ok(SpotifyClient::create_playlist(self, user_id, name).await?)
    }

    async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> setlist_core::Result<()> {
        Ok(self.add_tracks(playlist_id, track_ids).await?)
    }
}

/// Accept exactly the status the endpoint documents; anything else is
/// an API error, with Spotify's error envelope extracted when the
/// body carries one.
async fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorResponse>(&body)
        .map(|envelope| envelope.error.message)
        .unwrap_or(body);

    Err(SpotifyError::Api {
        status: status.as_u16(),
        message,
    })
}
