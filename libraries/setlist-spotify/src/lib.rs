//! Setlist Spotify Provider
//!
//! Implements the [`setlist_core::Catalog`] contract over the Spotify
//! Web API: identity lookup, track search, playlist creation, and
//! track attachment.
//!
//! # Example
//!
//! ```ignore
//! use setlist_spotify::SpotifyClient;
//!
//! let client = SpotifyClient::new(token)?;
//! let matches = client.search("bohemian rhapsody").await?;
//! println!("{} candidates", matches.len());
//! ```

#![forbid(unsafe_code)]

mod client;
mod error;
mod types;

// Re-export main types
pub use client::SpotifyClient;
pub use error::{Result, SpotifyError};
