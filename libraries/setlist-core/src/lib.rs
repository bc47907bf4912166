//! Setlist Core
//!
//! Domain types, the catalog trait, and error handling shared by the
//! resolution engine and the catalog providers.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`
//! - **Catalog Trait**: the four-operation backend contract (identity,
//!   search, playlist creation, track attachment)
//! - **Error Handling**: Unified `SetlistError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use setlist_core::types::Track;
//!
//! let track = Track::new("spotify:track:4uLU6hMCjMI75M1A2tKUQC", "Rick Astley - Never Gonna Give You Up");
//! assert_eq!(track.name, "Rick Astley - Never Gonna Give You Up");
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{Result, SetlistError};
pub use types::{Playlist, Track};
