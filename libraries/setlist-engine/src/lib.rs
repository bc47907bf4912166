//! Setlist Engine
//!
//! The concurrent resolution and collection core: fans a batch of
//! song queries out across a bounded worker pool, streams each
//! result back to the caller with its original index, and commits a
//! user-curated selection as a new catalog playlist.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use setlist_engine::{Manager, SelectionSet};
//! use tokio_util::sync::CancellationToken;
//!
//! let manager = Manager::new(catalog, 100);
//! let selection = Arc::new(SelectionSet::new(queries.len()));
//!
//! let recorder = Arc::clone(&selection);
//! manager
//!     .gather(&cancel, &queries, move |index, _query, matches| {
//!         if let Some(track) = matches.first() {
//!             let _ = recorder.add(index, track.clone());
//!         }
//!     })
//!     .await?;
//!
//! manager.push(&cancel, "My List", &selection.track_ids()).await?;
//! ```

#![forbid(unsafe_code)]

mod manager;
mod selection;

// Public exports
pub use manager::Manager;
pub use selection::SelectionSet;
