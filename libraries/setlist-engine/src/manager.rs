//! Bounded concurrent resolution and playlist commit

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use setlist_core::{Catalog, Result, SetlistError, Track};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Orchestrates concurrent resolution of a query batch against a
/// catalog backend and commits a curated selection as a playlist.
///
/// Holds no mutable state beyond the admission semaphore and the
/// backend handle; a single `Manager` is safe to share across tasks.
pub struct Manager<C> {
    catalog: Arc<C>,
    permits: Arc<Semaphore>,
}

impl<C: Catalog + 'static> Manager<C> {
    /// Create a manager over the given backend.
    ///
    /// `concurrency` caps the number of in-flight catalog lookups
    /// during [`gather`](Self::gather). A limit of zero would never
    /// admit work, so it is raised to one.
    pub fn new(catalog: C, concurrency: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            permits: Arc::new(Semaphore::new(concurrency.max(1))),
        }
    }

    /// Resolve every query in the batch, delivering each result to
    /// `on_result` exactly once as `(index, query, matches)`.
    ///
    /// Lookups run concurrently under the configured cap; excess work
    /// waits for a free permit. The callback runs on worker tasks and
    /// must be safe under concurrent invocation. No ordering is
    /// guaranteed across indices, but every invocation carries that
    /// index's own query and matches. Zero matches is a success and
    /// arrives as an empty list.
    ///
    /// The batch fails fast: the first lookup error stops admission,
    /// skips the callback for the failed index, lets already-admitted
    /// lookups drain, and becomes the returned error. Cancelling
    /// `cancel` halts admission, abandons in-flight lookups, and
    /// yields `SetlistError::Cancelled`.
    pub async fn gather<F>(
        &self,
        cancel: &CancellationToken,
        queries: &[String],
        on_result: F,
    ) -> Result<()>
    where
        F: Fn(usize, &str, Vec<Track>) + Send + Sync + 'static,
    {
        debug!(queries = queries.len(), "starting gather");

        let on_result = Arc::new(on_result);
        let failure: Arc<Mutex<Option<SetlistError>>> = Arc::new(Mutex::new(None));
        let mut workers = JoinSet::new();

        for (index, query) in queries.iter().cloned().enumerate() {
            if lock(&failure).is_some() {
                break;
            }

            let permit = tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    record_first(&failure, SetlistError::Cancelled);
                    break;
                }
                permit = Arc::clone(&self.permits).acquire_owned() => match permit {
                    Ok(permit) => permit,
                    // the semaphore is never closed
                    Err(_) => break,
                },
            };

            // a sibling may have failed while this slot was awaited
            if lock(&failure).is_some() {
                break;
            }

            let catalog = Arc::clone(&self.catalog);
            let cancel = cancel.clone();
            let on_result = Arc::clone(&on_result);
            let failure = Arc::clone(&failure);

            workers.spawn(async move {
                // held until the lookup and callback finish
                let _permit = permit;

                let outcome = tokio::select! {
                    () = cancel.cancelled() => Err(SetlistError::Cancelled),
                    result = catalog.search_track(&query) => result,
                };

                match outcome {
                    Ok(matches) => {
                        debug!(index, query = %query, matches = matches.len(), "query resolved");
                        on_result(index, &query, matches);
                    }
                    Err(err) => {
                        warn!(index, query = %query, error = %err, "lookup failed");
                        record_first(&failure, err);
                    }
                }
            });
        }

        // let already-admitted lookups drain
        while workers.join_next().await.is_some() {}

        let outcome = lock(&failure).take();
        match outcome {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Create a playlist named `name` and attach `track_ids` to it,
    /// in the order supplied.
    ///
    /// Strictly sequential: identity lookup, then playlist creation,
    /// then attachment. The first failing step aborts the rest and
    /// its error is returned as-is. There is no compensating cleanup:
    /// a creation that succeeds before a failed attachment leaves an
    /// empty playlist behind on the catalog.
    ///
    /// A blank name or an empty selection is rejected before any
    /// network call.
    pub async fn push(
        &self,
        cancel: &CancellationToken,
        name: &str,
        track_ids: &[String],
    ) -> Result<()> {
        if name.trim().is_empty() {
            return Err(SetlistError::EmptyName);
        }
        if track_ids.is_empty() {
            return Err(SetlistError::EmptySelection);
        }

        let commit = async {
            let user_id = self.catalog.me().await?;
            debug!(user_id = %user_id, "resolved catalog identity");

            let playlist = self.catalog.create_playlist(&user_id, name).await?;
            info!(playlist_id = %playlist.id, url = %playlist.url, name = %name, "playlist created");

            self.catalog
                .add_tracks_to_playlist(&playlist.id, track_ids)
                .await?;
            info!(playlist_id = %playlist.id, tracks = track_ids.len(), "tracks attached");

            Ok(())
        };

        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(SetlistError::Cancelled),
            result = commit => result,
        }
    }
}

// A poisoned guard still holds valid state; take it either way.
fn lock<T>(slot: &Mutex<T>) -> MutexGuard<'_, T> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn record_first(slot: &Mutex<Option<SetlistError>>, err: SetlistError) {
    let mut guard = lock(slot);
    if guard.is_none() {
        *guard = Some(err);
    }
}
