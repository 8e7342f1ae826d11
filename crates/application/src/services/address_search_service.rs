//! Address search service
//!
//! Owns the request lifecycle for keystroke-driven address search: each
//! input change supersedes the previous query, the geocoder is called
//! off the caller's thread, and only the most recent query's response
//! may update the published state. Superseded responses are dropped
//! silently on arrival, regardless of arrival order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use domain::{Candidate, GeoBounds, GeoLocation};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use crate::ports::GeocoderPort;

/// Default deadline for a single geocoding lookup
///
/// The original flow had no deadline at all; a lookup that never
/// resolves would leave the list stuck on the previous results.
const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// The published search state
///
/// Exactly one writer (the service); any number of read-only
/// subscribers. `visible` always equals `!candidates.is_empty()` after
/// a completed query or a clear, mirroring the show/hide behavior of
/// the result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    /// Text of the query this state reflects
    pub query_text: String,
    /// Candidates in vendor ranking order
    pub candidates: Vec<Candidate>,
    /// Whether the result list should be shown
    pub visible: bool,
}

impl SearchState {
    /// State after a clear: no query, no candidates, hidden
    #[must_use]
    pub fn cleared() -> Self {
        Self {
            query_text: String::new(),
            candidates: Vec::new(),
            visible: false,
        }
    }

    /// State after a completed query
    #[must_use]
    pub fn with_results(query_text: String, candidates: Vec<Candidate>) -> Self {
        let visible = !candidates.is_empty();
        Self {
            query_text,
            candidates,
            visible,
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::cleared()
    }
}

/// Service coordinating keystroke input, geocoder calls, and the
/// published candidate list
pub struct AddressSearchService {
    geocoder: Arc<dyn GeocoderPort>,
    state_tx: Arc<watch::Sender<SearchState>>,
    seq: Arc<AtomicU64>,
    query_timeout: Duration,
}

impl std::fmt::Debug for AddressSearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressSearchService")
            .field("seq", &self.seq.load(Ordering::SeqCst))
            .field("query_timeout", &self.query_timeout)
            .finish_non_exhaustive()
    }
}

impl AddressSearchService {
    /// Create a new service with the default query timeout
    #[must_use]
    pub fn new(geocoder: Arc<dyn GeocoderPort>) -> Self {
        Self::with_timeout(geocoder, DEFAULT_QUERY_TIMEOUT)
    }

    /// Create a new service with a custom query timeout
    #[must_use]
    pub fn with_timeout(geocoder: Arc<dyn GeocoderPort>, query_timeout: Duration) -> Self {
        let (state_tx, _) = watch::channel(SearchState::cleared());
        Self {
            geocoder,
            state_tx: Arc::new(state_tx),
            seq: Arc::new(AtomicU64::new(0)),
            query_timeout,
        }
    }

    /// Subscribe to state changes
    ///
    /// The receiver immediately holds the current state; every publish
    /// marks it changed.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn current_state(&self) -> SearchState {
        self.state_tx.borrow().clone()
    }

    /// React to a change of the search input
    ///
    /// An empty `text` clears the candidate list synchronously and never
    /// touches the geocoder. Non-empty text dispatches a lookup on a
    /// background task; the returned handle completes when the lookup
    /// has been published or discarded, which callers may await for
    /// shutdown or test synchronization.
    ///
    /// `bias` and `bounds` are the viewport snapshot taken by the caller
    /// at call time; they are forwarded to the geocoder verbatim.
    ///
    /// Last-write-wins: issuing a new query supersedes any in-flight
    /// one. Superseded lookups run to completion but their results are
    /// discarded.
    #[instrument(skip(self), fields(query_len = text.len()))]
    pub fn on_input_changed(
        &self,
        text: &str,
        bias: Option<GeoLocation>,
        bounds: Option<GeoBounds>,
    ) -> Option<JoinHandle<()>> {
        // Every input change bumps the sequence counter, so responses
        // for earlier queries can no longer publish.
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        if text.is_empty() {
            debug!("input cleared, hiding results");
            self.state_tx.send_replace(SearchState::cleared());
            return None;
        }

        let geocoder = Arc::clone(&self.geocoder);
        let state_tx = Arc::clone(&self.state_tx);
        let counter = Arc::clone(&self.seq);
        let query_timeout = self.query_timeout;
        let query = text.to_string();

        Some(tokio::spawn(async move {
            let outcome = tokio::time::timeout(
                query_timeout,
                geocoder.forward_geocode(&query, bias, bounds),
            )
            .await;

            // Failures are downgraded to an empty result set; nothing
            // propagates to the presenter as an error.
            let candidates = match outcome {
                Ok(Ok(candidates)) => candidates,
                Ok(Err(e)) => {
                    warn!(query = %query, error = %e, "geocoding failed, treating as empty result");
                    Vec::new()
                },
                Err(_) => {
                    warn!(
                        query = %query,
                        timeout_secs = query_timeout.as_secs(),
                        "geocoding timed out, treating as empty result"
                    );
                    Vec::new()
                },
            };

            // Stale-response guard: publish only while this is still the
            // newest query. The check runs inside the channel lock so a
            // newer query can never be overwritten by an older response.
            let published = state_tx.send_if_modified(|state| {
                if counter.load(Ordering::SeqCst) != seq {
                    return false;
                }
                *state = SearchState::with_results(query.clone(), candidates);
                true
            });

            if !published {
                debug!(query = %query, "dropping stale geocoding response");
            }
        }))
    }

    /// Explicitly clear the candidate list
    ///
    /// Also invalidates any in-flight lookup. Used when the hosting view
    /// is torn down or a candidate has been selected.
    pub fn clear(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
        self.state_tx.send_replace(SearchState::cleared());
    }
}
