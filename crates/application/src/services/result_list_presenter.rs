//! Result list presenter
//!
//! Subscribes to the published search state and renders the full
//! candidate list as two-line rows. Rendering is a full replace on
//! every update; the lists are small and this avoids partial-state
//! bugs. Picking a row emits the candidate on a selection channel and
//! never mutates the search state.

use domain::{AddressLines, Candidate};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::services::SearchState;

/// One rendered row of the result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Street line
    pub primary: String,
    /// Remaining address line
    pub secondary: String,
    /// The candidate backing this row
    pub candidate: Candidate,
}

/// Presenter for the address result list
#[derive(Debug)]
pub struct ResultListPresenter {
    state_rx: watch::Receiver<SearchState>,
    selection_tx: mpsc::UnboundedSender<Candidate>,
    rows: Vec<ResultRow>,
    visible: bool,
}

impl ResultListPresenter {
    /// Create a presenter over a search state subscription
    ///
    /// Returns the presenter and the receiving end of the selection
    /// channel; the map host side consumes selections from it.
    #[must_use]
    pub fn new(
        state_rx: watch::Receiver<SearchState>,
    ) -> (Self, mpsc::UnboundedReceiver<Candidate>) {
        let (selection_tx, selection_rx) = mpsc::unbounded_channel();
        let mut presenter = Self {
            state_rx,
            selection_tx,
            rows: Vec::new(),
            visible: false,
        };
        presenter.refresh();
        (presenter, selection_rx)
    }

    /// Wait for the next state change and re-render
    ///
    /// Returns `false` once the publishing service is gone.
    pub async fn changed(&mut self) -> bool {
        if self.state_rx.changed().await.is_err() {
            return false;
        }
        self.refresh();
        true
    }

    /// Re-render from the currently published state
    pub fn refresh(&mut self) {
        let state = self.state_rx.borrow_and_update().clone();
        self.visible = state.visible;
        self.rows = state
            .candidates
            .into_iter()
            .map(|candidate| {
                let lines = match AddressLines::split(&candidate.display_name) {
                    Ok(lines) => lines,
                    Err(e) => {
                        // Bare place names without a comma are rendered
                        // whole on the street line.
                        warn!(error = %e, "display name not splittable, using fallback");
                        AddressLines::split_or_fallback(&candidate.display_name)
                    },
                };
                ResultRow {
                    primary: lines.primary().to_string(),
                    secondary: lines.secondary().to_string(),
                    candidate,
                }
            })
            .collect();
        debug!(rows = self.rows.len(), visible = self.visible, "rendered result list");
    }

    /// The rendered rows, in vendor ranking order
    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Whether the list should currently be shown
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Emit a selection for the row at `index`
    ///
    /// Sends the exact backing candidate over the selection channel,
    /// exactly once per call, and returns it. Out-of-range indices are
    /// ignored and return `None`. The search state itself is untouched;
    /// clearing after a pick is the owner's decision.
    pub fn select(&self, index: usize) -> Option<Candidate> {
        let row = self.rows.get(index)?;
        let candidate = row.candidate.clone();
        if self.selection_tx.send(candidate.clone()).is_err() {
            warn!(index, "selection receiver dropped, discarding pick");
            return None;
        }
        Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use domain::GeoLocation;
    use tokio::sync::watch;

    use super::*;

    fn candidate(id: &str, name: &str) -> Candidate {
        Candidate::new(id, name, GeoLocation::new_unchecked(19.43, -99.13))
    }

    fn presenter_with(
        state: SearchState,
    ) -> (
        watch::Sender<SearchState>,
        ResultListPresenter,
        mpsc::UnboundedReceiver<Candidate>,
    ) {
        let (tx, rx) = watch::channel(state);
        let (presenter, selection_rx) = ResultListPresenter::new(rx);
        (tx, presenter, selection_rx)
    }

    #[test]
    fn renders_initial_state() {
        let state = SearchState::with_results(
            "main".into(),
            vec![
                candidate("a", "Main St, Springfield, IL"),
                candidate("b", "Main Ave, Dayton, OH"),
            ],
        );
        let (_tx, presenter, _sel) = presenter_with(state);

        assert!(presenter.is_visible());
        assert_eq!(presenter.rows().len(), 2);
        assert_eq!(presenter.rows()[0].primary, "Main St");
        assert_eq!(presenter.rows()[0].secondary, "Springfield, IL");
        assert_eq!(presenter.rows()[1].primary, "Main Ave");
    }

    #[test]
    fn malformed_display_name_falls_back_to_full_string() {
        let state = SearchState::with_results("tower".into(), vec![candidate("p", "Eiffel Tower")]);
        let (_tx, presenter, _sel) = presenter_with(state);

        assert_eq!(presenter.rows()[0].primary, "Eiffel Tower");
        assert_eq!(presenter.rows()[0].secondary, "");
    }

    #[tokio::test]
    async fn update_replaces_the_full_row_list() {
        let (tx, mut presenter, _sel) = presenter_with(SearchState::with_results(
            "old".into(),
            vec![candidate("a", "Old St, X"), candidate("b", "Older St, Y")],
        ));
        assert_eq!(presenter.rows().len(), 2);

        tx.send_replace(SearchState::with_results(
            "new".into(),
            vec![candidate("c", "New St, Z")],
        ));
        assert!(presenter.changed().await);

        assert_eq!(presenter.rows().len(), 1);
        assert_eq!(presenter.rows()[0].candidate.id, "c");
    }

    #[tokio::test]
    async fn cleared_state_hides_the_list() {
        let (tx, mut presenter, _sel) = presenter_with(SearchState::with_results(
            "main".into(),
            vec![candidate("a", "Main St, X")],
        ));
        assert!(presenter.is_visible());

        tx.send_replace(SearchState::cleared());
        assert!(presenter.changed().await);

        assert!(!presenter.is_visible());
        assert!(presenter.rows().is_empty());
    }

    #[tokio::test]
    async fn changed_returns_false_when_publisher_is_gone() {
        let (tx, mut presenter, _sel) =
            presenter_with(SearchState::cleared());
        drop(tx);
        assert!(!presenter.changed().await);
    }

    #[test]
    fn select_emits_exactly_one_event_with_the_exact_candidate() {
        let picked = candidate("a", "Main St, Springfield, IL");
        let state = SearchState::with_results(
            "main".into(),
            vec![picked.clone(), candidate("b", "Main Ave, Dayton, OH")],
        );
        let (_tx, presenter, mut selection_rx) = presenter_with(state);

        let returned = presenter.select(0).expect("row exists");
        assert_eq!(returned, picked);

        let event = selection_rx.try_recv().expect("one event queued");
        assert_eq!(event, picked);
        assert!(selection_rx.try_recv().is_err(), "exactly one event");
    }

    #[test]
    fn select_does_not_mutate_rendered_state() {
        let state = SearchState::with_results(
            "main".into(),
            vec![candidate("a", "Main St, X"), candidate("b", "Main Ave, Y")],
        );
        let (_tx, presenter, _sel) = presenter_with(state);

        let before = presenter.rows().to_vec();
        presenter.select(1);
        assert_eq!(presenter.rows(), before.as_slice());
        assert!(presenter.is_visible());
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let state = SearchState::with_results("main".into(), vec![candidate("a", "Main St, X")]);
        let (_tx, presenter, mut selection_rx) = presenter_with(state);

        assert!(presenter.select(5).is_none());
        assert!(selection_rx.try_recv().is_err());
    }

    #[test]
    fn selection_with_dropped_receiver_returns_none() {
        let state = SearchState::with_results("main".into(), vec![candidate("a", "Main St, X")]);
        let (_tx, presenter, selection_rx) = presenter_with(state);
        drop(selection_rx);

        assert!(presenter.select(0).is_none());
    }
}
