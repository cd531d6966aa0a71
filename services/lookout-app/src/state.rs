//! View state for the monitor list page
//!
//! Pure state transitions driven by fetch outcomes, kept free of any
//! framework types so the list lifecycle is testable on its own.

use crate::api::{FetchOutcome, Monitor};

/// Presentation mode for the monitor collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    List,
    #[default]
    Grid,
}

/// Which of the three mutually exclusive branches the page renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderBranch {
    Loading,
    Error,
    Content,
}

/// State backing the list page: a loading flag, a page-level error, and
/// the collection in API response order.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub loading: bool,
    pub error: Option<String>,
    pub monitors: Vec<Monitor>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fetch is in flight
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Fold a fetch outcome into the state. Failures keep the previous
    /// collection so a later successful poll recovers silently.
    pub fn settle_fetch(&mut self, outcome: FetchOutcome) {
        self.loading = false;
        match outcome {
            FetchOutcome::Success(monitors) => {
                self.monitors = monitors;
                self.error = None;
            }
            FetchOutcome::Failure(message) => {
                self.error = Some(message);
            }
        }
    }

    /// Drop the monitor with the given id, keeping the order of the rest
    pub fn remove_monitor(&mut self, id: u64) {
        self.monitors.retain(|m| m.id != id);
    }

    /// Render branch precedence: loading, then error, then content
    pub fn branch(&self) -> RenderBranch {
        if self.loading {
            RenderBranch::Loading
        } else if self.error.is_some() {
            RenderBranch::Error
        } else {
            RenderBranch::Content
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(id: u64, name: &str) -> Monitor {
        Monitor {
            id,
            name: name.to_string(),
            url: format!("http://{}", name),
            status: "up".to_string(),
            response_time: 100.0,
            uptime: Some(99.9),
        }
    }

    #[test]
    fn starts_empty_and_idle() {
        let state = ListState::new();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert!(state.monitors.is_empty());
        assert_eq!(state.branch(), RenderBranch::Content);
    }

    #[test]
    fn loading_spans_begin_to_settle() {
        let mut state = ListState::new();
        state.begin_fetch();
        assert!(state.loading);
        assert_eq!(state.branch(), RenderBranch::Loading);
        state.settle_fetch(FetchOutcome::Success(vec![]));
        assert!(!state.loading);
    }

    #[test]
    fn loading_clears_on_failure_too() {
        let mut state = ListState::new();
        state.begin_fetch();
        state.settle_fetch(FetchOutcome::Failure("boom".to_string()));
        assert!(!state.loading);
        assert_eq!(state.branch(), RenderBranch::Error);
    }

    #[test]
    fn success_replaces_collection_and_clears_error() {
        let mut state = ListState::new();
        state.error = Some("old failure".to_string());
        state.monitors = vec![monitor(1, "a")];

        state.begin_fetch();
        state.settle_fetch(FetchOutcome::Success(vec![monitor(2, "b"), monitor(3, "c")]));

        assert_eq!(state.error, None);
        let ids: Vec<u64> = state.monitors.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn failure_keeps_prior_collection() {
        let mut state = ListState::new();
        state.settle_fetch(FetchOutcome::Success(vec![monitor(1, "a")]));

        state.begin_fetch();
        state.settle_fetch(FetchOutcome::Failure("db down".to_string()));

        assert_eq!(state.error.as_deref(), Some("db down"));
        assert_eq!(state.monitors.len(), 1);
        assert_eq!(state.monitors[0].id, 1);
    }

    #[test]
    fn remove_drops_only_the_matching_id() {
        let mut state = ListState::new();
        state.settle_fetch(FetchOutcome::Success(vec![monitor(5, "a"), monitor(7, "b")]));

        state.remove_monitor(5);

        assert_eq!(state.monitors.len(), 1);
        assert_eq!(state.monitors[0].id, 7);
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut state = ListState::new();
        state.settle_fetch(FetchOutcome::Success(vec![monitor(5, "a"), monitor(7, "b")]));

        state.remove_monitor(99);

        let ids: Vec<u64> = state.monitors.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![5, 7]);
    }

    #[test]
    fn error_branch_wins_over_content() {
        let mut state = ListState::new();
        state.settle_fetch(FetchOutcome::Success(vec![monitor(1, "a")]));
        state.begin_fetch();
        state.settle_fetch(FetchOutcome::Failure("db down".to_string()));

        // Prior collection is retained but never rendered next to the error.
        assert!(!state.monitors.is_empty());
        assert_eq!(state.branch(), RenderBranch::Error);
    }

    #[test]
    fn loading_branch_wins_over_error() {
        let mut state = ListState::new();
        state.settle_fetch(FetchOutcome::Failure("db down".to_string()));
        state.begin_fetch();
        assert_eq!(state.branch(), RenderBranch::Loading);
    }

    #[test]
    fn view_mode_defaults_to_grid() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
    }
}
