use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::models::search::{PreviewLink, SearchResult};
use crate::results::panel::{ResultsPanel, ResultsView};

/// Host-side driver for the results panel.
///
/// Owns the three driving inputs (in-flight searches, database readiness,
/// latest result) and the panel's preview selection. The view itself is
/// recomputed from these on every `render`.
#[derive(Debug, Default)]
pub struct ScreenerSession {
    search_result: Option<SearchResult>,
    searches_in_flight: Arc<AtomicUsize>,
    database_ready: bool,
    panel: ResultsPanel,
}

impl ScreenerSession {
    pub fn new(database_ready: bool) -> Self {
        Self {
            database_ready,
            ..Self::default()
        }
    }

    pub fn is_searching(&self) -> bool {
        self.searches_in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn database_ready(&self) -> bool {
        self.database_ready
    }

    pub fn search_result(&self) -> Option<&SearchResult> {
        self.search_result.as_ref()
    }

    pub fn selected_preview(&self) -> Option<&PreviewLink> {
        self.panel.selected_preview()
    }

    /// Marks a search as in flight and closes any open preview.
    ///
    /// The search counts as in flight for as long as the returned ticket lives,
    /// so a caller that is cancelled mid-search still ends the `loading` state.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.searches_in_flight.fetch_add(1, Ordering::SeqCst);
        self.panel.close_preview();
        SearchTicket {
            in_flight: Arc::clone(&self.searches_in_flight),
        }
    }

    pub fn finish_search(&mut self, ticket: SearchTicket, result: SearchResult) {
        info!(agent = %result.agent_used, "search result received");
        self.search_result = Some(result);
        drop(ticket);
    }

    /// The previous result, if any, stays on screen.
    pub fn fail_search(&mut self, ticket: SearchTicket) {
        drop(ticket);
    }

    pub fn set_database_ready(&mut self, ready: bool) {
        if self.database_ready != ready {
            debug!(ready, "database readiness changed");
        }
        self.database_ready = ready;
    }

    pub fn choose_preview(&mut self, link: PreviewLink) {
        self.panel.choose_preview(link);
    }

    pub fn close_preview(&mut self) {
        self.panel.close_preview();
    }

    pub fn render(&mut self) -> ResultsView {
        self.panel.render(
            self.search_result.as_ref(),
            self.is_searching(),
            self.database_ready,
        )
    }
}

/// One in-flight search. Dropping it, consumed or not, ends the search.
#[derive(Debug)]
#[must_use = "the search stops counting as in flight when the ticket is dropped"]
pub struct SearchTicket {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for SearchTicket {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(answer: &str) -> SearchResult {
        SearchResult {
            agent_used: "experience_analyzer".to_string(),
            answer: answer.to_string(),
            matched_candidates: vec![],
            preview_urls: None,
        }
    }

    fn link() -> PreviewLink {
        PreviewLink {
            name: "Nadia Delgado".to_string(),
            resume_url: "https://files/nadia".to_string(),
        }
    }

    #[test]
    fn test_new_session_without_database() {
        let mut session = ScreenerSession::new(false);
        assert!(matches!(session.render(), ResultsView::NoDatabase(_)));
    }

    #[test]
    fn test_search_lifecycle() {
        let mut session = ScreenerSession::new(true);
        assert!(matches!(session.render(), ResultsView::EmptyQuery(_)));

        let ticket = session.begin_search();
        assert!(session.is_searching());
        assert!(matches!(session.render(), ResultsView::Loading(_)));

        session.finish_search(ticket, result("**Nadia Delgado**"));
        assert!(!session.is_searching());
        match session.render() {
            ResultsView::Populated(view) => assert_eq!(view.candidate_count, 1),
            other => panic!("expected populated, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_search_keeps_previous_result() {
        let mut session = ScreenerSession::new(true);
        let ticket = session.begin_search();
        session.finish_search(ticket, result("**Nadia Delgado**"));

        let ticket = session.begin_search();
        session.fail_search(ticket);
        assert!(!session.is_searching());
        assert_eq!(session.search_result().unwrap().answer, "**Nadia Delgado**");
    }

    #[test]
    fn test_overlapping_searches_stay_loading_until_all_finish() {
        let mut session = ScreenerSession::new(true);
        let first = session.begin_search();
        let second = session.begin_search();
        session.finish_search(first, result("**Nadia Delgado**"));
        assert!(matches!(session.render(), ResultsView::Loading(_)));
        session.fail_search(second);
        assert!(matches!(session.render(), ResultsView::Populated(_)));
    }

    #[test]
    fn test_dropped_ticket_ends_loading() {
        let mut session = ScreenerSession::new(true);
        let ticket = session.begin_search();
        assert!(matches!(session.render(), ResultsView::Loading(_)));

        drop(ticket);
        assert!(!session.is_searching());
        assert!(matches!(session.render(), ResultsView::EmptyQuery(_)));
    }

    #[test]
    fn test_begin_search_closes_preview() {
        let mut session = ScreenerSession::new(true);
        let ticket = session.begin_search();
        session.finish_search(ticket, result("**Nadia Delgado**"));
        session.choose_preview(link());
        assert!(session.selected_preview().is_some());

        let _ticket = session.begin_search();
        assert!(session.selected_preview().is_none());
    }

    #[test]
    fn test_preview_actions_show_in_render() {
        let mut session = ScreenerSession::new(true);
        let ticket = session.begin_search();
        session.finish_search(ticket, result("**Nadia Delgado**"));

        session.choose_preview(link());
        match session.render() {
            ResultsView::Populated(view) => assert!(view.modal.is_some()),
            other => panic!("expected populated, got {other:?}"),
        }

        session.close_preview();
        match session.render() {
            ResultsView::Populated(view) => assert!(view.modal.is_none()),
            other => panic!("expected populated, got {other:?}"),
        }
    }

    #[test]
    fn test_database_toggle() {
        let mut session = ScreenerSession::new(false);
        session.set_database_ready(true);
        assert!(session.database_ready());
        assert!(matches!(session.render(), ResultsView::EmptyQuery(_)));
    }
}
