use crate::models::search::SearchResult;

/// Which of the four mutually exclusive results-panel states to show.
///
/// Derived on every render from the three driving inputs; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState<'a> {
    Loading,
    NoDatabase,
    EmptyQuery,
    Populated(&'a SearchResult),
}

/// Precedence: loading > no_database > empty_query > populated.
pub fn resolve_view_state(
    search_result: Option<&SearchResult>,
    is_searching: bool,
    database_ready: bool,
) -> ViewState<'_> {
    if is_searching {
        return ViewState::Loading;
    }
    if !database_ready {
        return ViewState::NoDatabase;
    }
    match search_result {
        Some(result) => ViewState::Populated(result),
        None => ViewState::EmptyQuery,
    }
}
