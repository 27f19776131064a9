//! Results panel: turns the driving inputs into a serializable view.
//!
//! `render_results` is the pure render function. `ResultsPanel` adds the one
//! piece of mutable state, the preview chosen by the user.

use serde::Serialize;
use tracing::debug;

use crate::answer::{clean, extract_candidates, AgentBadge};
use crate::models::search::{PreviewLink, SearchResult};
use crate::results::view_state::{resolve_view_state, ViewState};

const PDF_SUFFIX: &str = ".pdf";

const LOADING_HEADLINE: &str = "AI agents processing your query...";
const LOADING_DETAIL: &str = "Analyzing resumes with AI";
const NO_DATABASE_HEADLINE: &str = "Upload resumes to get started";
const NO_DATABASE_DETAIL: &str =
    "Our AI agents will analyze and index them for intelligent searching";
const EMPTY_QUERY_HEADLINE: &str = "Start searching to find matching candidates";
const EMPTY_QUERY_DETAIL: &str = "Our AI agents will analyze resumes for the best matches";
const NO_CANDIDATES_MESSAGE: &str = "No specific candidates identified in this analysis";
const PREVIEW_UNAVAILABLE_MESSAGE: &str = "Sorry, no preview available for this resume.";
const STATUS_RESUME_AVAILABLE: &str = "Resume available";
const STATUS_CANDIDATE_MATCH: &str = "Candidate match";

// ────────────────────────────────────────────────────────────────────────────
// View types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultsView {
    Loading(StatusMessage),
    NoDatabase(StatusMessage),
    EmptyQuery(StatusMessage),
    Populated(PopulatedView),
}

/// Placeholder copy shown in the non-populated states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub headline: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulatedView {
    pub agent: AgentBadge,
    pub candidate_count: usize,
    /// "1 candidate" / "N candidates"
    pub count_label: String,
    /// The answer with markdown stripped.
    pub analysis: String,
    pub candidates: Vec<CandidateRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    /// Links no candidate claimed, in payload order.
    pub unmatched_previews: Vec<PreviewLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<PreviewModal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateRow {
    pub name: String,
    pub initial: String,
    pub status: &'static str,
    pub action: CandidateAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CandidateAction {
    /// Opens the preview modal for `link`.
    Preview { link: PreviewLink },
    /// Disabled placeholder.
    NoPreview,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewModal {
    pub title: String,
    pub content: ModalContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModalContent {
    Document { src: String, title: String },
    Unavailable { message: &'static str },
}

// ────────────────────────────────────────────────────────────────────────────
// Preview link helpers
// ────────────────────────────────────────────────────────────────────────────

/// First link whose name contains the candidate, or is contained by it, ignoring case.
pub fn match_preview<'a>(candidate: &str, links: &'a [PreviewLink]) -> Option<&'a PreviewLink> {
    find_preview_index(candidate, links).map(|i| &links[i])
}

fn find_preview_index(candidate: &str, links: &[PreviewLink]) -> Option<usize> {
    let candidate = candidate.to_lowercase();
    links.iter().position(|link| {
        let name = link.name.to_lowercase();
        name.contains(&candidate) || candidate.contains(&name)
    })
}

/// Appends `.pdf` unless the URL already ends with it.
pub fn ensure_pdf_url(url: &str) -> String {
    if url.ends_with(PDF_SUFFIX) {
        url.to_string()
    } else {
        format!("{url}{PDF_SUFFIX}")
    }
}

fn preview_modal(link: &PreviewLink) -> PreviewModal {
    let content = if link.resume_url.is_empty() {
        ModalContent::Unavailable {
            message: PREVIEW_UNAVAILABLE_MESSAGE,
        }
    } else {
        ModalContent::Document {
            src: ensure_pdf_url(&link.resume_url),
            title: format!("Resume of {}", link.name),
        }
    };

    PreviewModal {
        title: format!("Resume Preview: {}", link.name),
        content,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Renders the results panel from its inputs.
///
/// `selected_preview` only shows up in the populated state.
pub fn render_results(
    search_result: Option<&SearchResult>,
    is_searching: bool,
    database_ready: bool,
    selected_preview: Option<&PreviewLink>,
) -> ResultsView {
    match resolve_view_state(search_result, is_searching, database_ready) {
        ViewState::Loading => ResultsView::Loading(StatusMessage {
            headline: LOADING_HEADLINE,
            detail: LOADING_DETAIL,
        }),
        ViewState::NoDatabase => ResultsView::NoDatabase(StatusMessage {
            headline: NO_DATABASE_HEADLINE,
            detail: NO_DATABASE_DETAIL,
        }),
        ViewState::EmptyQuery => ResultsView::EmptyQuery(StatusMessage {
            headline: EMPTY_QUERY_HEADLINE,
            detail: EMPTY_QUERY_DETAIL,
        }),
        ViewState::Populated(result) => {
            ResultsView::Populated(populated_view(result, selected_preview))
        }
    }
}

fn populated_view(result: &SearchResult, selected_preview: Option<&PreviewLink>) -> PopulatedView {
    // `matched_candidates` is deliberately ignored; names come from the prose.
    let names = extract_candidates(&result.answer);
    let links = result.previews();
    let mut consumed = vec![false; links.len()];

    let candidates: Vec<CandidateRow> = names
        .into_iter()
        .map(|name| {
            let matched = find_preview_index(&name, links);
            if let Some(i) = matched {
                consumed[i] = true;
            }
            CandidateRow {
                initial: name.chars().take(1).flat_map(char::to_uppercase).collect(),
                status: if matched.is_some() {
                    STATUS_RESUME_AVAILABLE
                } else {
                    STATUS_CANDIDATE_MATCH
                },
                action: match matched {
                    Some(i) => CandidateAction::Preview {
                        link: links[i].clone(),
                    },
                    None => CandidateAction::NoPreview,
                },
                name,
            }
        })
        .collect();

    let unmatched_previews: Vec<PreviewLink> = links
        .iter()
        .zip(&consumed)
        .filter(|(_, used)| !**used)
        .map(|(link, _)| link.clone())
        .collect();

    let candidate_count = candidates.len();
    debug!(
        agent = %result.agent_used,
        candidate_count,
        unmatched = unmatched_previews.len(),
        "rendered populated results"
    );

    PopulatedView {
        agent: AgentBadge::new(&result.agent_used),
        candidate_count,
        count_label: count_label(candidate_count),
        analysis: clean(&result.answer),
        empty_message: (candidate_count == 0).then_some(NO_CANDIDATES_MESSAGE),
        candidates,
        unmatched_previews,
        modal: selected_preview.map(preview_modal),
    }
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 candidate".to_string()
    } else {
        format!("{count} candidates")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Stateful panel
// ────────────────────────────────────────────────────────────────────────────

/// Holds the preview the user chose. Everything else is passed in per render.
#[derive(Debug, Clone, Default)]
pub struct ResultsPanel {
    selected_preview: Option<PreviewLink>,
}

impl ResultsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_preview(&self) -> Option<&PreviewLink> {
        self.selected_preview.as_ref()
    }

    /// Opens the preview modal for `link`.
    pub fn choose_preview(&mut self, link: PreviewLink) {
        debug!(name = %link.name, "preview chosen");
        self.selected_preview = Some(link);
    }

    /// Dismisses the preview modal.
    pub fn close_preview(&mut self) {
        self.selected_preview = None;
    }

    /// Renders the panel. Leaving the populated state drops the selection.
    pub fn render(
        &mut self,
        search_result: Option<&SearchResult>,
        is_searching: bool,
        database_ready: bool,
    ) -> ResultsView {
        let view = render_results(
            search_result,
            is_searching,
            database_ready,
            self.selected_preview.as_ref(),
        );
        if !matches!(view, ResultsView::Populated(_)) && self.selected_preview.take().is_some() {
            debug!("preview closed on leaving populated state");
        }
        view
    }
}
