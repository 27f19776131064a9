use serde::{Deserialize, Serialize};

/// A named pointer to a resume document that can be opened for inline viewing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewLink {
    pub name: String,
    pub resume_url: String,
}

/// Payload returned by the external search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Which backend analysis strategy produced the answer, e.g. `skill_matcher`.
    pub agent_used: String,
    pub answer: String,
    /// Received but not used for display; candidates are re-derived from `answer`.
    #[serde(default)]
    pub matched_candidates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_urls: Option<Vec<PreviewLink>>,
}

impl SearchResult {
    /// Preview links in payload order. Missing `preview_urls` means no previews.
    pub fn previews(&self) -> &[PreviewLink] {
        self.preview_urls.as_deref().unwrap_or(&[])
    }
}
