use serde::Serialize;

/// Static copy for the header banner above the results panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub nav_label: &'static str,
    pub badge: &'static str,
}

impl Default for HeaderView {
    fn default() -> Self {
        Self {
            title: "AI Resume Screener",
            subtitle: "Multi-Agent Recruitment System",
            nav_label: "Resume Analysis",
            badge: "AI-Powered",
        }
    }
}
