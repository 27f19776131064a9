use serde::{Deserialize, Serialize};

/// Display tone of an agent badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Success,
    Warning,
    Secondary,
    Primary,
    #[default]
    Default,
}

/// Badge describing which backend analysis strategy produced an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentBadge {
    pub agent: String,
    pub label: String,
    pub tone: BadgeTone,
}

impl AgentBadge {
    pub fn new(agent: &str) -> Self {
        Self {
            agent: agent.to_string(),
            label: agent_label(agent),
            tone: agent_tone(agent),
        }
    }
}

/// Known agents map to a tone; anything else is `Default`.
pub fn agent_tone(agent: &str) -> BadgeTone {
    match agent {
        "skill_matcher" => BadgeTone::Success,
        "experience_analyzer" => BadgeTone::Warning,
        "relevancy_scorer" => BadgeTone::Secondary,
        "seniority_detector" => BadgeTone::Primary,
        _ => BadgeTone::Default,
    }
}

/// `skill_matcher` -> `Skill Matcher`.
///
/// Only the first underscore becomes a space. Every word character that follows
/// a non-word character (or starts the string) is upper-cased, where word
/// characters are ASCII alphanumerics and `_`.
pub fn agent_label(agent: &str) -> String {
    let spaced = agent.replacen('_', " ", 1);
    let mut out = String::with_capacity(spaced.len());
    let mut prev_is_word = false;

    for ch in spaced.chars() {
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_word = is_word;
    }

    out
}
