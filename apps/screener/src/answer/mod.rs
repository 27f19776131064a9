// Text processing over the free-text answer returned by the search agents.
// Everything here is total: no input makes these functions fail.

pub mod agent;
pub mod extractor;
pub mod sanitizer;

pub use agent::AgentBadge;
pub use extractor::{extract_candidates, CandidateExtractor, Matcher, PatternMatcher};
pub use sanitizer::clean;
