//! Answer sanitizer: strips lightweight markdown from an AI answer so it can be shown as prose.

use std::sync::LazyLock;

use regex::Regex;

static MARKDOWN_SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*_`#~>]").expect("valid markdown symbol pattern"));
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[-*+] ").expect("valid bullet pattern"));
static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[0-9]+\.\s+").expect("valid numbered list pattern"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\(.*?\)").expect("valid link pattern"));
static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid blank line pattern"));

/// Cleans an AI answer for display.
///
/// Steps, in order:
/// 1. drop `*`, `_`, backtick, `#`, `~` and `>` everywhere
/// 2. drop `-`, `*`, `+` bullets at line start
/// 3. drop `N.` list markers at line start
/// 4. `[label](target)` becomes `label`
/// 5. runs of blank lines collapse to one
/// 6. trim
///
/// The pass is repeated until the text stops changing, so nested markers such as
/// `- - item` or `[[a](b)](c)` are fully removed and `clean(clean(x)) == clean(x)`.
/// Each step only removes or shortens text, which bounds the loop.
pub fn clean(text: &str) -> String {
    let mut current = clean_pass(text);
    loop {
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(text: &str) -> String {
    let text = MARKDOWN_SYMBOL_RE.replace_all(text, "");
    let text = BULLET_RE.replace_all(&text, "");
    let text = NUMBERED_RE.replace_all(&text, "");
    let text = LINK_RE.replace_all(&text, "${1}");
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORBIDDEN: [char; 6] = ['*', '_', '`', '#', '~', '>'];

    const AGENT_ANSWER: &str = r#"
## Top Matches

**1. Nadia Delgado** - 7 years of _Rust_ and `tokio` experience.
> Strong systems background.

- **Omar Haddad**: see [portfolio](https://example.com/omar)
* Lena Fischer



2. ANTHONY KRASANO presents solid ~leadership~ signals.
"#;

    #[test]
    fn test_removes_markdown_symbols() {
        assert_eq!(clean("**bold** _em_ `code` # ~x~ > q"), "bold em code  x  q");
    }

    #[test]
    fn test_removes_bullets_at_line_start() {
        assert_eq!(clean("- one\n+ two\n  - three"), "one\ntwo\nthree");
    }

    #[test]
    fn test_keeps_inline_dashes() {
        assert_eq!(clean("senior-level engineer - remote"), "senior-level engineer - remote");
    }

    #[test]
    fn test_removes_numbered_markers() {
        assert_eq!(clean("1. first\n10. tenth"), "first\ntenth");
    }

    #[test]
    fn test_keeps_decimal_numbers_mid_line() {
        assert_eq!(clean("scored 4.5 out of 5"), "scored 4.5 out of 5");
    }

    #[test]
    fn test_replaces_links_with_label() {
        assert_eq!(
            clean("see [Nadia's resume](https://files/nadia.pdf) for details"),
            "see Nadia's resume for details"
        );
    }

    #[test]
    fn test_collapses_blank_line_runs() {
        assert_eq!(clean("a\n\n\n\nb\n\nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(clean("  \n\n hello world \n "), "hello world");
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        let plain = "Nadia Delgado has seven years of backend experience.";
        assert_eq!(clean(plain), plain);
    }

    #[test]
    fn test_nested_bullets_fully_removed() {
        assert_eq!(clean("- - item"), "item");
        assert_eq!(clean("1. - item"), "item");
    }

    #[test]
    fn test_nested_links_fully_removed() {
        assert_eq!(clean("[[a](b)](c)"), "a");
    }

    #[test]
    fn test_full_answer_has_no_forbidden_symbols() {
        let cleaned = clean(AGENT_ANSWER);
        assert!(!cleaned.contains(FORBIDDEN));
        assert!(cleaned.starts_with("Top Matches"));
        assert!(cleaned.contains("Omar Haddad: see portfolio"));
        assert!(cleaned.contains("ANTHONY KRASANO presents solid leadership signals."));
        assert!(!cleaned.contains("\n\n\n"));
    }

    #[test]
    fn test_idempotent_and_symbol_free_on_samples() {
        let samples = [
            AGENT_ANSWER,
            "- - - deep",
            "1. 2. 3. numbers",
            "[[[x](y)](z)](w)",
            "\n\n\n  *  * \n\n",
            "plain",
            "",
            ">> quoted\n\n\n\n# heading",
        ];
        for sample in samples {
            let once = clean(sample);
            assert_eq!(clean(&once), once, "not idempotent for {sample:?}");
            assert!(!once.contains(FORBIDDEN), "markdown left in {once:?}");
        }
    }
}
