//! Delimited-text transforms used at the editor boundary.
//!
//! Tags are edited as one comma-separated field and experience bullets as
//! one newline-separated textarea. Splitting trims every segment and drops
//! the blank ones, so re-joining and re-splitting is stable.

/// Separator used when joining tags for display in an input.
pub const TAG_SEPARATOR: &str = ", ";

/// Split a comma-separated tag field into trimmed, non-empty tags.
#[must_use]
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join tags for editing in a single input.
#[must_use]
pub fn join_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR)
}

/// Split a textarea into trimmed, non-blank lines.
///
/// Accepts both `\n` and `\r\n` line endings (browsers submit the latter).
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join lines for editing in a textarea.
#[must_use]
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags_trims() {
        assert_eq!(split_tags("a, b ,  c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tags_rejoin_is_stable() {
        let tags = split_tags("a, b ,  c");
        let joined = join_tags(&tags);
        assert_eq!(joined, "a, b, c");
        assert_eq!(split_tags(&joined), tags);
    }

    #[test]
    fn test_split_tags_drops_empty_tokens() {
        assert_eq!(split_tags(",a,, ,b,"), vec!["a", "b"]);
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ").is_empty());
    }

    #[test]
    fn test_split_lines_drops_blank_lines() {
        assert_eq!(split_lines("line1\n\nline2\n"), vec!["line1", "line2"]);
    }

    #[test]
    fn test_split_lines_handles_crlf_and_whitespace() {
        assert_eq!(
            split_lines("  first \r\n\r\n   \r\nsecond\r\n"),
            vec!["first", "second"]
        );
    }

    #[test]
    fn test_lines_rejoin_is_stable() {
        let lines = split_lines("one\n\ntwo\nthree\n");
        assert_eq!(split_lines(&join_lines(&lines)), lines);
    }
}
