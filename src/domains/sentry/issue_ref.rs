//! Issue reference normalization.
//!
//! Tools accept either a bare numeric issue id or a full Sentry issue URL
//! (e.g. `https://sentry.example.com/organizations/acme/issues/12345/`).
//! This module extracts the canonical numeric id from either form.

use reqwest::Url;

/// Extract a numeric issue id from a raw issue reference.
///
/// If the input parses as a URL, the id is the path segment that follows the
/// literal `issues` segment, provided it is entirely decimal digits. If the
/// input is not a URL, it is accepted as-is when it is entirely decimal
/// digits. Anything else yields `None`.
pub fn extract_issue_id(input: &str) -> Option<String> {
    match Url::parse(input) {
        Ok(url) => {
            let segments: Vec<&str> = url.path_segments()?.collect();
            let issues_pos = segments.iter().position(|s| *s == "issues")?;
            segments
                .get(issues_pos + 1)
                .filter(|s| is_numeric_id(s))
                .map(|s| s.to_string())
        }
        Err(_) if is_numeric_id(input) => Some(input.to_string()),
        Err(_) => None,
    }
}

fn is_numeric_id(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_numeric_id() {
        assert_eq!(extract_issue_id("12345"), Some("12345".to_string()));
        assert_eq!(extract_issue_id("7"), Some("7".to_string()));
    }

    #[test]
    fn test_issue_url() {
        assert_eq!(
            extract_issue_id("https://sentry.example.com/organizations/acme/issues/12345/"),
            Some("12345".to_string())
        );
        assert_eq!(
            extract_issue_id("https://sentry.example.com/issues/987"),
            Some("987".to_string())
        );
    }

    #[test]
    fn test_url_with_trailing_path() {
        assert_eq!(
            extract_issue_id("https://sentry.example.com/organizations/acme/issues/42/events/"),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_url_without_issue_id() {
        // "issues" segment but nothing numeric after it
        assert_eq!(
            extract_issue_id("https://sentry.example.com/organizations/acme/issues/"),
            None
        );
        assert_eq!(
            extract_issue_id("https://sentry.example.com/organizations/acme/issues/latest"),
            None
        );
        // no "issues" segment at all
        assert_eq!(
            extract_issue_id("https://sentry.example.com/organizations/acme/projects/"),
            None
        );
    }

    #[test]
    fn test_non_url_non_numeric() {
        assert_eq!(extract_issue_id("not-an-id"), None);
        assert_eq!(extract_issue_id("123abc"), None);
        assert_eq!(extract_issue_id(""), None);
    }
}
