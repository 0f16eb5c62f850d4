//! SearchTerm - Substring filter over prompt title and body

/// A non-empty substring to look for in title or body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Returns `None` for missing or empty input, which means "no filter".
    /// Whitespace is part of the term and is matched as typed.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(term) if !term.is_empty() => Some(Self(term.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `LIKE` pattern matching the term anywhere, with `%`, `_` and `\`
    /// escaped so they match literally under the default escape character.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }

    /// Case-sensitive substring match, same semantics as the `LIKE` pattern
    pub fn matches(&self, title: &str, body: &str) -> bool {
        title.contains(&self.0) || body.contains(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_no_filter() {
        assert_eq!(SearchTerm::parse(None), None);
        assert_eq!(SearchTerm::parse(Some("")), None);
    }

    #[test]
    fn test_like_pattern_wraps_term() {
        let term = SearchTerm::parse(Some("say hello")).unwrap();
        assert_eq!(term.like_pattern(), "%say hello%");
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        let term = SearchTerm::parse(Some("50%_off\\")).unwrap();
        assert_eq!(term.like_pattern(), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn test_quote_passes_through_unchanged() {
        let term = SearchTerm::parse(Some("'; DROP TABLE prompts; --")).unwrap();
        assert_eq!(term.like_pattern(), "%'; DROP TABLE prompts; --%");
    }

    #[test]
    fn test_matches_title_or_body() {
        let term = SearchTerm::parse(Some("hello")).unwrap();
        assert!(term.matches("hello world", ""));
        assert!(term.matches("Greeting", "Say hello"));
        assert!(!term.matches("Hello", "HELLO"));
    }
}
