//! Locates `{path}` and `{path|safe}` placeholders in template source.

use crate::types::span::Span;

/// A placeholder found by [`find_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// The whole placeholder including the braces.
    pub span: Span,
    /// The field path, without surrounding whitespace.
    pub path: Span,
    /// Whether the `safe` modifier was present.
    pub raw: bool,
}

/// Returns the first placeholder that starts at or after byte `i`.
///
/// Braces that do not start a well formed placeholder are skipped over, they
/// end up as literal text in the compiled template.
pub fn find_at(source: &str, i: usize) -> Option<Placeholder> {
    let mut j = i;
    while let Some(k) = source[j..].find('{') {
        let begin = j + k;
        if let Some(p) = match_at(source, begin) {
            return Some(p);
        }
        j = begin + 1;
    }
    None
}

/// Attempts to match a placeholder whose opening brace is at byte `begin`.
fn match_at(source: &str, begin: usize) -> Option<Placeholder> {
    let mut c = Cursor::new(source, begin + 1);

    c.skip_whitespace();
    let m = c.pos;
    c.eat_while(is_path_char);
    let n = c.pos;
    if m == n {
        return None;
    }
    let path = Span::from(m..n);

    // Try the `| safe` modifier first, then fall back to a bare placeholder.
    let mut modified = c;
    modified.skip_whitespace();
    if modified.eat('|') {
        modified.skip_whitespace();
        if modified.eat_str("safe") {
            modified.skip_whitespace();
            if modified.eat('}') {
                return Some(Placeholder {
                    span: Span::from(begin..modified.pos),
                    path,
                    raw: true,
                });
            }
        }
    }

    c.skip_whitespace();
    if c.eat('}') {
        return Some(Placeholder {
            span: Span::from(begin..c.pos),
            path,
            raw: false,
        });
    }
    None
}

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '(' | ')')
}

#[derive(Clone, Copy)]
struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str, pos: usize) -> Self {
        Self { source, pos }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        let rest = self.rest();
        let len = rest.find(|c| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    fn eat(&mut self, c: char) -> bool {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn find(source: &str) -> Option<(&str, &str, bool)> {
        find_at(source, 0).map(|p| (&source[p.span], &source[p.path], p.raw))
    }

    #[test]
    fn find_bare() {
        assert_eq!(find("a {b} c"), Some(("{b}", "b", false)));
    }

    #[test]
    fn find_whitespace() {
        assert_eq!(find("{  user.name\n}"), Some(("{  user.name\n}", "user.name", false)));
    }

    #[test]
    fn find_safe() {
        assert_eq!(find("{body|safe}"), Some(("{body|safe}", "body", true)));
        assert_eq!(find("{ body | safe }"), Some(("{ body | safe }", "body", true)));
    }

    #[test]
    fn find_call() {
        assert_eq!(find("{ name.trim() }"), Some(("{ name.trim() }", "name.trim()", false)));
    }

    #[test]
    fn find_skips_malformed() {
        assert_eq!(find("{ unclosed"), None);
        assert_eq!(find("{}"), None);
        assert_eq!(find("{ a b }"), None);
        assert_eq!(find("{a|safety}"), None);
        assert_eq!(find("{a|unsafe}"), None);
        assert_eq!(find("{\"x\"} {y}"), Some(("{y}", "y", false)));
    }

    #[test]
    fn find_nested_brace() {
        assert_eq!(find("{{x}}"), Some(("{x}", "x", false)));
    }

    #[test]
    fn find_from_offset() {
        let source = "{a} {b}";
        let p = find_at(source, 3).unwrap();
        assert_eq!(&source[p.path], "b");
    }

    #[test]
    fn find_trailing_brace() {
        assert_eq!(find("text {"), None);
    }
}
