//! Parses a field path like `user.tags.0` or `created_at.toDateTime()` into
//! a list of [`Step`]s.

use crate::types::span::Span;
use crate::types::template::Step;
use crate::{Error, Result};

/// Parse the path found at `span` in `source`.
///
/// The scanner guarantees that the path only contains ASCII alphanumerics,
/// `.`, `_`, `(` and `)`, so all errors here are structural.
pub fn parse(source: &str, span: Span) -> Result<Vec<Step>> {
    let raw = &source[span];
    let bytes = raw.as_bytes();
    let mut steps = Vec::new();
    let mut i = 0;

    loop {
        // segment
        let m = i;
        while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
            i += 1;
        }
        let seg = Span::from(m..i).offset(span.m);
        if m == i {
            return Err(Error::syntax(
                "expected identifier or index",
                source,
                Span::from(m..(m + 1).min(bytes.len())).offset(span.m),
            ));
        }

        let text = &raw[m..i];
        let is_index = text.bytes().all(|b| b.is_ascii_digit());
        if !is_index && text.as_bytes()[0].is_ascii_digit() {
            return Err(Error::syntax("invalid identifier", source, seg));
        }

        // optional call
        if bytes.get(i) == Some(&b'(') {
            if bytes.get(i + 1) != Some(&b')') {
                return Err(Error::syntax(
                    "expected `()`, methods take no arguments",
                    source,
                    Span::from(i..i + 1).offset(span.m),
                ));
            }
            if is_index {
                return Err(Error::syntax("cannot call an index", source, seg));
            }
            i += 2;
            steps.push(Step::Call(seg));
        } else if is_index {
            let index = text
                .parse()
                .map_err(|_| Error::syntax("index out of range", source, seg))?;
            steps.push(Step::Index(index, seg));
        } else {
            steps.push(Step::Key(seg));
        }

        match bytes.get(i) {
            None => break,
            Some(b'.') => i += 1,
            Some(_) => {
                return Err(Error::syntax(
                    "unexpected character in path",
                    source,
                    Span::from(i..i + 1).offset(span.m),
                ))
            }
        }
    }

    Ok(steps)
}
