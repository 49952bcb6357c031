//! A compiled template: an ordered list of literal and field segments.

use crate::types::span::Span;

#[derive(Debug)]
pub struct Template<'source> {
    pub source: &'source str,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text emitted verbatim.
    Raw(Span),
    /// A `{path}` or `{path|safe}` placeholder.
    Field(Field),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub path: Vec<Step>,
    /// `true` if the placeholder used the `safe` modifier.
    pub raw: bool,
    /// The span of the path within the source.
    pub span: Span,
}

/// A single step of a field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Member access, e.g. `user` in `{user.name}`.
    Key(Span),
    /// List access, e.g. `0` in `{tags.0}`.
    Index(usize, Span),
    /// A no argument method call, e.g. `trim()` in `{name.trim()}`.
    Call(Span),
}

impl Step {
    pub const fn span(&self) -> Span {
        match *self {
            Step::Key(span) | Step::Index(_, span) | Step::Call(span) => span,
        }
    }
}
