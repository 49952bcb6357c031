//! Compile the template source into a list of segments that can be executed
//! by the renderer.
//!
//! This process has two stages:
//! - The scanner locates `{path}` and `{path|safe}` placeholders, everything
//!   in between is literal text.
//! - The path parser turns each placeholder path into a list of steps.

mod path;
mod scan;

use crate::types::span::Span;
use crate::types::template::{Field, Segment, Template};
use crate::Result;

/// Compile a template into a list of segments.
pub fn template(source: &str) -> Result<Template<'_>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some(p) = scan::find_at(source, cursor) {
        if p.span.m > cursor {
            segments.push(Segment::Raw(Span::from(cursor..p.span.m)));
        }
        let path = path::parse(source, p.path)?;
        segments.push(Segment::Field(Field {
            path,
            raw: p.raw,
            span: p.path,
        }));
        cursor = p.span.n;
    }

    if cursor < source.len() {
        segments.push(Segment::Raw(Span::from(cursor..source.len())));
    }

    tracing::debug!(
        segments = segments.len(),
        bytes = source.len(),
        "compiled template"
    );

    Ok(Template { source, segments })
}
