mod value;

use std::fmt::Write;
use std::io;

pub(crate) use crate::render::value::human;
pub use crate::render::value::to_js_string;

use crate::fmt::{Formatter, Writer};
use crate::types::template::{Segment, Template};
use crate::{Engine, Error, Result, Value};

/// Render the template to a string.
pub(crate) fn template(engine: &Engine<'_>, template: &Template<'_>, value: &Value) -> Result<String> {
    let mut s = String::with_capacity(template.source.len());
    let mut f = Formatter::with_string(&mut s);
    render(engine, template, &mut f, value)?;
    Ok(s)
}

/// Render the template to the given writer.
pub(crate) fn template_to<W>(
    engine: &Engine<'_>,
    template: &Template<'_>,
    writer: W,
    value: &Value,
) -> Result<()>
where
    W: io::Write,
{
    let mut w = Writer::new(writer);
    let mut f = Formatter::with_writer(&mut w);
    render(engine, template, &mut f, value)
        .map_err(|err| w.take_err().map(Error::from).unwrap_or(err))
}

fn render(
    engine: &Engine<'_>,
    t: &Template<'_>,
    f: &mut Formatter<'_>,
    root: &Value,
) -> Result<()> {
    for segment in &t.segments {
        match segment {
            Segment::Raw(span) => {
                // This can only fail because of an IO error.
                f.write_str(&t.source[*span])?;
            }

            Segment::Field(field) => {
                let value = value::lookup(engine, t.source, root, &field.path)?;
                let s = match &value {
                    Some(v) => to_js_string(v),
                    None => "undefined".into(),
                };
                if field.raw {
                    f.write_str(&s)?;
                } else {
                    (engine.escaper)(f, &s).map_err(|err| err.enrich(t.source, field.span))?;
                }
            }
        }
    }
    Ok(())
}
