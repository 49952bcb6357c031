//! Types for escaping rendered field values.
//!
//! Every `{field}` placeholder is first converted to a string and then passed
//! through the engine's escaper, `{field|safe}` placeholders are written
//! as is. The escaper can be replaced using
//! [`Engine::set_escaper`][crate::Engine::set_escaper].
//!
//! All escaper functions have the following signature.
//!
//! ```text
//! Fn(&mut quill::fmt::Formatter<'_>, &str) -> quill::Result<()>;
//! ```
//!
//! # Examples
//!
//! ```
//! use std::fmt::Write;
//!
//! let mut engine = quill::Engine::new();
//! engine.set_escaper(|f, s| {
//!     write!(f, "{}", s.to_uppercase())?;
//!     Ok(())
//! });
//!
//! let result = engine.compile("Hello {name}!")?.render(serde_json::json!({ "name": "ada" }))?;
//! assert_eq!(result, "Hello ADA!");
//! # Ok::<(), quill::Error>(())
//! ```

use std::fmt;
use std::io;

use crate::Result;

/// An escaper function or closure.
pub(crate) type EscapeFn = dyn Fn(&mut Formatter<'_>, &str) -> Result<()> + Sync + Send + 'static;

/// A [`std::fmt::Write`] façade over the render output.
pub struct Formatter<'a> {
    buf: &'a mut (dyn fmt::Write + 'a),
}

pub(crate) struct Writer<W> {
    writer: W,
    err: Option<io::Error>,
}

impl<'a> Formatter<'a> {
    pub(crate) fn with_string(buf: &'a mut String) -> Self {
        Self { buf }
    }

    pub(crate) fn with_writer<W>(buf: &'a mut Writer<W>) -> Self
    where
        W: io::Write,
    {
        Self { buf }
    }
}

impl fmt::Write for Formatter<'_> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        fmt::Write::write_str(self.buf, s)
    }

    #[inline]
    fn write_char(&mut self, c: char) -> fmt::Result {
        fmt::Write::write_char(self.buf, c)
    }

    #[inline]
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        fmt::Write::write_fmt(self.buf, args)
    }
}

impl<W> Writer<W>
where
    W: io::Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer, err: None }
    }

    pub fn take_err(&mut self) -> Option<io::Error> {
        self.err.take()
    }
}

impl<W> fmt::Write for Writer<W>
where
    W: io::Write,
{
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.writer.write_all(s.as_bytes()).map_err(|e| {
            self.err = Some(e);
            fmt::Error
        })
    }
}

/// The default escaper.
///
/// Replaces `&`, `"`, `'`, `<` and `>` with HTML entities. Double quotes
/// become `&quto;`, which is not a valid entity. Existing templates and their
/// consumers depend on this exact output so it is kept as is, use
/// [`escape_html_strict`] to emit `&quot;` instead.
pub fn escape_html(f: &mut Formatter<'_>, s: &str) -> Result<()> {
    escape_with(f, s, "&quto;")
}

/// Like [`escape_html`] but escapes double quotes as `&quot;`.
pub fn escape_html_strict(f: &mut Formatter<'_>, s: &str) -> Result<()> {
    escape_with(f, s, "&quot;")
}

/// Writes the string unchanged.
pub fn no_escape(f: &mut Formatter<'_>, s: &str) -> Result<()> {
    fmt::Write::write_str(f, s)?;
    Ok(())
}

fn escape_with(f: &mut Formatter<'_>, s: &str, quot: &str) -> Result<()> {
    let mut last = 0;
    for (i, byte) in s.bytes().enumerate() {
        let entity = match byte {
            b'&' => "&amp;",
            b'"' => quot,
            b'\'' => "&#39;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            _ => continue,
        };
        fmt::Write::write_str(f, &s[last..i])?;
        fmt::Write::write_str(f, entity)?;
        last = i + 1;
    }
    fmt::Write::write_str(f, &s[last..])?;
    Ok(())
}
