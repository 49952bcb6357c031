//! Presentation helpers for a small blog and its admin panel.
//!
//! # Features
//!
//! - Brace templates: `<h1>{ blog.title }</h1>{ blog.html_content | safe }`
//! - Escaped output by default, `|safe` for trusted HTML
//! - Methods at the end of path steps: `{ blog.created_at.toDateTime() }`
//! - Render using any [`serde`] serializable values
//! - Pagination windows and page descriptors for list views
//! - Date formatting, API response helpers and the admin panel state
//!
//! # Getting started
//!
//! Your entry point is the [`Engine`] struct. The engine stores the escaper,
//! methods, and compiled templates. Generally, you only need to construct one
//! engine during the lifetime of a program.
//!
//! ```
//! let engine = quill::Engine::new();
//! ```
//!
//! Next, [`.add_template`][Engine::add_template] is used to compile and store a
//! template in the engine.
//!
//! ```
//! # let mut engine = quill::Engine::new();
//! engine.add_template("hello", "Hello {user.name}!")?;
//! # Ok::<(), quill::Error>(())
//! ```
//!
//! Finally, the template is rendered by fetching it using
//! [`.get_template`][Engine::get_template] and calling
//! [`.render`][TemplateRef::render].
//!
//! ```
//! # let mut engine = quill::Engine::new();
//! # engine.add_template("hello", "Hello {user.name}!")?;
//! let template = engine.get_template("hello").unwrap();
//! let result = template.render(serde_json::json!({ "user": { "name": "John Smith" } }))?;
//! assert_eq!(result, "Hello John Smith!");
//! # Ok::<(), quill::Error>(())
//! ```
//!
//! If you don't need to store the compiled template you can also use the
//! [`.compile`][Engine::compile] function to return the template directly.
//!
//! # Template syntax
//!
//! A placeholder is a field path between braces, optionally followed by the
//! `safe` modifier. Whitespace is allowed around the path and the modifier.
//!
//! ```text
//! {title}  { user.name }  {tags.0}  {content|safe}  { name.trim() | safe }
//! ```
//!
//! - Paths are made of identifiers and list indexes separated by `.`.
//! - An identifier followed by `()` calls the method of that name on the
//!   value so far, see [`methods`].
//! - `length` on a string or list returns its length.
//! - A missing field renders as `undefined`.
//! - Values are converted to strings like JavaScript does, for example lists
//!   are joined with `,`.
//! - Unless marked `safe` the string is escaped, see [`fmt::escape_html`].
//!
//! Anything in braces that is not a placeholder, like `{ a b }` or a brace
//! that is never closed, is treated as literal text.
//!
//! # Examples
//!
//! ### Render using structured data
//!
//! ```
//! #[derive(serde::Serialize)]
//! struct Context { blog: Blog }
//!
//! #[derive(serde::Serialize)]
//! struct Blog { title: String, created_at: f64 }
//!
//! let ctx = Context {
//!     blog: Blog { title: "Rust & <Templates>".into(), created_at: 1_709_629_622.0 },
//! };
//!
//! let result = quill::Engine::new()
//!     .compile("{blog.title} at {blog.created_at.toDateTime()}")?
//!     .render(&ctx)?;
//!
//! assert_eq!(result, "Rust &amp; &lt;Templates&gt; at 2024-03-05 09:07:02");
//! # Ok::<(), quill::Error>(())
//! ```
//!
//! ### Render a template to an `impl io::Write`
//!
//! ```
//! use std::io;
//!
//! let stdout = io::BufWriter::new(io::stdout());
//!
//! quill::Engine::new()
//!     .compile("Hello {user.name}")?
//!     .render_to_writer(stdout, serde_json::json!({ "user": { "name": "John Smith" } }))?;
//! # Ok::<(), quill::Error>(())
//! ```

pub mod api;
mod compile;
pub mod datetime;
mod error;
pub mod fmt;
pub mod manage;
pub mod methods;
pub mod pagination;
mod render;
mod types;

use std::collections::BTreeMap;
use std::fmt as std_fmt;
use std::io;

use chrono::{FixedOffset, Offset, Utc};

pub use crate::error::{Error, ErrorKind};
pub use crate::render::to_js_string;
pub use serde_json::{Map, Value};

use crate::fmt::{EscapeFn, Formatter};
use crate::methods::MethodFn;
use crate::types::template;

/// A type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The compilation and rendering engine.
pub struct Engine<'engine> {
    escaper: Box<EscapeFn>,
    methods: BTreeMap<&'engine str, EngineFn>,
    templates: BTreeMap<&'engine str, template::Template<'engine>>,
    utc_offset: FixedOffset,
}

enum EngineFn {
    Method(Box<MethodFn>),
    #[cfg(feature = "builtins")]
    Builtin(methods::BuiltinFn),
}

/// A compiled template.
pub struct Template<'engine, 'source> {
    engine: &'engine Engine<'engine>,
    template: template::Template<'source>,
}

/// A reference to a compiled template in an [`Engine`].
#[derive(Clone, Copy)]
pub struct TemplateRef<'engine> {
    engine: &'engine Engine<'engine>,
    template: &'engine template::Template<'engine>,
}

impl<'engine> Default for Engine<'engine> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'engine> Engine<'engine> {
    /// Construct a new engine.
    ///
    /// The engine escapes output with [`fmt::escape_html`], formats dates in
    /// UTC and, if the `builtins` feature is enabled, has the builtin methods
    /// registered.
    #[inline]
    pub fn new() -> Self {
        #[allow(unused_mut)]
        let mut methods = BTreeMap::new();
        #[cfg(feature = "builtins")]
        for (name, f) in methods::builtins::ALL {
            methods.insert(*name, EngineFn::Builtin(*f));
        }
        Self {
            escaper: Box::new(fmt::escape_html),
            methods,
            templates: BTreeMap::new(),
            utc_offset: Utc.fix(),
        }
    }

    /// Set the function used to escape field values.
    ///
    /// Fields marked `safe` are never passed to the escaper.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut engine = quill::Engine::new();
    /// engine.set_escaper(quill::fmt::escape_html_strict);
    ///
    /// let result = engine.compile("{q}")?.render(serde_json::json!({ "q": "\"hi\"" }))?;
    /// assert_eq!(result, "&quot;hi&quot;");
    /// # Ok::<(), quill::Error>(())
    /// ```
    #[inline]
    pub fn set_escaper<F>(&mut self, f: F)
    where
        F: Fn(&mut Formatter<'_>, &str) -> Result<()> + Sync + Send + 'static,
    {
        self.escaper = Box::new(f);
    }

    /// Set the UTC offset used by date methods like `toDateTime()`.
    #[inline]
    pub fn set_utc_offset(&mut self, offset: FixedOffset) {
        self.utc_offset = offset;
    }

    /// Add a new method to the engine.
    ///
    /// A method registered under the name of a builtin method replaces it.
    #[inline]
    pub fn add_method<F>(&mut self, name: &'engine str, f: F)
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        tracing::debug!(name, "adding method");
        self.methods.insert(name, EngineFn::Method(methods::new(f)));
    }

    /// Add a template to the engine.
    ///
    /// The template will be compiled and stored under the given name.
    ///
    /// When using this function over [`.compile(..)`][Engine::compile] the
    /// template source lifetime needs to be as least as long as the engine
    /// lifetime.
    #[inline]
    pub fn add_template(&mut self, name: &'engine str, source: &'engine str) -> Result<()> {
        let template = compile::template(source)?;
        tracing::debug!(name, "adding template");
        self.templates.insert(name, template);
        Ok(())
    }

    /// Lookup a template by name.
    #[inline]
    pub fn get_template(&self, name: &str) -> Option<TemplateRef<'_>> {
        self.templates.get(name).map(|template| TemplateRef {
            engine: self,
            template,
        })
    }

    /// Compile a template.
    ///
    /// The template will not be stored in the engine. The advantage over
    /// [`.add_template(..)`][Engine::add_template] here is that the lifetime of
    /// the template source does not need to outlive the engine.
    #[inline]
    pub fn compile<'source>(&self, source: &'source str) -> Result<Template<'_, 'source>> {
        let template = compile::template(source)?;
        Ok(Template {
            engine: self,
            template,
        })
    }
}

impl std_fmt::Debug for Engine<'_> {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.debug_struct("Engine")
            .field("methods", &self.methods.keys())
            .field("templates", &self.templates.keys())
            .field("utc_offset", &self.utc_offset)
            .finish_non_exhaustive()
    }
}

impl<'engine, 'source> Template<'engine, 'source> {
    /// Render the template to a string using the provided value.
    #[inline]
    pub fn render<S>(&self, ctx: S) -> Result<String>
    where
        S: serde::Serialize,
    {
        render::template(self.engine, &self.template, &serde_json::to_value(ctx)?)
    }

    /// Render the template to a string using the provided value without
    /// serializing it first.
    #[inline]
    pub fn render_from(&self, ctx: &Value) -> Result<String> {
        render::template(self.engine, &self.template, ctx)
    }

    /// Render the template to a writer using the provided value.
    #[inline]
    pub fn render_to_writer<W, S>(&self, writer: W, ctx: S) -> Result<()>
    where
        W: io::Write,
        S: serde::Serialize,
    {
        render::template_to(self.engine, &self.template, writer, &serde_json::to_value(ctx)?)
    }

    /// Returns the original template source.
    #[inline]
    pub fn source(&self) -> &'source str {
        self.template.source
    }
}

impl std_fmt::Debug for Template<'_, '_> {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.debug_struct("Template")
            .field("engine", &self.engine)
            .field("segments", &self.template.segments)
            .finish()
    }
}

impl<'engine> TemplateRef<'engine> {
    /// Render the template to a string using the provided value.
    #[inline]
    pub fn render<S>(&self, ctx: S) -> Result<String>
    where
        S: serde::Serialize,
    {
        render::template(self.engine, self.template, &serde_json::to_value(ctx)?)
    }

    /// Render the template to a string using the provided value without
    /// serializing it first.
    #[inline]
    pub fn render_from(&self, ctx: &Value) -> Result<String> {
        render::template(self.engine, self.template, ctx)
    }

    /// Render the template to a writer using the provided value.
    #[inline]
    pub fn render_to_writer<W, S>(&self, writer: W, ctx: S) -> Result<()>
    where
        W: io::Write,
        S: serde::Serialize,
    {
        render::template_to(self.engine, self.template, writer, &serde_json::to_value(ctx)?)
    }

    /// Returns the original template source.
    #[inline]
    pub fn source(&self) -> &'engine str {
        self.template.source
    }
}

impl std_fmt::Debug for TemplateRef<'_> {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.debug_struct("TemplateRef")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}
