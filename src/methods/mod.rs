//! Methods that can be called at the end of a path step, e.g. `{name.trim()}`.
//!
//! A method receives the value that the path evaluated to so far and returns
//! a new value. Methods take no arguments. Custom methods are registered
//! using [`Engine::add_method`][crate::Engine::add_method], a custom method
//! replaces a builtin method of the same name.
//!
//! # Builtins
//!
//! If the `builtins` feature is enabled the following methods are registered
//! by [`Engine::new`][crate::Engine::new].
//!
//! | Method          | Receiver | Result                                        |
//! | --------------- | -------- | --------------------------------------------- |
//! | `trim()`        | string   | the string without surrounding whitespace     |
//! | `toUpperCase()` | string   | the uppercase string                          |
//! | `toLowerCase()` | string   | the lowercase string                          |
//! | `toString()`    | any      | the value converted with [`to_js_string`]     |
//! | `toDateTime()`  | number   | unix seconds formatted as `yyyy-MM-dd hh:mm:ss` |
//!
//! [`to_js_string`]: crate::to_js_string
//!
//! # Examples
//!
//! ```
//! use quill::{Engine, Value};
//!
//! let mut engine = Engine::new();
//! engine.add_method("excerpt", |v: &Value| {
//!     let s = v.as_str().ok_or("expected string")?;
//!     Ok(Value::from(s.chars().take(5).collect::<String>()))
//! });
//!
//! let result = engine
//!     .compile("{content.excerpt()}...")?
//!     .render(serde_json::json!({ "content": "Lorem ipsum dolor" }))?;
//! assert_eq!(result, "Lorem...");
//! # Ok::<(), quill::Error>(())
//! ```

#[cfg(feature = "builtins")]
pub(crate) mod builtins;

use crate::{Result, Value};

/// A method function or closure.
pub(crate) type MethodFn = dyn Fn(&Value) -> Result<Value> + Send + Sync + 'static;

/// A builtin method, these also receive the engine's UTC offset.
#[cfg(feature = "builtins")]
pub(crate) type BuiltinFn = fn(&Value, chrono::FixedOffset) -> Result<Value>;

pub(crate) fn new<F>(f: F) -> Box<MethodFn>
where
    F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
{
    Box::new(f)
}
