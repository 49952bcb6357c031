//! Evaluates field paths against the render model and converts the result to
//! a string.

use std::borrow::Cow;

use crate::types::template::Step;
use crate::{EngineFn, Engine, Error, Result, Value};

/// Evaluate the path against the model.
///
/// Returns `None` if any step along the path is missing, this is rendered as
/// `undefined`.
pub fn lookup<'a>(
    engine: &Engine<'_>,
    source: &str,
    root: &'a Value,
    path: &[Step],
) -> Result<Option<Cow<'a, Value>>> {
    let mut current = Cow::Borrowed(root);
    for step in path {
        let next = match *step {
            Step::Key(span) => member(current, &source[span]),
            Step::Index(i, _) => index(current, i),
            Step::Call(span) => {
                let value = call(engine, source, &current, step)
                    .map_err(|err| err.enrich(source, span))?;
                Some(Cow::Owned(value))
            }
        };
        match next {
            Some(value) => current = value,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

fn member<'a>(value: Cow<'a, Value>, name: &str) -> Option<Cow<'a, Value>> {
    match value {
        Cow::Borrowed(v) => member_ref(v, name),
        Cow::Owned(v) => member_ref(&v, name).map(|v| Cow::Owned(v.into_owned())),
    }
}

fn member_ref<'a>(value: &'a Value, name: &str) -> Option<Cow<'a, Value>> {
    match value {
        Value::Object(map) => map.get(name).map(Cow::Borrowed),
        Value::String(s) if name == "length" => {
            Some(Cow::Owned(Value::from(s.encode_utf16().count())))
        }
        Value::Array(list) if name == "length" => Some(Cow::Owned(Value::from(list.len()))),
        _ => None,
    }
}

fn index(value: Cow<'_, Value>, i: usize) -> Option<Cow<'_, Value>> {
    match value {
        Cow::Borrowed(v) => index_ref(v, i).map(Cow::Borrowed),
        Cow::Owned(v) => index_ref(&v, i).map(|v| Cow::Owned(v.clone())),
    }
}

fn index_ref(value: &Value, i: usize) -> Option<&Value> {
    match value {
        Value::Array(list) => list.get(i),
        Value::Object(map) => map.get(&i.to_string()),
        _ => None,
    }
}

fn call(engine: &Engine<'_>, source: &str, receiver: &Value, step: &Step) -> Result<Value> {
    let span = step.span();
    let name = &source[span];
    match engine.methods.get(name) {
        Some(EngineFn::Method(f)) => f(receiver),
        #[cfg(feature = "builtins")]
        Some(EngineFn::Builtin(f)) => f(receiver, engine.utc_offset),
        None => Err(Error::render("unknown method", source, span)),
    }
}

/// Convert a value to a string the same way JavaScript's `String(value)`
/// does.
pub fn to_js_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Cow::Owned(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Cow::Owned(u.to_string())
            } else {
                Cow::Owned(js_number(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        Value::String(s) => Cow::Borrowed(s),
        Value::Array(list) => {
            let parts: Vec<_> = list
                .iter()
                .map(|v| match v {
                    Value::Null => Cow::Borrowed(""),
                    v => to_js_string(v),
                })
                .collect();
            Cow::Owned(parts.join(","))
        }
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

fn js_number(f: f64) -> String {
    if f.is_nan() {
        String::from("NaN")
    } else if f == 0.0 {
        String::from("0")
    } else if f.abs() >= 1e21 || f.abs() < 1e-6 {
        // Exponent form, with an explicit sign on positive exponents.
        let s = format!("{f:e}");
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        }
    } else if f.fract() == 0.0 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

pub(crate) fn human(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
