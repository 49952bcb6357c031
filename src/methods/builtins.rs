//! Builtin methods.

use chrono::FixedOffset;

use crate::datetime;
use crate::render::{human, to_js_string};
use crate::{Error, Result, Value};

pub(crate) const ALL: &[(&str, super::BuiltinFn)] = &[
    ("trim", trim),
    ("toUpperCase", to_upper_case),
    ("toLowerCase", to_lower_case),
    ("toString", to_string),
    ("toDateTime", to_date_time),
];

fn expect_str<'a>(method: &str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| {
        Error::from(format!(
            "`{method}` expected string, found {}",
            human(value)
        ))
    })
}

/// Removes leading and trailing whitespace.
fn trim(value: &Value, _: FixedOffset) -> Result<Value> {
    Ok(Value::from(expect_str("trim", value)?.trim()))
}

/// Returns the uppercase equivalent of the string.
fn to_upper_case(value: &Value, _: FixedOffset) -> Result<Value> {
    Ok(Value::from(expect_str("toUpperCase", value)?.to_uppercase()))
}

/// Returns the lowercase equivalent of the string.
fn to_lower_case(value: &Value, _: FixedOffset) -> Result<Value> {
    Ok(Value::from(expect_str("toLowerCase", value)?.to_lowercase()))
}

/// Converts any value to a string.
fn to_string(value: &Value, _: FixedOffset) -> Result<Value> {
    Ok(Value::from(to_js_string(value).into_owned()))
}

/// Formats a unix timestamp in seconds as `yyyy-MM-dd hh:mm:ss`.
fn to_date_time(value: &Value, offset: FixedOffset) -> Result<Value> {
    let secs = value.as_f64().ok_or_else(|| {
        Error::from(format!(
            "`toDateTime` expected number, found {}",
            human(value)
        ))
    })?;
    let s = datetime::format_timestamp(secs, datetime::DEFAULT_FORMAT, offset)?;
    Ok(Value::from(s))
}
