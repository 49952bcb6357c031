//! Helpers for talking to the blog's JSON API.
//!
//! Nothing here performs I/O. [`Request`] describes what to send, and
//! [`check_response`] interprets what came back, leaving the transport to the
//! caller.

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, Value};

/// Characters escaped by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// An error reported by the API, or synthesized for a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// A short machine readable error code, e.g. `value:invalid`.
    pub error: String,
    /// Extra data, usually the name of the offending form field.
    #[serde(default)]
    pub data: String,
    /// A human readable message.
    #[serde(default)]
    pub message: String,
}

impl ApiError {
    /// The error for a request that did not get a successful HTTP response.
    pub fn bad_response(status: u16) -> Self {
        Self {
            error: String::from("http_bad_response"),
            data: status.to_string(),
            message: format!("network problem (HTTP {status})"),
        }
    }

    /// The error for a successful response whose body is not what was
    /// expected, `data` names the offending member.
    pub fn invalid_response(data: &str, message: impl Into<String>) -> Self {
        Self {
            error: String::from("response:invalid"),
            data: data.to_owned(),
            message: message.into(),
        }
    }

    /// Returns the form field this error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        (!self.data.is_empty()).then_some(self.data.as_str())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.error)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::api(err.to_string())
    }
}

/// Interpret a JSON response body.
///
/// A body carrying a truthy `error` member is an error, anything else is
/// returned unchanged.
pub fn check_response(body: Value) -> std::result::Result<Value, ApiError> {
    let failed = match body.get("error") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    };
    if !failed {
        return Ok(body);
    }
    let text = |key: &str| match body.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(v) => v.to_string(),
    };
    Err(ApiError {
        error: text("error"),
        data: text("data"),
        message: text("message"),
    })
}

/// The HTTP method of a [`Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A JSON API request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    /// The JSON encoded body for `POST` requests.
    pub body: Option<String>,
}

impl Request {
    /// A `GET` request with the parameters appended as a query string.
    ///
    /// ```
    /// let req = quill::api::Request::get("/api/manage/blog", [("page", "2"), ("q", "a b")]);
    /// assert_eq!(req.url, "/api/manage/blog?page=2&q=a%20b");
    /// ```
    pub fn get<I, K, V>(url: &str, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self {
            method: Method::Get,
            url: format!("{url}?{}", encode_query(params)),
            body: None,
        }
    }

    /// A `POST` request with a JSON body, `None` sends an empty object.
    pub fn post<S>(url: &str, data: Option<&S>) -> Result<Self>
    where
        S: Serialize + ?Sized,
    {
        let body = match data {
            Some(data) => serde_json::to_string(data)?,
            None => String::from("{}"),
        };
        Ok(Self {
            method: Method::Post,
            url: url.to_owned(),
            body: Some(body),
        })
    }

    /// The content type of the request body, if any.
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| "application/json")
    }
}

/// Encode parameters as `k=v` pairs joined by `&`.
///
/// Values are escaped like `encodeURIComponent`, keys are used as is.
pub fn encode_query<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .into_iter()
        .map(|(k, v)| format!("{}={}", k.as_ref(), utf8_percent_encode(v.as_ref(), COMPONENT)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a location search string like `?page=2&q=rust+lang`.
///
/// Returns nothing unless the string starts with `?`. Pairs without a key are
/// skipped. Values are percent decoded and `+` is turned into a space. Later
/// duplicate keys win.
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    let Some(query) = search.strip_prefix('?') else {
        return Vec::new();
    };
    let mut pairs: Vec<(String, String)> = Vec::new();
    for part in query.split('&') {
        let pos = match part.find('=') {
            Some(pos) if pos > 0 => pos,
            _ => continue,
        };
        let key = &part[..pos];
        let value = percent_decode_str(&part[pos + 1..])
            .decode_utf8_lossy()
            .replace('+', " ");
        match pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => pairs.push((key.to_owned(), value)),
        }
    }
    pairs
}

/// Rebuild the search string with `page` set, keeping the other parameters.
///
/// ```
/// assert_eq!(quill::api::page_url("?q=rust&page=1", 3), "?q=rust&page=3");
/// assert_eq!(quill::api::page_url("", 2), "?page=2");
/// ```
pub fn page_url(search: &str, page: u64) -> String {
    let mut pairs = parse_query(search);
    let page = page.to_string();
    match pairs.iter_mut().find(|(k, _)| k == "page") {
        Some(pair) => pair.1 = page,
        None => pairs.push((String::from("page"), page)),
    }
    format!("?{}", encode_query(pairs))
}

/// Append a `t=<millis>` parameter so that the browser does not serve the
/// page from its cache. Any `#fragment` is kept at the end.
///
/// ```
/// assert_eq!(quill::api::cache_bust("/manage?x=1#top", 42), "/manage?x=1&t=42#top");
/// assert_eq!(quill::api::cache_bust("/manage", 42), "/manage?t=42");
/// ```
pub fn cache_bust(url: &str, millis: u64) -> String {
    let (url, hash) = match url.find('#') {
        Some(i) => url.split_at(i),
        None => (url, ""),
    };
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}t={millis}{hash}")
}
