//! Formatting of unix timestamps for display in blog pages.
//!
//! Timestamps are converted to wall clock time using an explicit UTC offset,
//! [`Engine::set_utc_offset`][crate::Engine::set_utc_offset] configures the
//! offset used by the `toDateTime()` template method.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

use crate::{Error, Result};

/// The format used when none is given, e.g. `2024-03-05 09:07:02`.
pub const DEFAULT_FORMAT: &str = "yyyy-MM-dd hh:mm:ss";

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;
const WEEK_MS: i64 = 604_800_000;

/// Format a unix timestamp given in seconds.
///
/// The format string is split into runs of ASCII letters. A run that is one
/// of the following tokens is replaced, everything else is kept verbatim.
///
/// | Token  | Output                       |
/// |--------|------------------------------|
/// | `yyyy` | Full year                    |
/// | `yy`   | Year modulo 100              |
/// | `MM`   | Month, zero padded (`01`)    |
/// | `M`    | Month (`1`)                  |
/// | `dd`   | Day of month, zero padded    |
/// | `d`    | Day of month                 |
/// | `hh`   | Hour (24h), zero padded      |
/// | `h`    | Hour (24h)                   |
/// | `mm`   | Minute, zero padded          |
/// | `m`    | Minute                       |
/// | `ss`   | Second, zero padded          |
/// | `s`    | Second                       |
/// | `a`    | `AM` or `PM`                 |
///
/// Note that a run is matched as a whole, `yyyyMMdd` is not a token.
///
/// # Examples
///
/// ```
/// use chrono::{Offset, Utc};
///
/// let s = quill::datetime::format_timestamp(1_709_629_622.0, "yyyy/MM/dd hh:mm a", Utc.fix())?;
/// assert_eq!(s, "2024/03/05 09:07 AM");
/// # Ok::<(), quill::Error>(())
/// ```
pub fn format_timestamp(secs: f64, fmt: &str, offset: FixedOffset) -> Result<String> {
    let dt = from_millis((secs * 1000.0) as i64, offset)?;
    let mut out = String::with_capacity(fmt.len());
    for (is_word, part) in split_words(fmt) {
        match is_word.then(|| token(&dt, part)).flatten() {
            Some(s) => out.push_str(&s),
            None => out.push_str(part),
        }
    }
    Ok(out)
}

/// Format a unix timestamp in seconds as `Y-M-D H:M` without any padding,
/// e.g. `2024-3-5 9:7`.
pub fn short_datetime(secs: f64, offset: FixedOffset) -> Result<String> {
    format_timestamp(secs, "yyyy-M-d h:m", offset)
}

/// Describe a millisecond timestamp relative to `now_ms`.
///
/// Anything within the last minute is `1分钟前`, then minutes, hours and
/// days ago are counted. Timestamps older than a week are printed as a date
/// like `3月5日9:07`, prefixed with the year if it differs from the current
/// one.
pub fn smart_date(timestamp_ms: i64, now_ms: i64, offset: FixedOffset) -> Result<String> {
    let t = now_ms.saturating_sub(timestamp_ms);
    let s = if t > WEEK_MS {
        let that = from_millis(timestamp_ms, offset)?;
        let today = from_millis(now_ms, offset)?;
        let mut s = String::new();
        if that.year() != today.year() {
            s.push_str(&format!("{}年", that.year()));
        }
        s.push_str(&format!(
            "{}月{}日{}:{:02}",
            that.month(),
            that.day(),
            that.hour(),
            that.minute()
        ));
        s
    } else if t >= DAY_MS {
        format!("{}天前", t / DAY_MS)
    } else if t >= HOUR_MS {
        format!("{}小时前", t / HOUR_MS)
    } else if t >= MINUTE_MS {
        format!("{}分钟前", t / MINUTE_MS)
    } else {
        String::from("1分钟前")
    };
    Ok(s)
}

fn from_millis(ms: i64, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.with_timezone(&offset))
        .ok_or_else(|| Error::invalid_argument(format!("timestamp {ms}ms is out of range")))
}

fn token(dt: &DateTime<FixedOffset>, token: &str) -> Option<String> {
    let s = match token {
        "yyyy" => dt.year().to_string(),
        "yy" => (dt.year() % 100).to_string(),
        "MM" => format!("{:02}", dt.month()),
        "M" => dt.month().to_string(),
        "dd" => format!("{:02}", dt.day()),
        "d" => dt.day().to_string(),
        "hh" => format!("{:02}", dt.hour()),
        "h" => dt.hour().to_string(),
        "mm" => format!("{:02}", dt.minute()),
        "m" => dt.minute().to_string(),
        "ss" => format!("{:02}", dt.second()),
        "s" => dt.second().to_string(),
        "a" => String::from(if dt.hour() < 12 { "AM" } else { "PM" }),
        _ => return None,
    };
    Some(s)
}

/// Split into alternating runs of ASCII letters and everything else.
fn split_words(s: &str) -> impl Iterator<Item = (bool, &str)> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_word = first.is_ascii_alphabetic();
        let end = rest
            .find(|c: char| c.is_ascii_alphabetic() != is_word)
            .unwrap_or(rest.len());
        let (part, tail) = rest.split_at(end);
        rest = tail;
        Some((is_word, part))
    })
}
