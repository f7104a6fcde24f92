//! TTL Module
//!
//! Normalizes the accepted time-to-live shapes into whole seconds.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use crate::error::{CacheError, Result};

// == TTL Input ==
/// Time-to-live as supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ttl {
    /// No explicit TTL; the caller decides the default behavior
    #[default]
    Unset,
    /// Already expressed in seconds
    Seconds(i64),
    /// Absolute point in time
    At(DateTime<Utc>),
    /// Duration relative to now
    After(Duration),
}

// == Resolve ==
/// Resolves a TTL into seconds from now.
///
/// Times in the past yield negative values; they are not clamped.
pub fn resolve(ttl: &Ttl) -> Option<i64> {
    let now = Utc::now();
    match ttl {
        Ttl::Unset => None,
        Ttl::Seconds(seconds) => Some(*seconds),
        Ttl::At(at) => Some(at.timestamp() - now.timestamp()),
        Ttl::After(duration) => Some(duration.num_seconds()),
    }
}

impl Ttl {
    /// Resolves this TTL into seconds from now.
    pub fn resolve(&self) -> Option<i64> {
        resolve(self)
    }

    // == Parse ==
    /// Parses a textual TTL.
    ///
    /// Accepts an empty string or `none`, a signed number of seconds, an
    /// RFC 3339 timestamp, or a number suffixed with `s`, `m`, `h` or `d`.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
            return Ok(Ttl::Unset);
        }

        if let Ok(seconds) = raw.parse::<i64>() {
            return Ok(Ttl::Seconds(seconds));
        }

        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Ttl::At(at.with_timezone(&Utc)));
        }

        let unit_start = raw.char_indices().last().map_or(0, |(index, _)| index);
        let (amount, unit) = raw.split_at(unit_start);
        let amount: i64 = amount.parse().map_err(|_| unsupported_string(raw))?;
        let duration = match unit {
            "s" => Duration::try_seconds(amount),
            "m" => Duration::try_minutes(amount),
            "h" => Duration::try_hours(amount),
            "d" => Duration::try_days(amount),
            _ => None,
        };

        duration.map(Ttl::After).ok_or_else(|| unsupported_string(raw))
    }
}

fn unsupported_string(raw: &str) -> CacheError {
    CacheError::InvalidArgument(format!(
        "TTL MUST be none, a number of seconds, an RFC 3339 time or a duration like '30s'. '{}' given",
        raw
    ))
}

// == JSON Conversion ==
impl TryFrom<&Value> for Ttl {
    type Error = CacheError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Ttl::Unset),
            Value::Number(number) => number.as_i64().map(Ttl::Seconds).ok_or_else(|| {
                CacheError::InvalidArgument(format!(
                    "TTL MUST be an integer number of seconds. '{}' given",
                    number
                ))
            }),
            Value::String(raw) => Ttl::parse(raw),
            other => Err(CacheError::InvalidArgument(format!(
                "TTL MUST be null, an integer, a time or a duration. '{}' given",
                json_type_name(other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ttl::Unset => write!(f, "unset"),
            Ttl::Seconds(seconds) => write!(f, "{}s", seconds),
            Ttl::At(at) => write!(f, "{}", at.to_rfc3339()),
            Ttl::After(duration) => write!(f, "+{}s", duration.num_seconds()),
        }
    }
}
