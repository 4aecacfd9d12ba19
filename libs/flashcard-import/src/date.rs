//! `createdAt` resolution for the JSON object form.

use crate::config::DatePolicy;
use crate::error::{ImportError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Resolve an optional `createdAt` value to an instant.
///
/// Absent and falsy values (`null`, `""`, `0`, `false`) mean "now". Strings
/// are read as RFC 3339, a zone-less date-time (taken as UTC) or a bare date;
/// numbers are milliseconds since the Unix epoch.
pub fn resolve_created_at(
    value: Option<&Value>,
    now: DateTime<Utc>,
    policy: DatePolicy,
) -> Result<DateTime<Utc>> {
    let value = match value {
        Some(v) if !is_falsy(v) => v,
        _ => return Ok(now),
    };

    if let Some(parsed) = parse_value(value) {
        return Ok(parsed);
    }

    let raw = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    match policy {
        DatePolicy::Strict => Err(ImportError::InvalidDate { value: raw }),
        DatePolicy::Lenient => {
            tracing::warn!("Ignoring unreadable createdAt {:?}, using current time", raw);
            Ok(now)
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn parse_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => {
            let millis = n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))?;
            DateTime::from_timestamp_millis(millis)
        }
        _ => None,
    }
}

/// Parse a date string in one of the accepted layouts.
pub fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
