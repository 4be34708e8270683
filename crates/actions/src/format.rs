//! Display formatting for amounts and compact API dates.

use chrono::NaiveDate;
use serde_json::Value;

/// A JSON scalar as the user would read it: strings unquoted, `null` empty.
pub fn plain_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Whole VND amount from a number or a decimal string. Anything unreadable
/// (or missing) counts as zero.
pub fn amount(v: Option<&Value>) -> u64 {
    let raw = match v {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match raw {
        Some(f) if f.is_finite() && f > 0.0 => f.round() as u64,
        _ => 0,
    }
}

/// `2499000` -> `2.499.000`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

pub fn vnd(v: Option<&Value>) -> String {
    format!("{} VNĐ", group_thousands(amount(v)))
}

/// `YYYYMMDD...` -> `YYYY-MM-DD`; `N/A` when missing. Strings that do not
/// start with a valid date are shown as received.
pub fn compact_date(raw: Option<&str>) -> String {
    let Some(s) = raw.filter(|s| !s.is_empty()) else {
        return "N/A".into();
    };
    s.get(..8)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y%m%d").ok())
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| s.to_owned())
}
