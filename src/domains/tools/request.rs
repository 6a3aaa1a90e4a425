//! Request URL construction.
//!
//! A [`ParameterBag`] is an ordered list of named values. Absent values are
//! kept in the bag so tool code can map every argument unconditionally, and
//! are dropped when the query string is serialized.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Date format the upstream API expects in query strings.
pub const UPSTREAM_DATE_FORMAT: &str = "%Y%m%dT%H%M";

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    /// Written in positional notation (`1e21` becomes `1000000000000000000000`),
    /// whole values without a fractional part (`10.0` becomes `10`).
    Float(f64),
    Bool(bool),
    Date(NaiveDateTime),
    /// Never serialized.
    Absent,
}

impl ParamValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Date(d) => write!(f, "{}", d.format(UPSTREAM_DATE_FORMAT)),
            Self::Absent => Ok(()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDateTime> for ParamValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Ordered name/value pairs forwarded as a query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterBag {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing an existing one with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that will actually be serialized, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries
            .iter()
            .filter(|(_, v)| !v.is_absent())
            .map(|(n, v)| (n.as_str(), v))
    }

    /// Serialize the present entries as `application/x-www-form-urlencoded`.
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<(&str, String)> = self.present().map(|(n, v)| (n, v.to_string())).collect();
        // A sequence of string pairs is always representable.
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }
}

/// Build `endpoint?query`, dropping absent parameters.
///
/// The `?` is always appended, even when no parameter survives filtering.
pub fn build_request_url(endpoint: &str, parameters: &ParameterBag) -> String {
    format!("{}?{}", endpoint, parameters.to_query_string())
}

/// Parse a caller-supplied date.
///
/// Accepts `YYYYMMDD`, `YYYY-MM-DD`, `YYYYMMDDTHHMM` and `YYYY-MM-DD HH:MM`.
/// Date-only inputs resolve to midnight.
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    for format in [UPSTREAM_DATE_FORMAT, "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }
    for format in ["%Y%m%d", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Serde adapter for optional date arguments.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_date(&s).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid date '{}' (expected YYYYMMDD, YYYY-MM-DD, YYYYMMDDTHHMM or YYYY-MM-DD HH:MM)",
                s
            ))
        }),
    }
}
