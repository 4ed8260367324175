//! Timestamp normalization
//!
//! Timestamps are stored as RFC 3339 UTC text with millisecond precision and
//! rendered for display as `DD-MM-YYYY HH:MM:SS`. Reads never fail on a bad
//! stored value: it is kept as [`StoredTimestamp::Invalid`] and rendered as
//! [`INVALID_SENTINEL`].

use chrono::{DateTime, SecondsFormat, Utc};

/// Display rendering, e.g. `14-10-2026 09:30:00`
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Rendered in place of a stored value that does not parse
pub const INVALID_SENTINEL: &str = "(INVALID)";

/// Rendered in place of an absent optional timestamp
pub const NULL_SENTINEL: &str = "(NULL)";

/// A timestamp column as read back from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredTimestamp {
    Valid(DateTime<Utc>),
    /// Raw column text that failed to parse
    Invalid(String),
}

impl StoredTimestamp {
    /// Parse a stored column value
    pub fn parse(raw: &str) -> Self {
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => StoredTimestamp::Valid(dt.with_timezone(&Utc)),
            Err(e) => {
                tracing::warn!(raw = %raw, error = %e, "Stored timestamp failed to parse");
                StoredTimestamp::Invalid(raw.to_string())
            }
        }
    }

    /// Parse a nullable column. NULL and empty text are both absent.
    pub fn parse_optional(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(s) if !s.is_empty() => Some(Self::parse(s)),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            StoredTimestamp::Valid(dt) => Some(dt),
            StoredTimestamp::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, StoredTimestamp::Valid(_))
    }

    /// Display form, or the invalid sentinel
    pub fn display(&self) -> String {
        match self {
            StoredTimestamp::Valid(dt) => dt.format(DISPLAY_FORMAT).to_string(),
            StoredTimestamp::Invalid(_) => INVALID_SENTINEL.to_string(),
        }
    }
}

impl From<DateTime<Utc>> for StoredTimestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        StoredTimestamp::Valid(dt)
    }
}

/// Render an optional timestamp, using the null sentinel when absent
pub fn display_optional(ts: Option<&StoredTimestamp>) -> String {
    ts.map_or_else(|| NULL_SENTINEL.to_string(), StoredTimestamp::display)
}

/// Canonical storage form (`2026-10-14T09:30:00.123Z`)
pub fn to_storage(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current UTC time in storage form
pub fn now_for_storage() -> String {
    to_storage(&Utc::now())
}
