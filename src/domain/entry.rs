//! Entry model and normalization

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Source of opaque unique ids for new entries.
///
/// Injectable so tests can use a deterministic sequence instead of UUIDs.
pub trait IdGenerator {
    fn generate(&mut self) -> String;
}

/// Default id source producing random UUID v4 strings
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// One tracked disc purchase record
///
/// Serializes to the camelCase JSON object shape used by the collection
/// file and backup snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Opaque unique id, immutable after creation
    pub id: String,
    /// Non-empty after trimming
    pub title: String,
    /// Free text; conventional values are "Blu-ray", "DVD", "4K UHD", ...
    pub media_type: String,
    /// `YYYY-MM-DD`, or empty when unknown
    pub purchase_date: String,
    pub memo: String,
    /// Set at creation, never changed
    pub created_at: DateTime<Utc>,
    /// Stamped on every edit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// The date an entry sorts by chronologically.
    ///
    /// The purchase date wins when set and parseable; an empty purchase
    /// date falls back to the creation timestamp; a non-empty but
    /// malformed purchase date sorts as the Unix epoch.
    pub fn effective_date(&self) -> DateTime<Utc> {
        if self.purchase_date.is_empty() {
            return self.created_at;
        }
        parse_calendar_date(&self.purchase_date).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// Parse a `YYYY-MM-DD` string as midnight UTC
pub fn parse_calendar_date(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// An entry as found on disk or in an import file, before normalization.
///
/// Every field is tolerated missing or of the wrong JSON type; older
/// records used `media` instead of `mediaType` and had no `createdAt`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, alias = "media", deserialize_with = "lenient_string")]
    pub media_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub purchase_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub memo: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl RawEntry {
    /// Produce a well-formed entry: assign an id when missing and
    /// back-fill `createdAt` from the purchase date (or `now`) so that
    /// records from older formats stay sortable.
    pub fn normalize(self, ids: &mut dyn IdGenerator, now: DateTime<Utc>) -> Entry {
        let purchase_date = self.purchase_date.trim().to_string();

        let created_at = self
            .created_at
            .as_deref()
            .and_then(parse_timestamp)
            .or_else(|| parse_calendar_date(&purchase_date))
            .unwrap_or(now);

        let id = if self.id.trim().is_empty() {
            ids.generate()
        } else {
            self.id
        };

        Entry {
            id,
            title: self.title.trim().to_string(),
            media_type: self.media_type.trim().to_string(),
            purchase_date,
            memo: self.memo.trim().to_string(),
            created_at,
            updated_at: self.updated_at.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Coerce scalar JSON values to strings; null and non-scalars become empty
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
pub mod testing {
    use super::IdGenerator;

    /// Deterministic id source: id-1, id-2, ...
    #[derive(Debug, Default)]
    pub struct SequentialIds(u32);

    impl IdGenerator for SequentialIds {
        fn generate(&mut self) -> String {
            self.0 += 1;
            format!("id-{}", self.0)
        }
    }
}
