//! Backup snapshot export and import

use crate::domain::{Entry, IdGenerator, RawEntry};
use crate::error::{DiscshelfError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Exported backup document: `{"version":1,"exportedAt":...,"entries":[...]}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub entries: &'a [Entry],
}

impl<'a> Snapshot<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        Snapshot {
            version: SNAPSHOT_VERSION,
            exported_at: Utc::now(),
            entries,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// How an import combines with the current collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Discard the current collection (default)
    Replace,
    /// Prepend imported entries ahead of the current ones
    Merge,
}

/// Parse an import payload into normalized entries.
///
/// Accepts a bare array or an object carrying an `entries` or `items`
/// array (the two backup dialects in the wild). Anything else, or an
/// empty array, is an [`DiscshelfError::ImportFormat`] error.
pub fn parse_import(text: &str, ids: &mut dyn IdGenerator) -> Result<Vec<Entry>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| DiscshelfError::ImportFormat(format!("not valid JSON: {}", e)))?;

    let records = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("entries").or_else(|| map.remove("items")) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(DiscshelfError::ImportFormat(
                    "\"entries\" is not an array".to_string(),
                ))
            }
            None => {
                return Err(DiscshelfError::ImportFormat(
                    "no \"entries\" or \"items\" array".to_string(),
                ))
            }
        },
        _ => {
            return Err(DiscshelfError::ImportFormat(
                "top-level value is neither an array nor an object".to_string(),
            ))
        }
    };

    if records.is_empty() {
        return Err(DiscshelfError::ImportFormat(
            "the entry array is empty".to_string(),
        ));
    }

    let now = Utc::now();
    records
        .into_iter()
        .map(|record| {
            let raw: RawEntry = serde_json::from_value(record)
                .map_err(|e| DiscshelfError::ImportFormat(format!("bad entry record: {}", e)))?;
            Ok(raw.normalize(ids, now))
        })
        .collect()
}
