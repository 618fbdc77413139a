use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };

use crate::types::exact_sum;

/// One numeric entry of a note
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub value: f64,
    pub created_at: DateTime<Utc>,
}

/// A titled note, deserialized from the Notes+ JSON shape where the entries live in `content`.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub title: String,
   #[serde(rename = "content", default)]
    pub entries: Vec<Entry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// sum of the entries, recomputed on every call
    pub fn total(&self) -> f64 {
        exact_sum(self.entries.iter().map(|entry| entry.value))
    }
}
