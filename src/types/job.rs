use std::cmp::Ordering;

use serde::{ Deserialize, Serialize };

use crate::types::{ Error, Record };

/// The engine's single input: records in the order they are drawn, plus the banner text
/// repeated at the top of every page.
#[derive(Debug,Clone,PartialEq,Default,Serialize,Deserialize)]
pub struct ExportJob {
    pub records: Vec<Record>,
   #[serde(rename = "title")]
    pub title_text: String,
   #[serde(rename = "subtitle")]
    pub subtitle_text: String,
}

impl ExportJob {
    pub fn new(records: Vec<Record>, title_text: impl Into<String>, subtitle_text: impl Into<String>) -> Self {
        ExportJob {
            records,
            title_text: title_text.into(),
            subtitle_text: subtitle_text.into(),
        }
    }

    /// `{"title": .., "subtitle": .., "records": [..]}`
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Note list orderings offered by the settings screen.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// newest first
   #[default]
    CreatedAt,
    /// most recently edited first
    UpdatedAt,
    /// alphabetical, ignoring case
    Title,
}

/// Orders records for display before they are handed to a job. The sort is stable, so
/// records comparing equal keep their relative order.
pub fn sort_records(records: &mut [Record], sort_by: SortBy) {
    match sort_by {
        SortBy::CreatedAt => records.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::UpdatedAt => records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortBy::Title => records.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());

    match folded {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: &str, title: &str, created_day: u32, updated_day: u32) -> Record {
        Record {
            id: id.into(),
            title: title.into(),
            entries: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, created_day, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, updated_day, 0, 0, 0).unwrap(),
        }
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn sorts_each_way() {
        let mut records = vec![
            record("a", "beta", 1, 9),
            record("b", "Alpha", 3, 2),
            record("c", "alpha", 2, 5),
        ];

        sort_records(&mut records, SortBy::CreatedAt);
        assert_eq!(ids(&records), ["b", "c", "a"]);

        sort_records(&mut records, SortBy::UpdatedAt);
        assert_eq!(ids(&records), ["a", "c", "b"]);

        sort_records(&mut records, SortBy::Title);
        assert_eq!(ids(&records), ["b", "c", "a"]);
    }

    #[test]
    fn job_from_json() {
        let job = ExportJob::from_json(r#"{"title": "Notes+", "subtitle": "all", "records": []}"#).unwrap();

        assert_eq!(job.title_text, "Notes+");
        assert_eq!(job.subtitle_text, "all");
        assert!(job.records.is_empty());
    }
}
