//! Integration tests for the PDF backend and the export helpers.

use chrono::{ NaiveDate, TimeZone, Utc };
use notes_export::traits::DrawingBackend;
use notes_export::types::selection::{ date_range_export, date_range_file_name, full_export };
use notes_export::types::{
    Document, DocumentBuilder, Entry, Error, ExportJob, LayoutConstants, PdfWriter, Record, Unit,
};

fn note(title: &str, day: u32, count: usize) -> Record {
    let created_at = Utc.with_ymd_and_hms(2024, 6, day, 9, 30, 0).unwrap();

    Record {
        id: format!("{title}-{day}"),
        title: title.to_string(),
        entries: (0..count)
            .map(|i| Entry { value: i as f64 * 2.5, created_at })
            .collect(),
        created_at,
        updated_at: created_at,
    }
}

fn occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|window| *window == needle).count()
}

#[test]
fn page_tree_matches_page_count() {
    let records: Vec<Record> = (1..=28).map(|day| note("Daily", day, 6)).collect();
    let job = ExportJob::new(records, "Notes+", "June");

    let document = Document::render(&job, LayoutConstants::default()).unwrap();
    let bytes = document.as_bytes();

    assert!(document.page_count() > 1);
    assert_eq!(occurrences(bytes, format!("/Count {}", document.page_count()).as_bytes()), 1);
    assert_eq!(occurrences(bytes, b"(Page 1) Tj"), 1);
    assert_eq!(occurrences(bytes, format!("(Page {}) Tj", document.page_count()).as_bytes()), 1);
}

#[test]
fn identical_jobs_give_identical_bytes() {
    let records: Vec<Record> = (1..=10).map(|day| note("Daily", day, day as usize)).collect();
    let job = ExportJob::new(records, "Notes+", "June");

    let first = Document::render(&job, LayoutConstants::default()).unwrap();
    let second = Document::render(&job, LayoutConstants::default()).unwrap();

    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn writer_is_reusable_after_a_job() {
    let mut writer = PdfWriter::new(595.0, 842.0, Unit::Point);
    let layout = LayoutConstants {
        margin: 40.0,
        header_height: 56.0,
        title_line_height: 20.0,
        entry_line_height: 17.0,
        total_line_height: 22.0,
        ..LayoutConstants::default()
    };

    let long = ExportJob::new((1..=20).map(|day| note("Daily", day, 5)).collect(), "Notes+", "");
    let short = ExportJob::new(vec![note("Once", 1, 1)], "Notes+", "");

    let first = DocumentBuilder::new(layout.clone())
        .with_backend(&mut writer)
        .build(&long)
        .unwrap();
    let second = DocumentBuilder::new(layout)
        .with_backend(&mut writer)
        .build(&short)
        .unwrap();

    assert!(first.page_count() > 1);
    assert_eq!(second.page_count(), 1);
    assert_eq!(writer.page_count(), 1);
    assert_eq!(writer.page_width(), 595.0);
}

#[test]
fn saves_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(date_range_file_name(
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
    ));

    let job = date_range_export(
        (1..=5).map(|day| note("Daily", day, 2)).collect(),
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        &LayoutConstants::default().locale,
    )
    .unwrap();
    assert_eq!(job.records.len(), 3);

    let document = Document::render(&job, LayoutConstants::default()).unwrap();
    document.save(&path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, document.into_bytes());
    assert!(path.ends_with("notes-plus_export_2024-06-01_to_2024-06-03.pdf"));
}

#[test]
fn saving_into_a_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let job = full_export(Vec::new(), Utc::now(), &LayoutConstants::default().locale);
    let document = Document::render(&job, LayoutConstants::default()).unwrap();

    let result = document.save(dir.path().join("missing").join("out.pdf"));

    assert!(matches!(result, Err(Error::SaveError(_))));
}

#[test]
fn empty_range_never_reaches_the_engine() {
    let result = date_range_export(
        vec![note("Daily", 10, 1)],
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 7, 31).unwrap(),
        &LayoutConstants::default().locale,
    );

    assert!(matches!(result, Err(Error::EmptyInputRange)));
}

#[test]
fn non_latin_text_does_not_break_the_file() {
    let job = ExportJob::new(vec![note("Café ☕ — budget", 1, 1)], "Notes+", "Zürich");
    let document = Document::render(&job, LayoutConstants::default()).unwrap();

    assert!(occurrences(document.as_bytes(), b"/WinAnsiEncoding") > 0);
}
