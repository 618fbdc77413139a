//! Helpers a caller uses to turn a note collection into an `ExportJob`. Filtering happens
//! here, before the engine runs; the engine itself draws whatever it is given.
use chrono::{ DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc };

use crate::types::{ format_date, format_timestamp, Error, ExportJob, Locale, Record };

pub const EXPORT_TITLE: &str = "Notes+";
pub const FULL_EXPORT_FILE_NAME: &str = "notes-plus_full-export.pdf";

/// every record, subtitled with the moment of the export
pub fn full_export(records: Vec<Record>, now: DateTime<Utc>, locale: &Locale) -> ExportJob {
    let subtitle = format!("Full export from: {}", format_timestamp(&now, &locale.date_time_format, locale));

    ExportJob::new(records, EXPORT_TITLE, subtitle)
}

/// Records created between the start of `start` and the end of `end` (inclusive) in the
/// locale's offset. Order is preserved. Fails with `EmptyInputRange` when nothing matches.
pub fn date_range_export(records: Vec<Record>, start: NaiveDate, end: NaiveDate, locale: &Locale) -> Result<ExportJob, Error> {
    let offset = locale.offset();

    let from = offset
        .from_local_datetime(&start.and_time(NaiveTime::MIN))
        .single()
        .ok_or(Error::EmptyInputRange)?;

    // exclusive bound: midnight after the last day
    let until = offset
        .from_local_datetime(&end.and_time(NaiveTime::MIN))
        .single()
        .and_then(|midnight| midnight.checked_add_signed(TimeDelta::days(1)))
        .ok_or(Error::EmptyInputRange)?;

    let selected: Vec<Record> = records
        .into_iter()
        .filter(|record| record.created_at >= from && record.created_at < until)
        .collect();

    if selected.is_empty() {
        log::debug!("no records created between {start} and {end}");
        return Err(Error::EmptyInputRange);
    }

    let subtitle = format!(
        "Export for range: {} to {}",
        format_date(&start, &locale.date_format),
        format_date(&end, &locale.date_format)
    );

    Ok(ExportJob::new(selected, EXPORT_TITLE, subtitle))
}

/// file name suggested to the sink for a range export
pub fn date_range_file_name(start: NaiveDate, end: NaiveDate) -> String {
    format!("notes-plus_export_{start}_to_{end}.pdf")
}
