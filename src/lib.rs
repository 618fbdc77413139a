//! # Introduction
//!
//! Notes Export turns the notes of the Notes+ app (titled notes holding timestamped numbers)
//! into a paginated, printable PDF. Every page carries a centred title/subtitle banner and a
//! "Page N" footer; each note becomes a card with its title, creation date, one line per
//! number and the note's total. Built on top of pdf_writer (Typst), this is a no frills crate:
//! layout is decided up front from font metrics, so the same notes always produce the same
//! pages.
//!
//! Feature Road Map:
//! - [X] Times and Courier font families (normal,bold,italic,bold-italic)
//! - [X] Title wrapping, with hard breaks inside overlong words
//! - [X] Page breaks that never split a card's title from its first number
//! - [X] Locale aware number grouping and timestamps
//! - [X] Full and date-range exports
//! - [ ] Embedded TrueType fonts
//! - [ ] Images
//!
//! ## Links
//! PDF Writer:
//!
//! - <https://github.com/typst/pdf-writer>
//!
//! # Basic Usage
//! Build an `ExportJob` from the notes (in the order they should print), then hand it to a
//! `DocumentBuilder` together with a drawing backend. `PdfWriter` is the PDF backend;
//! `RecordingBackend` records draw calls for tests.
//!
//! ### Simple render
//! ```
//! use notes_export::types::{Document, ExportJob, LayoutConstants};
//!
//! let json = r#"{
//!     "title": "Notes+",
//!     "subtitle": "Full export",
//!     "records": [{
//!         "id": "1",
//!         "title": "Groceries",
//!         "content": [{"value": 12.5, "createdAt": "2024-03-05T14:07:09Z"}],
//!         "createdAt": "2024-03-05T14:00:00Z",
//!         "updatedAt": "2024-03-05T14:07:09Z"
//!     }]
//! }"#;
//!
//! let job = ExportJob::from_json(json).unwrap();
//! let document = Document::render(&job, LayoutConstants::default()).unwrap();
//!
//! assert!(document.as_bytes().starts_with(b"%PDF"));
//! // ...and write the pdf to output destination with `document.save(path)`
//! ```
pub mod traits;
pub mod types;
