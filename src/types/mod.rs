mod block;
mod color;
mod decorator;
mod doc;
mod error;
mod estimator;
mod flow;
mod font;
mod font_family;
mod font_reference;
mod font_style;
mod format;
mod job;
mod layout;
mod page;
mod record;
mod recorder;
mod text_alignment;
mod writer;

pub mod selection;

pub use block::{ BlockRenderer, EMPTY_NOTE_TEXT };
pub use color::Color;
pub use decorator::Decorator;
pub use doc::{ Document, DocumentBuilder };
pub use error::Error;
pub use estimator::{ estimate_block_height, wrap_text, wrap_title, BlockMetrics };
pub use flow::FlowController;
pub use font::{ Courier, TimesRoman };
pub use font_family::FontFamily;
pub use font_reference::FontReference;
pub use font_style::Style;
pub use format::{ exact_sum, format_date, format_number, format_timestamp };
pub use job::{ sort_records, ExportJob, SortBy };
pub use layout::{ LayoutConstants, Locale };
pub use page::{ Page, PageContent };
pub use record::{ Entry, Record };
pub use recorder::{ count_pages, split_pages, DrawOp, RecordingBackend };
pub use text_alignment::TextAlignment;
pub use writer::{ to_winansi_bytes, PdfWriter, Unit };
