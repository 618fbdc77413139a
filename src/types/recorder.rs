use serde::{ Deserialize, Serialize };

use crate::{
    traits::DrawingBackend,
    types::{ wrap_text, Color, Error, FontFamily, Style, TextAlignment }
};

/// One call made against a `RecordingBackend`.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    SetFont { family: FontFamily, style: Style },
    SetFontSize { size: f32 },
    SetTextColor { color: Color },
    SetFillColor { color: Color },
    SetDrawColor { color: Color },
    Text { text: String, x: f32, y: f32, alignment: TextAlignment },
    RoundedRect { x: f32, y: f32, width: f32, height: f32, radius: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    NewPage,
}

/// A backend that draws nothing and remembers every call.
///
/// Text is measured with the same font metrics as `PdfWriter`, so layouts match. `finalize`
/// returns the recorded operations as a JSON array, which `RecordingBackend::decode` reads
/// back from a sealed `Document`.
#[derive(Debug,Clone)]
pub struct RecordingBackend {
    ops: Vec<DrawOp>,
    page_width: f32,
    page_height: f32,
    /// points per user unit
    scale: f32,
    font_family: FontFamily,
    font_style: Style,
    font_size: f32,
}

/// A4 in millimetres, like `PdfWriter::default()`
impl Default for RecordingBackend {
    fn default() -> Self {
        RecordingBackend::new(210.0, 297.0, 72.0 / 25.4)
    }
}

impl RecordingBackend {
    pub fn new(page_width: f32, page_height: f32, scale: f32) -> Self {
        RecordingBackend {
            ops: Vec::new(),
            page_width,
            page_height,
            scale,
            font_family: FontFamily::Times,
            font_style: Style::Normal,
            font_size: 12.0,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn page_count(&self) -> usize {
        count_pages(&self.ops)
    }

    /// reads the operations back out of a finalized byte stream
    pub fn decode(bytes: &[u8]) -> Result<Vec<DrawOp>, Error> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

pub fn count_pages(ops: &[DrawOp]) -> usize {
    1 + ops.iter().filter(|op| matches!(op, DrawOp::NewPage)).count()
}

/// splits recorded operations at every page break
pub fn split_pages(ops: &[DrawOp]) -> Vec<&[DrawOp]> {
    ops.split(|op| matches!(op, DrawOp::NewPage)).collect()
}

impl DrawingBackend for RecordingBackend {
    fn set_font(&mut self, family: FontFamily, style: Style) {
        self.font_family = family;
        self.font_style = style;
        self.ops.push(DrawOp::SetFont { family, style });
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
        self.ops.push(DrawOp::SetFontSize { size });
    }

    fn set_text_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetTextColor { color });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetFillColor { color });
    }

    fn set_draw_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetDrawColor { color });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, alignment: TextAlignment) {
        self.ops.push(DrawOp::Text { text: text.to_string(), x, y, alignment });
    }

    fn draw_filled_rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32) {
        self.ops.push(DrawOp::RoundedRect { x, y, width, height, radius });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(DrawOp::Line { x1, y1, x2, y2 });
    }

    fn measure_wrapped_text(&self, text: &str, max_width: f32) -> Vec<String> {
        let metrics = self.font_family.metrics();

        wrap_text(text, max_width, |line| {
            metrics.text_width(line, self.font_style, self.font_size) / self.scale
        })
    }

    fn new_page(&mut self) {
        self.ops.push(DrawOp::NewPage);
    }

    fn page_width(&self) -> f32 {
        self.page_width
    }

    fn page_height(&self) -> f32 {
        self.page_height
    }

    fn reset(&mut self) {
        self.ops.clear();
    }

    fn finalize(&mut self) -> Result<Vec<u8>, Error> {
        let bytes = serde_json::to_vec(&self.ops)?;
        self.ops.clear();
        Ok(bytes)
    }
}
