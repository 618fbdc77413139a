use pdf_writer::{ Chunk, Content, Name, Pdf, Rect, Ref, Str };

use crate::{
    traits::DrawingBackend,
    types::{
        wrap_text,
        Color,
        Error,
        FontFamily,
        FontReference,
        Page,
        Style,
        TextAlignment
}};

/// A4 in millimetres
const A4_WIDTH: f32 = 210.0;
const A4_HEIGHT: f32 = 297.0;
/// stroke width of `draw_line` in user units
const LINE_WIDTH: f32 = 0.2;
/// control point distance approximating a quarter circle with a cubic Bézier
const KAPPA: f32 = 0.552_284_8;

/// user unit of every coordinate handed to the writer
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum Unit {
   #[default]
    Millimetre,
    Point,
}

impl Unit {
    /// points per user unit
    pub fn scale(&self) -> f32 {
        match self {
            Unit::Millimetre => 72.0 / 25.4,
            Unit::Point => 1.0,
        }
    }
}

/// The PDF rendering backend.
///
/// Draws into one `Content` stream per page with the standard Type1 fonts (WinAnsi
/// encoded), converting the top-left user coordinates of `DrawingBackend` into PDF space.
/// Contains
/// - ref allocator
/// - font references
/// - finished pages and the page being drawn
/// - current graphics state (font, size, colours)
pub struct PdfWriter {
    alloc: Ref,
    page_tree_id: Ref,
    font_refs: Vec<FontReference>,
    pages: Vec<Page>,
    current: Page,
    unit: Unit,
    page_width: f32,
    page_height: f32,
    font_family: FontFamily,
    font_style: Style,
    font_size: f32,
    text_color: Color,
    fill_color: Color,
    draw_color: Color,
}

/// A4 portrait measured in millimetres, Times at 12pt, black ink
impl Default for PdfWriter {
    fn default() -> Self {
        PdfWriter::new(A4_WIDTH, A4_HEIGHT, Unit::Millimetre)
    }
}

impl PdfWriter {
    /// a blank single-page canvas of the given size in `unit`s
    pub fn new(page_width: f32, page_height: f32, unit: Unit) -> Self {
        let mut alloc = Ref::new(1);
        let page_tree_id = alloc.bump();

        let mut font_refs = Vec::with_capacity(FontFamily::ALL.len() * 4);
        for family in FontFamily::ALL {
            for style in [Style::Normal, Style::Bold, Style::Italic, Style::BoldItalic] {
                font_refs.push(FontReference::new(alloc.bump(), family, style));
            }
        }

        let first_page_ref = alloc.bump();
        let first_content_ref = alloc.bump();

        PdfWriter {
            alloc,
            page_tree_id,
            font_refs,
            pages: Vec::with_capacity(1),
            current: Page::new(first_page_ref, first_content_ref),
            unit,
            page_width,
            page_height,
            font_family: FontFamily::Times,
            font_style: Style::Normal,
            font_size: 12.0,
            text_color: Color::BLACK,
            fill_color: Color::BLACK,
            draw_color: Color::BLACK,
        }
    }

    /// pages drawn so far, including the one in progress
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// get a new reference for indirect object
    fn bump(&mut self) -> Ref {
        self.alloc.bump()
    }

    fn content(&mut self) -> &mut Content {
        &mut self.current.content.content
    }

    /// converts a user x coordinate to PDF points
    fn pdf_x(&self, x: f32) -> f32 {
        x * self.unit.scale()
    }

    /// converts a top-down user y coordinate to bottom-up PDF points
    fn pdf_y(&self, y: f32) -> f32 {
        (self.page_height - y) * self.unit.scale()
    }

    /// width of `text` in user units with the current font
    fn text_width(&self, text: &str) -> f32 {
        self.font_family.metrics().text_width(text, self.font_style, self.font_size) / self.unit.scale()
    }

    fn current_font(&self) -> Option<&FontReference> {
        self.font_refs
            .iter()
            .find(|font| font.family == self.font_family && font.style == self.font_style)
    }

    /// consumes the canvas and writes the complete PDF file
    fn assemble(mut self) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let mut secondary = Chunk::new();
        let catalog_id = self.bump();

        let media_box = Rect::new(
            0.0,
            0.0,
            self.page_width * self.unit.scale(),
            self.page_height * self.unit.scale()
        );

        for ref_obj in self.font_refs.iter() {
            pdf.type1_font(ref_obj.id)
                .base_font(ref_obj.name)
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let PdfWriter { mut pages, current, font_refs, page_tree_id, .. } = self;
        pages.push(current);

        let page_ids: Vec<Ref> = pages.iter().map(|page| page.page_id).collect();

        for page in pages {
            let mut pdf_page = pdf.page(page.page_id);

            pdf_page.media_box(media_box);
            pdf_page.parent(page_tree_id);
            pdf_page.contents(page.content.content_id);

            let mut resources = pdf_page.resources();
            let mut fonts = resources.fonts();

            for ref_obj in font_refs.iter() {
                fonts.pair(ref_obj.resource_name(), ref_obj.id);
            }

            secondary.stream(page.content.content_id, &page.content.content.finish());
        }

        pdf.extend(&secondary);

        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        pdf.catalog(catalog_id).pages(page_tree_id);

        pdf.finish()
    }
}

/// Maps text onto WinAnsiEncoding bytes; characters outside it become `?`.
pub fn to_winansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => ch as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}

impl DrawingBackend for PdfWriter {
    fn set_font(&mut self, family: FontFamily, style: Style) {
        self.font_family = family;
        self.font_style = style;
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, alignment: TextAlignment) {
        if text.is_empty() {
            return;
        }

        let font_name = match self.current_font() {
            Some(font) => font.resource_name(),
            None => return,
        };

        let start = alignment.start_x(x, self.text_width(text));
        let (px, py) = (self.pdf_x(start), self.pdf_y(y));
        let (r, g, b) = self.text_color.to_unit_rgb();
        let font_size = self.font_size;
        let bytes = to_winansi_bytes(text);

        self.content()
            .save_state()
            .set_fill_rgb(r, g, b)
            .begin_text()
            .set_font(font_name, font_size)
            .next_line(px, py)
            .show(Str(&bytes))
            .end_text()
            .restore_state();
    }

    fn draw_filled_rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let x0 = self.pdf_x(x);
        let x1 = self.pdf_x(x + width);
        let top = self.pdf_y(y);
        let bottom = self.pdf_y(y + height);
        let r = radius.max(0.0).min(width / 2.0).min(height / 2.0) * self.unit.scale();
        let c = r * KAPPA;
        let (red, green, blue) = self.fill_color.to_unit_rgb();

        self.content()
            .save_state()
            .set_fill_rgb(red, green, blue)
            .move_to(x0 + r, bottom)
            .line_to(x1 - r, bottom)
            .cubic_to(x1 - r + c, bottom, x1, bottom + r - c, x1, bottom + r)
            .line_to(x1, top - r)
            .cubic_to(x1, top - r + c, x1 - r + c, top, x1 - r, top)
            .line_to(x0 + r, top)
            .cubic_to(x0 + r - c, top, x0, top - r + c, x0, top - r)
            .line_to(x0, bottom + r)
            .cubic_to(x0, bottom + r - c, x0 + r - c, bottom, x0 + r, bottom)
            .close_path()
            .fill_nonzero()
            .restore_state();
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let (r, g, b) = self.draw_color.to_unit_rgb();
        let line_width = LINE_WIDTH * self.unit.scale();
        let start = (self.pdf_x(x1), self.pdf_y(y1));
        let end = (self.pdf_x(x2), self.pdf_y(y2));

        self.content()
            .save_state()
            .set_stroke_rgb(r, g, b)
            .set_line_width(line_width)
            .move_to(start.0, start.1)
            .line_to(end.0, end.1)
            .stroke()
            .restore_state();
    }

    fn measure_wrapped_text(&self, text: &str, max_width: f32) -> Vec<String> {
        wrap_text(text, max_width, |line| self.text_width(line))
    }

    fn new_page(&mut self) {
        let page = Page::new(self.bump(), self.bump());
        let finished = std::mem::replace(&mut self.current, page);
        self.pages.push(finished);
    }

    fn page_width(&self) -> f32 {
        self.page_width
    }

    fn page_height(&self) -> f32 {
        self.page_height
    }

    fn reset(&mut self) {
        *self = PdfWriter::new(self.page_width, self.page_height, self.unit);
    }

    fn finalize(&mut self) -> Result<Vec<u8>, Error> {
        let blank = PdfWriter::new(self.page_width, self.page_height, self.unit);
        let drawn = std::mem::replace(self, blank);

        Ok(drawn.assemble())
    }
}
