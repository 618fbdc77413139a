use crate::{
    traits::DrawingBackend,
    types::{
        format_number,
        format_timestamp,
        BlockMetrics,
        Color,
        FlowController,
        LayoutConstants,
        Record,
        Style,
        TextAlignment
}};

const CARD_COLOR: Color = Color::Gray(245);
const DIVIDER_COLOR: Color = Color::Gray(220);
const DATE_COLOR: Color = Color::Gray(120);
const ENTRY_COLOR: Color = Color::Gray(50);
const PLACEHOLDER_COLOR: Color = Color::Gray(150);

pub const EMPTY_NOTE_TEXT: &str = "No numbers in this note.";

/// Draws one record's card at the flow controller's cursor.
pub struct BlockRenderer<'a> {
    layout: &'a LayoutConstants,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(layout: &'a LayoutConstants) -> Self {
        BlockRenderer { layout }
    }

    /// Draws title, creation date, divider, rows and total, advancing the cursor by exactly
    /// `metrics.height()` unless a row had to move to a following page.
    ///
    /// The caller has already admitted the block as a whole; each row is admitted again on
    /// its own so an oversized block continues on the next page below a fresh banner.
    pub fn draw(&self, backend: &mut dyn DrawingBackend, flow: &mut FlowController, record: &Record, metrics: &BlockMetrics) {
        let layout = self.layout;
        let text_x = layout.margin + layout.card_padding;

        self.draw_card(backend, flow, metrics.head_height() + metrics.remaining_body_height(0));
        flow.mark_content();

        // title
        let top = flow.cursor_y();
        backend.set_font(layout.font_family, Style::Bold);
        backend.set_font_size(layout.title_size);
        backend.set_text_color(Color::BLACK);

        for (index, line) in metrics.title_lines.iter().enumerate() {
            let baseline = top + layout.title_baseline + index as f32 * metrics.title_line_height;
            backend.draw_text(line, text_x, baseline, TextAlignment::Left);
        }
        flow.advance(metrics.title_lines.len() as f32 * metrics.title_line_height);

        // creation date
        let created = format_timestamp(&record.created_at, &layout.locale.date_time_format, &layout.locale);
        backend.set_font(layout.font_family, Style::Italic);
        backend.set_font_size(layout.date_size);
        backend.set_text_color(DATE_COLOR);
        backend.draw_text(&format!("Created: {created}"), text_x, flow.cursor_y() + layout.date_baseline, TextAlignment::Left);
        flow.advance(metrics.date_height);

        // divider
        let divider_end = backend.page_width() - layout.margin - layout.card_padding;
        backend.set_draw_color(DIVIDER_COLOR);
        backend.draw_line(text_x, flow.cursor_y(), divider_end, flow.cursor_y());
        flow.advance(metrics.divider_gap);

        // rows
        let value_x = layout.margin + layout.value_indent;
        let time_x = layout.margin + layout.time_indent;

        if record.entries.is_empty() {
            self.admit_row(backend, flow, metrics, 0);

            backend.set_font(layout.font_family, Style::Italic);
            backend.set_font_size(layout.placeholder_size);
            backend.set_text_color(PLACEHOLDER_COLOR);
            backend.draw_text(EMPTY_NOTE_TEXT, value_x, flow.cursor_y(), TextAlignment::Left);
            flow.advance(metrics.row_height);
        }

        for (index, entry) in record.entries.iter().enumerate() {
            self.admit_row(backend, flow, metrics, index);

            let value = format_number(entry.value, &layout.locale);
            let time = format_timestamp(&entry.created_at, &layout.locale.time_format, &layout.locale);

            backend.set_font(layout.font_family, Style::Normal);
            backend.set_font_size(layout.entry_size);
            backend.set_text_color(ENTRY_COLOR);
            backend.draw_text(&value, value_x, flow.cursor_y(), TextAlignment::Left);
            backend.draw_text(&format!("({time})"), time_x, flow.cursor_y(), TextAlignment::Left);
            flow.advance(metrics.row_height);
        }

        // total, summed afresh from the entries being drawn
        let total = format_number(record.total(), &layout.locale);
        backend.set_font(layout.font_family, Style::Bold);
        backend.set_font_size(layout.entry_size);
        backend.set_text_color(ENTRY_COLOR);
        backend.draw_text(&format!("Total = {total}"), value_x, flow.cursor_y() + layout.total_baseline, TextAlignment::Left);
        flow.advance(metrics.total_height);

        flow.advance(metrics.spacing);
    }

    /// admits one row, restarting the card on the new page after a break
    fn admit_row(&self, backend: &mut dyn DrawingBackend, flow: &mut FlowController, metrics: &BlockMetrics, index: usize) {
        if flow.ensure_space(backend, metrics.row_admission(index)) {
            self.draw_card(backend, flow, metrics.remaining_body_height(index));
            flow.mark_content();
        }
    }

    /// fills the card background from the cursor down, clipped to the page's usable height
    fn draw_card(&self, backend: &mut dyn DrawingBackend, flow: &FlowController, content_height: f32) {
        let layout = self.layout;
        let top = flow.cursor_y() - layout.card_padding;
        let bottom = (flow.cursor_y() + content_height).min(flow.limit());

        backend.set_fill_color(CARD_COLOR);
        backend.draw_filled_rounded_rect(
            layout.margin,
            top,
            layout.card_width(backend.page_width()),
            bottom - top,
            layout.card_radius,
        );
    }
}
