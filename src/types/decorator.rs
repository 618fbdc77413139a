use crate::{
    traits::DrawingBackend,
    types::{ Color, LayoutConstants, Style, TextAlignment }
};

const TITLE_COLOR: Color = Color::Rgb(40, 40, 40);
const MUTED_COLOR: Color = Color::Gray(150);

/// Draws the banner at the top of every page and the page number stamp at the bottom.
#[derive(Debug,Clone,Copy)]
pub struct Decorator<'a> {
    title: &'a str,
    subtitle: &'a str,
    layout: &'a LayoutConstants,
}

impl<'a> Decorator<'a> {
    pub fn new(title: &'a str, subtitle: &'a str, layout: &'a LayoutConstants) -> Self {
        Decorator { title, subtitle, layout }
    }

    /// draws the centred title and subtitle, returns the cursor for the first block
    pub fn add_header(&self, backend: &mut dyn DrawingBackend) -> f32 {
        let layout = self.layout;
        let center = backend.page_width() / 2.0;

        backend.set_font(layout.font_family, Style::Bold);
        backend.set_font_size(layout.header_title_size);
        backend.set_text_color(TITLE_COLOR);
        backend.draw_text(self.title, center, layout.margin, TextAlignment::Center);

        backend.set_font(layout.font_family, Style::Normal);
        backend.set_font_size(layout.header_subtitle_size);
        backend.set_text_color(MUTED_COLOR);
        backend.draw_text(self.subtitle, center, layout.margin + layout.subtitle_offset, TextAlignment::Center);

        layout.content_top()
    }

    /// stamps "Page N" centred above the bottom edge
    pub fn add_footer(&self, backend: &mut dyn DrawingBackend, page_number: u32) {
        let layout = self.layout;
        let center = backend.page_width() / 2.0;
        let baseline = backend.page_height() - layout.footer_inset;

        backend.set_font(layout.font_family, Style::Normal);
        backend.set_font_size(layout.footer_size);
        backend.set_text_color(MUTED_COLOR);
        backend.draw_text(&format!("Page {page_number}"), center, baseline, TextAlignment::Center);
    }
}
