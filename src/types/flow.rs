use crate::{
    traits::DrawingBackend,
    types::{ Decorator, LayoutConstants }
};

/// Owns the vertical cursor and the page number of one job.
///
/// All page breaks go through `ensure_space`, which finalizes the current page with its
/// footer, opens the next one and redraws the banner before any further content is drawn.
pub struct FlowController<'a> {
    decorator: Decorator<'a>,
    cursor_y: f32,
    page_number: u32,
    limit: f32,
    // nothing but the banner has been drawn on the current page
    page_is_blank: bool,
}

impl<'a> FlowController<'a> {
    pub fn new(decorator: Decorator<'a>, layout: &LayoutConstants, page_height: f32) -> Self {
        FlowController {
            decorator,
            cursor_y: layout.content_top(),
            page_number: 1,
            limit: layout.usable_height(page_height),
            page_is_blank: true,
        }
    }

    /// draws the banner of the first page
    pub fn begin(&mut self, backend: &mut dyn DrawingBackend) {
        self.cursor_y = self.decorator.add_header(backend);
    }

    /// Breaks the page when `needed_height` does not fit below the cursor. Returns whether a
    /// break happened.
    ///
    /// A page holding nothing but its banner is never broken: the content would not fit on
    /// the next page either, so it starts here and relies on the finer-grained checks made
    /// while it is drawn.
    pub fn ensure_space(&mut self, backend: &mut dyn DrawingBackend, needed_height: f32) -> bool {
        if self.cursor_y + needed_height <= self.limit {
            return false;
        }

        if self.page_is_blank {
            log::debug!(
                "{needed_height} does not fit on empty page {}, drawing it in parts",
                self.page_number
            );
            return false;
        }

        self.break_page(backend);
        true
    }

    fn break_page(&mut self, backend: &mut dyn DrawingBackend) {
        log::debug!("page {} full at y = {}", self.page_number, self.cursor_y);

        self.decorator.add_footer(backend, self.page_number);
        backend.new_page();
        self.page_number += 1;
        self.cursor_y = self.decorator.add_header(backend);
        self.page_is_blank = true;
    }

    /// records that content has been committed to the current page
    pub fn mark_content(&mut self) {
        self.page_is_blank = false;
    }

    pub fn advance(&mut self, height: f32) {
        self.cursor_y += height;
    }

    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// lowest y content may reach on a page
    pub fn limit(&self) -> f32 {
        self.limit
    }

    /// stamps the footer of the last page and returns the page count
    pub fn finish(self, backend: &mut dyn DrawingBackend) -> u32 {
        self.decorator.add_footer(backend, self.page_number);
        self.page_number
    }
}
