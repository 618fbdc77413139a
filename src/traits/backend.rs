use crate::types::{ Color, Error, FontFamily, Style, TextAlignment };

/// The drawing capability the document builder paints through.
///
/// Coordinates are in the backend's user units with the origin at the top-left corner of
/// the page and `y` growing downwards; `y` of `draw_text` is the baseline. Font sizes are
/// always in points. A backend is one mutable canvas: a job owns it exclusively (through
/// `&mut`) from its first draw call until `finalize` returns.
pub trait DrawingBackend {
    fn set_font(&mut self, family: FontFamily, style: Style);
    fn set_font_size(&mut self, size: f32);
    fn set_text_color(&mut self, color: Color);
    /// colour used by `draw_filled_rounded_rect`
    fn set_fill_color(&mut self, color: Color);
    /// colour used by `draw_line`
    fn set_draw_color(&mut self, color: Color);

    fn draw_text(&mut self, text: &str, x: f32, y: f32, alignment: TextAlignment);
    fn draw_filled_rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32);
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// splits `text` into lines no wider than `max_width` using the current font and size
    fn measure_wrapped_text(&self, text: &str, max_width: f32) -> Vec<String>;

    /// finishes the current page and continues on a fresh one
    fn new_page(&mut self);
    fn page_width(&self) -> f32;
    fn page_height(&self) -> f32;

    /// throws away everything drawn so far, leaving a single blank page
    fn reset(&mut self);

    /// seals the drawn pages into a byte stream and resets the canvas for the next job
    fn finalize(&mut self) -> Result<Vec<u8>, Error>;
}
