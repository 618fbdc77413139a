use crate::types::Style;

/// Glyph advance widths for one font family, in thousandths of an em (AFM units).
///
/// Registering a new family means providing the width of every character for all four
/// styles. Widths are scaled to the requested font size by `char_width`, so every caller
/// measuring text (wrapping, alignment, the drawing backends) shares the same model.
pub trait FontType {
    fn normal(&self, ch: char) -> u16;
    fn bold(&self, ch: char) -> u16;
    fn italic(&self, ch: char) -> u16;
    fn bold_italic(&self, ch: char) -> u16;

    /// converts AFM units to points at `font_size`
    fn standardize(&self, width: u16, font_size: f32) -> f32 {
        f32::from(width) * font_size / 1000.0
    }

    fn char_width(&self, ch: char, font_style: Style, font_size: f32) -> f32 {
        let width = match font_style {
            Style::Normal => self.normal(ch),
            Style::Bold => self.bold(ch),
            Style::Italic => self.italic(ch),
            Style::BoldItalic => self.bold_italic(ch),
        };

        self.standardize(width, font_size)
    }

    /// width of a run of text in points
    fn text_width(&self, text: &str, font_style: Style, font_size: f32) -> f32 {
        text.chars()
            .map(|ch| self.char_width(ch, font_style, font_size))
            .sum()
    }
}
