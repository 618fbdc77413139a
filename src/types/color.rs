use serde::{ Deserialize, Serialize };

/// 8-bit colour as accepted by `set_text_color` and friends
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Gray(u8),
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Color = Color::Gray(0);

    /// components normalised to 0.0..=1.0
    pub fn to_unit_rgb(self) -> (f32, f32, f32) {
        let unit = |c: u8| f32::from(c) / 255.0;

        match self {
            Color::Gray(g) => (unit(g), unit(g), unit(g)),
            Color::Rgb(r, g, b) => (unit(r), unit(g), unit(b)),
        }
    }
}
