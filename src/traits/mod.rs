mod backend;
mod font_type;

pub use backend::DrawingBackend;
pub use font_type::FontType;
