use serde::{ Deserialize, Serialize };

/// horizontal anchor of a `draw_text` call relative to its x coordinate
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
   #[default]
    Left,
    Center,
    Right,
}

impl TextAlignment {
    /// x coordinate where a run of `width` starts when anchored at `x`
    pub fn start_x(&self, x: f32, width: f32) -> f32 {
        match self {
            TextAlignment::Left => x,
            TextAlignment::Center => x - width / 2.0,
            TextAlignment::Right => x - width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_relative_to_width() {
        assert_eq!(TextAlignment::Left.start_x(100.0, 40.0), 100.0);
        assert_eq!(TextAlignment::Center.start_x(100.0, 40.0), 80.0);
        assert_eq!(TextAlignment::Right.start_x(100.0, 40.0), 60.0);
    }
}
