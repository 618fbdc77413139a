use serde::{ Deserialize, Serialize };

use crate::{
    traits::FontType,
    types::{ Courier, Style, TimesRoman }
};

static TIMES_ROMAN: TimesRoman = TimesRoman;
static COURIER: Courier = Courier;

/// The standard PDF font families the engine can draw with.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Default,Serialize,Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
   #[default]
   #[serde(alias = "times-roman")]
    Times,
    Courier,
}

impl FontFamily {
    pub const ALL: [FontFamily; 2] = [FontFamily::Times, FontFamily::Courier];

    /// width tables shared by every measuring caller
    pub fn metrics(&self) -> &'static dyn FontType {
        match self {
            FontFamily::Times => &TIMES_ROMAN,
            FontFamily::Courier => &COURIER,
        }
    }

    /// PDF base font name for one style of the family
    pub fn base_font(&self, style: Style) -> &'static str {
        match (self, style) {
            (FontFamily::Times, Style::Normal) => "Times-Roman",
            (FontFamily::Times, Style::Bold) => "Times-Bold",
            (FontFamily::Times, Style::Italic) => "Times-Italic",
            (FontFamily::Times, Style::BoldItalic) => "Times-BoldItalic",
            (FontFamily::Courier, Style::Normal) => "Courier",
            (FontFamily::Courier, Style::Bold) => "Courier-Bold",
            (FontFamily::Courier, Style::Italic) => "Courier-Oblique",
            (FontFamily::Courier, Style::BoldItalic) => "Courier-BoldOblique",
        }
    }

    /// resource label used inside page content streams
    pub fn label(&self, style: Style) -> &'static str {
        match (self, style) {
            (FontFamily::Times, Style::Normal) => "times-normal",
            (FontFamily::Times, Style::Bold) => "times-bold",
            (FontFamily::Times, Style::Italic) => "times-italic",
            (FontFamily::Times, Style::BoldItalic) => "times-bold-italic",
            (FontFamily::Courier, Style::Normal) => "courier-normal",
            (FontFamily::Courier, Style::Bold) => "courier-bold",
            (FontFamily::Courier, Style::Italic) => "courier-italic",
            (FontFamily::Courier, Style::BoldItalic) => "courier-bold-italic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_settings_names() {
        let family: FontFamily = serde_json::from_str("\"times-roman\"").unwrap();
        assert_eq!(family, FontFamily::Times);

        let family: FontFamily = serde_json::from_str("\"courier\"").unwrap();
        assert_eq!(family, FontFamily::Courier);
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<&str> = FontFamily::ALL
            .iter()
            .flat_map(|family| {
                [Style::Normal, Style::Bold, Style::Italic, Style::BoldItalic]
                    .map(|style| family.label(style))
            })
            .collect();
        labels.sort();
        labels.dedup();

        assert_eq!(labels.len(), 8);
    }
}
