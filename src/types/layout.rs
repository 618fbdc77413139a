use serde::{ Deserialize, Serialize };

use crate::types::{ Error, FontFamily };

/// Every geometric constant a job lays out with, in the backend's user units unless noted.
///
/// The defaults reproduce the Notes+ export on an A4 page measured in millimetres. A
/// settings collaborator may override any subset through `from_json`.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConstants {
    pub font_family: FontFamily,
    pub margin: f32,

    // banner
    /// points
    pub header_title_size: f32,
    /// points
    pub header_subtitle_size: f32,
    /// baseline distance from the title to the subtitle
    pub subtitle_offset: f32,
    /// distance from the top margin to the first block
    pub header_height: f32,

    // page number stamp
    /// points
    pub footer_size: f32,
    /// baseline distance above the bottom page edge
    pub footer_inset: f32,

    // card
    /// text inset from the card edge, also the card's top padding above the cursor
    pub card_padding: f32,
    pub card_radius: f32,
    /// how much narrower than the card the title wraps
    pub title_wrap_inset: f32,

    /// points
    pub title_size: f32,
    pub title_line_height: f32,
    /// baseline of the first title line below the block cursor
    pub title_baseline: f32,

    /// points
    pub date_size: f32,
    pub date_line_height: f32,
    pub date_baseline: f32,

    /// space below the divider before the first row
    pub divider_gap: f32,

    /// points
    pub entry_size: f32,
    /// points
    pub placeholder_size: f32,
    pub entry_line_height: f32,
    /// x offset of the value column from the margin
    pub value_indent: f32,
    /// x offset of the time column from the margin
    pub time_indent: f32,

    pub total_line_height: f32,
    pub total_baseline: f32,
    /// gap between consecutive cards
    pub block_spacing: f32,

    pub locale: Locale,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        LayoutConstants {
            font_family: FontFamily::Times,
            margin: 15.0,
            header_title_size: 22.0,
            header_subtitle_size: 10.0,
            subtitle_offset: 7.0,
            header_height: 20.0,
            footer_size: 10.0,
            footer_inset: 7.5,
            card_padding: 5.0,
            card_radius: 3.0,
            title_wrap_inset: 10.0,
            title_size: 16.0,
            title_line_height: 7.0,
            title_baseline: 5.0,
            date_size: 8.0,
            date_line_height: 4.0,
            date_baseline: 2.0,
            divider_gap: 6.0,
            entry_size: 11.0,
            placeholder_size: 10.0,
            entry_line_height: 6.0,
            value_indent: 10.0,
            time_indent: 50.0,
            total_line_height: 8.0,
            total_baseline: 4.0,
            block_spacing: 7.0,
            locale: Locale::default(),
        }
    }
}

impl LayoutConstants {
    /// applies a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// rejects layouts that cannot hold a single entry row on a page of the given size
    pub fn validate(&self, page_width: f32, page_height: f32) -> Result<(), Error> {
        let lengths = [
            ("margin", self.margin),
            ("headerHeight", self.header_height),
            ("titleLineHeight", self.title_line_height),
            ("dateLineHeight", self.date_line_height),
            ("dividerGap", self.divider_gap),
            ("entryLineHeight", self.entry_line_height),
            ("totalLineHeight", self.total_line_height),
            ("blockSpacing", self.block_spacing),
        ];

        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidLayout(format!("{name} must be a non-negative number, got {value}")));
            }
        }

        if self.entry_line_height <= 0.0 || self.title_line_height <= 0.0 {
            return Err(Error::InvalidLayout("line heights must be positive".into()));
        }

        if self.title_wrap_width(page_width) <= 0.0 {
            return Err(Error::InvalidLayout(format!("page width {page_width} leaves no room for text")));
        }

        if self.max_title_lines(page_height) == 0 {
            return Err(Error::InvalidLayout(format!("page height {page_height} leaves no room below the header")));
        }

        Ok(())
    }

    /// lowest y any block content may reach
    pub fn usable_height(&self, page_height: f32) -> f32 {
        page_height - self.margin
    }

    /// y of the first block on a page, right below the banner
    pub fn content_top(&self) -> f32 {
        self.margin + self.header_height
    }

    /// Most title lines a card may show so that its title, date, divider, first row and
    /// total still fit on a page holding nothing but the banner.
    pub fn max_title_lines(&self, page_height: f32) -> usize {
        let room = self.usable_height(page_height)
            - self.content_top()
            - self.date_line_height
            - self.divider_gap
            - self.entry_line_height
            - self.total_line_height;

        if room < self.title_line_height {
            return 0;
        }

        // tolerate rounding when the room is an exact multiple of the line height
        (room / self.title_line_height + 1e-4).floor() as usize
    }

    pub fn card_width(&self, page_width: f32) -> f32 {
        page_width - self.margin * 2.0
    }

    pub fn title_wrap_width(&self, page_width: f32) -> f32 {
        self.card_width(page_width) - self.title_wrap_inset
    }
}

/// Number and timestamp presentation; defaults match an en-US browser.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Locale {
    pub grouping_separator: String,
    pub decimal_separator: String,
    pub max_fraction_digits: usize,
    /// offset applied to every UTC timestamp before formatting
    pub utc_offset_minutes: i32,
    /// chrono format of the "Created:" line
    pub date_time_format: String,
    /// chrono format of an entry's time of day
    pub time_format: String,
    /// chrono format of the dates in a range export subtitle
    pub date_format: String,
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            grouping_separator: ",".into(),
            decimal_separator: ".".into(),
            max_fraction_digits: 3,
            utc_offset_minutes: 0,
            date_time_format: "%-m/%-d/%Y, %-I:%M:%S %p".into(),
            time_format: "%I:%M %p".into(),
            date_format: "%-m/%-d/%Y".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let layout = LayoutConstants::from_json(r#"{"margin": 20, "fontFamily": "courier", "locale": {"groupingSeparator": "."}}"#).unwrap();

        assert_eq!(layout.margin, 20.0);
        assert_eq!(layout.font_family, FontFamily::Courier);
        assert_eq!(layout.locale.grouping_separator, ".");
        assert_eq!(layout.locale.decimal_separator, ".");
        assert_eq!(layout.entry_line_height, 6.0);
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(matches!(LayoutConstants::from_json("{\"margin\": \"wide\"}"), Err(Error::Json(_))));
    }

    #[test]
    fn default_fits_a4() {
        assert!(LayoutConstants::default().validate(210.0, 297.0).is_ok());
    }

    #[test]
    fn rejects_degenerate_layouts() {
        let layout = LayoutConstants::default();
        assert!(matches!(layout.validate(30.0, 297.0), Err(Error::InvalidLayout(_))));
        assert!(matches!(layout.validate(210.0, 50.0), Err(Error::InvalidLayout(_))));

        let layout = LayoutConstants { entry_line_height: 0.0, ..LayoutConstants::default() };
        assert!(matches!(layout.validate(210.0, 297.0), Err(Error::InvalidLayout(_))));

        let layout = LayoutConstants { margin: -1.0, ..LayoutConstants::default() };
        assert!(matches!(layout.validate(210.0, 297.0), Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn title_lines_fit_above_one_row() {
        let layout = LayoutConstants::default();

        // 282 - 35 - 4 - 6 - 6 - 8 = 223 leaves room for 31 lines of 7
        assert_eq!(layout.max_title_lines(297.0), 31);
        assert_eq!(layout.max_title_lines(35.0 + 15.0 + 4.0 + 6.0 + 6.0 + 8.0 + 7.0), 1);
        assert_eq!(layout.max_title_lines(35.0 + 15.0 + 4.0 + 6.0 + 6.0 + 8.0 + 6.0), 0);
    }
}
