use crate::{
    traits::DrawingBackend,
    types::{ LayoutConstants, Record, Style }
};

/// Greedy word wrap.
///
/// Explicit newlines always break; each paragraph is split on whitespace and words are
/// packed while the measured line stays within `max_width`. A word wider than the line on
/// its own is broken between characters, and a single character wider than the line still
/// gets a line of its own. Blank input yields one empty line.
pub fn wrap_text<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32
{
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut current = String::new();
        let first_line = lines.len();

        for word in paragraph.split_whitespace() {
            if measure(word) > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }

                for ch in word.chars() {
                    let mut candidate = current.clone();
                    candidate.push(ch);

                    if !current.is_empty() && measure(&candidate) > max_width {
                        lines.push(std::mem::take(&mut current));
                        current.push(ch);
                    } else {
                        current = candidate;
                    }
                }

                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{current} {word}");

            if measure(&candidate) > max_width {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = candidate;
            }
        }

        if !current.is_empty() || lines.len() == first_line {
            lines.push(current);
        }
    }

    lines
}

/// wraps a record title in the title font at the card's text width
pub fn wrap_title(backend: &mut dyn DrawingBackend, title: &str, layout: &LayoutConstants) -> Vec<String> {
    backend.set_font(layout.font_family, Style::Bold);
    backend.set_font_size(layout.title_size);

    let max_width = layout.title_wrap_width(backend.page_width());

    backend.measure_wrapped_text(title, max_width)
}

const ELLIPSIS: &str = "...";

/// shortens `line` until it still fits on one line with a trailing ellipsis
fn with_ellipsis(backend: &dyn DrawingBackend, line: &str, max_width: f32) -> String {
    let mut kept = line.trim_end().to_string();

    loop {
        let candidate = format!("{kept}{ELLIPSIS}");

        if kept.is_empty() || backend.measure_wrapped_text(&candidate, max_width).len() == 1 {
            return candidate;
        }

        kept.pop();
        kept.truncate(kept.trim_end().len());
    }
}

/// Vertical extent of one block with `wrapped_line_count` title lines and `entry_count` entries.
pub fn estimate_block_height(entry_count: usize, wrapped_line_count: usize, layout: &LayoutConstants) -> f32 {
    BlockMetrics::new(Vec::new(), entry_count, layout).height_for(wrapped_line_count)
}

/// The single height model shared by page admission and drawing.
///
/// Every advance the block renderer makes comes from here, so the height used to decide a
/// page break is exactly the distance the cursor travels while the block is drawn.
#[derive(Debug,Clone,PartialEq)]
pub struct BlockMetrics {
    pub title_lines: Vec<String>,
    /// entry rows, or one row for the empty-note placeholder
    pub rows: usize,
    pub title_line_height: f32,
    pub date_height: f32,
    /// gap under the divider
    pub divider_gap: f32,
    pub row_height: f32,
    pub total_height: f32,
    pub spacing: f32,
}

impl BlockMetrics {
    pub fn new(title_lines: Vec<String>, entry_count: usize, layout: &LayoutConstants) -> Self {
        BlockMetrics {
            title_lines,
            rows: entry_count.max(1),
            title_line_height: layout.title_line_height,
            date_height: layout.date_line_height,
            divider_gap: layout.divider_gap,
            row_height: layout.entry_line_height,
            total_height: layout.total_line_height,
            spacing: layout.block_spacing,
        }
    }

    /// Wraps the title through the backend and sizes the block.
    ///
    /// A title too long to share an empty page with the first row is cut to
    /// `LayoutConstants::max_title_lines`, its last line ending in an ellipsis, so every
    /// block's head and first row fit on one page.
    pub fn measure(backend: &mut dyn DrawingBackend, record: &Record, layout: &LayoutConstants) -> Self {
        let mut title_lines = wrap_title(backend, &record.title, layout);
        let max_lines = layout.max_title_lines(backend.page_height()).max(1);

        if title_lines.len() > max_lines {
            log::debug!("title of {} cut from {} to {max_lines} lines", record.id, title_lines.len());

            title_lines.truncate(max_lines);
            let max_width = layout.title_wrap_width(backend.page_width());

            if let Some(last) = title_lines.last_mut() {
                *last = with_ellipsis(backend, last, max_width);
            }
        }

        BlockMetrics::new(title_lines, record.entries.len(), layout)
    }

    fn height_for(&self, wrapped_line_count: usize) -> f32 {
        wrapped_line_count as f32 * self.title_line_height
            + self.date_height
            + self.divider_gap
            + self.rows as f32 * self.row_height
            + self.total_height
            + self.spacing
    }

    /// cursor travel from the block's top to the top of the next block
    pub fn height(&self) -> f32 {
        self.height_for(self.title_lines.len())
    }

    /// title lines, date line and divider: the part that never splits
    pub fn head_height(&self) -> f32 {
        self.title_lines.len() as f32 * self.title_line_height + self.date_height + self.divider_gap
    }

    /// Space a row must find on the page before it is drawn. The last row also reserves the
    /// total line so a total never lands on a page without its entries.
    pub fn row_admission(&self, index: usize) -> f32 {
        if index + 1 >= self.rows {
            self.row_height + self.total_height
        } else {
            self.row_height
        }
    }

    /// height of the rows from `first_row` onward plus the total line
    pub fn remaining_body_height(&self, first_row: usize) -> f32 {
        self.rows.saturating_sub(first_row) as f32 * self.row_height + self.total_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordingBackend;

    // one unit per character keeps the arithmetic obvious
    fn chars(text: &str) -> f32 {
        text.chars().count() as f32
    }

    #[test]
    fn packs_words_greedily() {
        assert_eq!(wrap_text("aa bb cc dd", 5.0, chars), ["aa bb", "cc dd"]);
        assert_eq!(wrap_text("aa bb cc", 8.0, chars), ["aa bb cc"]);
        assert_eq!(wrap_text("  spaced   out  ", 20.0, chars), ["spaced out"]);
    }

    #[test]
    fn newlines_force_breaks() {
        assert_eq!(wrap_text("one\ntwo", 20.0, chars), ["one", "two"]);
        assert_eq!(wrap_text("one\n\nthree", 20.0, chars), ["one", "", "three"]);
        assert_eq!(wrap_text("crlf\r\nline", 20.0, chars), ["crlf", "line"]);
    }

    #[test]
    fn blank_text_is_one_empty_line() {
        assert_eq!(wrap_text("", 10.0, chars), [""]);
        assert_eq!(wrap_text("   ", 10.0, chars), [""]);
    }

    #[test]
    fn overlong_words_break_between_characters() {
        assert_eq!(wrap_text("abcdefgh", 3.0, chars), ["abc", "def", "gh"]);
        assert_eq!(wrap_text("x abcdefg y", 3.0, chars), ["x", "abc", "def", "g y"]);
    }

    #[test]
    fn a_character_wider_than_the_line_still_renders() {
        assert_eq!(wrap_text("ab", 0.5, chars), ["a", "b"]);
    }

    #[test]
    fn height_follows_the_formula() {
        let layout = LayoutConstants::default();
        let one_line = estimate_block_height(2, 1, &layout);

        assert_eq!(one_line, 7.0 + 4.0 + 6.0 + 2.0 * 6.0 + 8.0 + 7.0);

        for lines in 1..6 {
            let height = estimate_block_height(2, lines, &layout);
            assert_eq!(height - one_line, (lines - 1) as f32 * layout.title_line_height);
        }
    }

    #[test]
    fn empty_notes_reserve_the_placeholder_row() {
        let layout = LayoutConstants::default();
        assert_eq!(estimate_block_height(0, 1, &layout), estimate_block_height(1, 1, &layout));
    }

    #[test]
    fn overlong_titles_are_cut_to_fit_the_page() {
        let layout = LayoutConstants::default();
        let mut backend = RecordingBackend::default();
        let record = Record {
            id: "long".into(),
            title: "word ".repeat(1600),
            entries: Vec::new(),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        let metrics = BlockMetrics::measure(&mut backend, &record, &layout);
        let max_width = layout.title_wrap_width(backend.page_width());

        assert_eq!(metrics.title_lines.len(), layout.max_title_lines(backend.page_height()));
        assert!(metrics.title_lines[0].starts_with("word"));

        let last = metrics.title_lines.last().unwrap();
        assert!(last.ends_with("..."));
        assert_eq!(backend.measure_wrapped_text(last, max_width).len(), 1);

        let head_and_first_row = layout.content_top() + metrics.head_height() + metrics.row_admission(0);
        assert!(head_and_first_row <= layout.usable_height(backend.page_height()));
    }

    #[test]
    fn titles_that_fit_are_left_alone() {
        let layout = LayoutConstants::default();
        let mut backend = RecordingBackend::default();
        let record = Record {
            id: "short".into(),
            title: "Groceries".into(),
            entries: Vec::new(),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        let metrics = BlockMetrics::measure(&mut backend, &record, &layout);

        assert_eq!(metrics.title_lines, ["Groceries"]);
    }

    #[test]
    fn row_admissions_sum_to_the_body() {
        let layout = LayoutConstants::default();
        let metrics = BlockMetrics::new(vec!["title".into()], 4, &layout);
        let rows: f32 = (0..metrics.rows).map(|i| metrics.row_admission(i)).sum();

        assert_eq!(rows, metrics.remaining_body_height(0));
        assert_eq!(metrics.head_height() + rows + metrics.spacing, metrics.height());
        assert_eq!(metrics.row_admission(3), 14.0);
        assert_eq!(metrics.row_admission(0), 6.0);
    }
}
