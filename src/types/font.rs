//! Advance widths of the standard Type1 fonts, taken from the Adobe core AFM files.
//! Tables cover printable ASCII (0x20..=0x7E) in WinAnsi order.
use crate::traits::FontType;

const FIRST_CHAR: u32 = 0x20;
const DEFAULT_WIDTH: u16 = 500;
const COURIER_WIDTH: u16 = 600;

#[rustfmt::skip]
const TIMES_NORMAL: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ITALIC: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

#[rustfmt::skip]
const TIMES_BOLD_ITALIC: [u16; 95] = [
    250, 389, 555, 500, 500, 833, 778, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    832, 667, 667, 667, 722, 667, 667, 722, 778, 389, 500, 667, 611, 889, 722, 722,
    611, 722, 667, 556, 611, 722, 667, 889, 667, 611, 611, 333, 278, 333, 570, 500,
    333, 500, 500, 444, 500, 444, 333, 500, 556, 278, 278, 500, 278, 778, 556, 500,
    500, 500, 389, 389, 278, 556, 444, 667, 500, 444, 389, 348, 220, 348, 570,
];

/// looks a character up in a printable-ASCII table, anything else gets the default width
fn lookup(table: &[u16; 95], ch: char) -> u16 {
    (ch as u32)
        .checked_sub(FIRST_CHAR)
        .and_then(|index| table.get(index as usize))
        .copied()
        .unwrap_or(DEFAULT_WIDTH)
}

/// Times-Roman, Times-Bold, Times-Italic, Times-BoldItalic
#[derive(Debug,Clone,Copy,Default)]
pub struct TimesRoman;

impl FontType for TimesRoman {
    fn normal(&self, ch: char) -> u16 {
        lookup(&TIMES_NORMAL, ch)
    }

    fn bold(&self, ch: char) -> u16 {
        lookup(&TIMES_BOLD, ch)
    }

    fn italic(&self, ch: char) -> u16 {
        lookup(&TIMES_ITALIC, ch)
    }

    fn bold_italic(&self, ch: char) -> u16 {
        lookup(&TIMES_BOLD_ITALIC, ch)
    }
}

/// Courier is monospaced in every style
#[derive(Debug,Clone,Copy,Default)]
pub struct Courier;

impl FontType for Courier {
    fn normal(&self, _ch: char) -> u16 {
        COURIER_WIDTH
    }

    fn bold(&self, _ch: char) -> u16 {
        COURIER_WIDTH
    }

    fn italic(&self, _ch: char) -> u16 {
        COURIER_WIDTH
    }

    fn bold_italic(&self, _ch: char) -> u16 {
        COURIER_WIDTH
    }
}
