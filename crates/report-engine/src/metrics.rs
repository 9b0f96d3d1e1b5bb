//! Text width measurement used by the word wrapper

/// Measures the rendered width of a string in canvas units
pub trait TextMeasure {
    fn measure(&self, text: &str) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f64,
{
    fn measure(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Fixed advance per character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f64,
}

impl MonospaceMeasure {
    pub fn new(advance: f64) -> Self {
        Self { advance }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.advance
    }
}

/// Advance widths of the standard-14 Helvetica font
///
/// Widths come from the Adobe AFM (units of 1/1000 em) and are scaled by the
/// font size, so the measured width is in the same units as the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelveticaMetrics {
    pub font_size: f64,
}

/// Cap height ascent of Helvetica, 1/1000 em
pub const HELVETICA_ASCENT: f64 = 718.0;

// AFM widths for 0x20..=0x7E
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

const DEFAULT_WIDTH: u16 = 556;

impl HelveticaMetrics {
    pub fn new(font_size: f64) -> Self {
        Self { font_size }
    }

    /// Advance width of one character, 1/1000 em
    pub fn char_width(c: char) -> u16 {
        match c {
            ' '..='~' => ASCII_WIDTHS[c as usize - 0x20],
            '•' => 350,
            '–' | '€' => 556,
            '—' => 1000,
            '‘' | '’' => 222,
            '“' | '”' => 333,
            '\u{A0}' => 278,
            _ => DEFAULT_WIDTH,
        }
    }

    /// Distance from the top of the line box to the baseline
    pub fn ascent(&self) -> f64 {
        HELVETICA_ASCENT * self.font_size / 1000.0
    }
}

impl TextMeasure for HelveticaMetrics {
    fn measure(&self, text: &str) -> f64 {
        let units: u32 = text.chars().map(|c| u32::from(Self::char_width(c))).sum();
        f64::from(units) * self.font_size / 1000.0
    }
}
