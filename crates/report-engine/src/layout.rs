//! Word wrap and single-page pagination
//!
//! Lines are wrapped greedily against the usable canvas width, then placed
//! top to bottom at a fixed line height. When the next line would cross the
//! bottom margin a `...` marker is drawn in its place and layout stops; the
//! report never continues onto a second page.

use serde::{Deserialize, Serialize};

use crate::compose::ComposedText;
use crate::metrics::TextMeasure;

/// Text drawn in place of the first line that does not fit
pub const TRUNCATION_MARKER: &str = "...";

/// Fixed drawing surface, in canvas units (pixels at the render DPI)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub line_height: f64,
}

impl Default for Canvas {
    /// A4 at 150 DPI
    fn default() -> Self {
        Self {
            width: 1240.0,
            height: 1754.0,
            margin: 40.0,
            line_height: 22.0,
        }
    }
}

impl Canvas {
    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Lowest y a line box may reach
    pub fn bottom(&self) -> f64 {
        self.height - self.margin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawKind {
    Text,
    TruncationMarker,
}

/// One line placed on the page; `y` is the top of the line box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawInstruction {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub kind: DrawKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageLayout {
    pub instructions: Vec<DrawInstruction>,
    pub truncated: bool,
}

impl PageLayout {
    /// Number of report lines drawn, excluding the truncation marker
    pub fn text_line_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| i.kind == DrawKind::Text)
            .count()
    }
}

/// Greedy word wrap of one raw line
///
/// Words are whitespace-delimited and rejoined with single spaces. A word
/// wider than `max_width` is kept whole on its own line. A blank line yields
/// no output.
pub fn wrap_line<M>(line: &str, max_width: f64, measure: &M) -> Vec<String>
where
    M: TextMeasure + ?Sized,
{
    let mut wrapped = Vec::new();
    let mut buffer = String::new();

    for word in line.split_whitespace() {
        let candidate = if buffer.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", buffer, word)
        };

        if measure.measure(&candidate) <= max_width {
            buffer = candidate;
        } else {
            if !buffer.is_empty() {
                wrapped.push(std::mem::take(&mut buffer));
            }
            buffer = word.to_string();
        }
    }

    if !buffer.is_empty() {
        wrapped.push(buffer);
    }
    wrapped
}

/// Lay out composed text onto a single page
pub fn paginate<M>(text: &ComposedText, canvas: &Canvas, measure: &M) -> PageLayout
where
    M: TextMeasure + ?Sized,
{
    let max_width = canvas.usable_width();
    let mut layout = PageLayout::default();
    let mut y = canvas.margin;

    for raw in text.raw_lines() {
        for line in wrap_line(raw, max_width, measure) {
            if y + canvas.line_height > canvas.bottom() {
                layout.instructions.push(DrawInstruction {
                    text: TRUNCATION_MARKER.to_string(),
                    x: canvas.margin,
                    y,
                    kind: DrawKind::TruncationMarker,
                });
                layout.truncated = true;
                tracing::debug!(
                    "Page full after {} lines, truncating",
                    layout.text_line_count()
                );
                return layout;
            }

            layout.instructions.push(DrawInstruction {
                text: line,
                x: canvas.margin,
                y,
                kind: DrawKind::Text,
            });
            y += canvas.line_height;
        }
    }

    layout
}
