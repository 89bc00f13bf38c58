//! Text runs in a content stream

use crate::document::Color;
use crate::font::{encode_text_hex, StandardFont};
use crate::Align;

/// One line of text in a single font, size and color
#[derive(Debug, Clone, Copy)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub font: StandardFont,
    /// Font size in points
    pub size: f32,
    pub color: Color,
}

impl<'a> TextRun<'a> {
    pub fn new(text: &'a str, font: StandardFont, size: f32, color: Color) -> Self {
        Self {
            text,
            font,
            size,
            color,
        }
    }

    /// Advance width in points
    pub fn width(&self) -> f64 {
        self.font.text_width_points(self.text, self.size) as f64
    }

    /// Left edge of the run for an anchor at `x`
    ///
    /// The anchor is the left edge, the middle or the right edge of the run.
    pub fn start_x(&self, x: f64, align: Align) -> f64 {
        match align {
            Align::Left => x,
            Align::Center => x - self.width() / 2.0,
            Align::Right => x - self.width(),
        }
    }

    /// `BT … ET` block drawing the run with its anchor at (`x`, `y`)
    ///
    /// `y` is the baseline in PDF space (from the bottom of the page).
    pub fn to_operators(&self, x: f64, y: f64, align: Align) -> Vec<u8> {
        let Color { r, g, b } = self.color;
        format!(
            "BT\n{r} {g} {b} rg\n/{} {} Tf\n{} {y} Td\n{} Tj\nET\n",
            self.font.resource_name(),
            self.size,
            self.start_x(x, align),
            encode_text_hex(self.text),
        )
        .into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> TextRun<'_> {
        TextRun::new(text, StandardFont::Helvetica, 10.0, Color::black())
    }

    fn ops(run: &TextRun, x: f64, align: Align) -> String {
        String::from_utf8(run.to_operators(x, 700.0, align)).unwrap()
    }

    #[test]
    fn test_width_from_metrics() {
        // "AB": A = 667, B = 667 at 10pt
        assert!((run("AB").width() - 13.34).abs() < 1e-4);
    }

    #[test]
    fn test_left_anchor() {
        let text = ops(&run("Hello"), 100.0, Align::Left);
        assert!(text.starts_with("BT\n"));
        assert!(text.contains("0 0 0 rg"));
        assert!(text.contains("/F1 10 Tf"));
        assert!(text.contains("100 700 Td"));
        assert!(text.contains("<48656C6C6F> Tj"));
        assert!(text.ends_with("ET\n"));
    }

    #[test]
    fn test_center_and_right_anchor() {
        let r = run("AB");
        assert!((r.start_x(100.0, Align::Center) - 93.33).abs() < 1e-4);
        assert!((r.start_x(100.0, Align::Right) - 86.66).abs() < 1e-4);
    }

    #[test]
    fn test_empty_run_does_not_shift() {
        let r = run("");
        assert_eq!(r.start_x(50.0, Align::Right), 50.0);
        assert_eq!(r.start_x(50.0, Align::Center), 50.0);
    }

    #[test]
    fn test_color_and_font() {
        let r = TextRun::new("A", StandardFont::HelveticaBold, 12.0, Color::rgb(1.0, 0.0, 0.0));
        let text = ops(&r, 10.0, Align::Left);
        assert!(text.contains("1 0 0 rg"));
        assert!(text.contains("/F2 12 Tf"));
    }
}
