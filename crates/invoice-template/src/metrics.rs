//! Text measurement and wrapping

use invoice_text::wrap_text;
use pdf_core::{pt_to_mm, FontStyle, FontWeight, StandardFont};

/// Font selection for a text run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub weight: FontWeight,
    pub style: FontStyle,
    /// Size in points
    pub size: f32,
}

impl FontSpec {
    pub fn regular(size: f32) -> Self {
        Self {
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
            size,
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::regular(size)
        }
    }

    pub fn italic(size: f32) -> Self {
        Self {
            style: FontStyle::Italic,
            ..Self::regular(size)
        }
    }

    pub fn bold_italic(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            style: FontStyle::Italic,
            size,
        }
    }

    pub fn standard_font(&self) -> StandardFont {
        StandardFont::from_style(self.weight, self.style)
    }
}

/// Measures and wraps text for the layout
pub trait TextMetrics {
    /// Width of `text` in millimetres
    fn measure(&self, text: &str, font: FontSpec) -> f64;

    /// Greedy wrap to `max_width` millimetres
    fn wrap(&self, text: &str, font: FontSpec, max_width: f64) -> Vec<String> {
        wrap_text(text, max_width, |s| self.measure(s, font))
    }
}

/// Metrics of the standard Helvetica family
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl TextMetrics for HelveticaMetrics {
    fn measure(&self, text: &str, font: FontSpec) -> f64 {
        let points = font.standard_font().text_width_points(text, font.size);
        pt_to_mm(points as f64)
    }
}
