//! Rendered page model
//!
//! The layout produces pages of draw commands in millimetres (Y from the top).
//! PDF is one serialization of this model, see [`crate::write_pdf`].

use crate::constants::{MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
use crate::metrics::FontSpec;
use pdf_core::{Align, Color, PaintMode};

/// Fixed page format
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            margin: MARGIN,
        }
    }
}

impl PageGeometry {
    /// Lowest Y content may reach
    pub fn bottom_limit(&self) -> f64 {
        self.height - self.margin
    }

    /// X of the right margin
    pub fn right_edge(&self) -> f64 {
        self.width - self.margin
    }

    /// Width between the margins
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }
}

/// One drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Text run anchored at (`x`, baseline `y`)
    Text {
        x: f64,
        y: f64,
        text: String,
        font: FontSpec,
        color: Color,
        align: Align,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
    },
    /// Filled rectangle with top-left corner (`x`, `y`)
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    /// Outlined rectangle with top-left corner (`x`, `y`)
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        line_width: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
        line_width: f64,
        mode: PaintMode,
    },
    /// JPEG/PNG image placed into the box with top-left corner (`x`, `y`)
    Image {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        data: Vec<u8>,
    },
}

impl DrawCommand {
    /// Black left-aligned text
    pub fn text(x: f64, y: f64, text: impl Into<String>, font: FontSpec) -> Self {
        DrawCommand::Text {
            x,
            y,
            text: text.into(),
            font,
            color: Color::black(),
            align: Align::Left,
        }
    }

    /// Replace the color of a text command
    pub fn colored(mut self, new_color: Color) -> Self {
        if let DrawCommand::Text { color, .. } = &mut self {
            *color = new_color;
        }
        self
    }

    /// Replace the alignment of a text command
    pub fn aligned(mut self, new_align: Align) -> Self {
        if let DrawCommand::Text { align, .. } = &mut self {
            *align = new_align;
        }
        self
    }

    /// Text content, if this is a text command
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// One output page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    commands: Vec<DrawCommand>,
    footer_stamped: bool,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Whether the footer stamp has been drawn on this page
    pub fn is_footer_stamped(&self) -> bool {
        self.footer_stamped
    }

    pub(crate) fn mark_footer_stamped(&mut self) {
        self.footer_stamped = true;
    }

    /// All text runs in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::as_text)
    }

    /// Number of text runs equal to `text`
    pub fn count_text(&self, text: &str) -> usize {
        self.texts().filter(|t| *t == text).count()
    }

    /// Baseline Y of the first text run equal to `text`
    pub fn find_text_y(&self, text: &str) -> Option<f64> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::Text { y, text: t, .. } if t == text => Some(*y),
            _ => None,
        })
    }
}

/// Ordered pages produced by one render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedPageSet {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

impl RenderedPageSet {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text runs across pages, in page then drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(Page::texts)
    }

    /// Whether any page has a text run equal to `text`
    pub fn contains_text(&self, text: &str) -> bool {
        self.texts().any(|t| t == text)
    }
}
