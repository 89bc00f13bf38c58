//! PDF Core - Low-level PDF writing
//!
//! This crate provides functionality for:
//! - Building a fresh PDF document page by page
//! - Measuring and placing text in the standard Helvetica family
//! - Drawing rules, rectangles and circles
//! - Inserting images (JPEG, PNG)
//!
//! All coordinates are in points, with Y measured from the top of the page.
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{Align, FontStyle, FontWeight, PdfDocument};
//!
//! let mut doc = PdfDocument::new();
//! let page = doc.add_blank_page();
//! doc.set_font(FontWeight::Bold, FontStyle::Normal, 12.0);
//! doc.insert_text("Hello, World!", page, 100.0, 100.0, Align::Left)?;
//! doc.save("output.pdf")?;
//! ```

mod document;
mod font;
mod graphics;
mod image;
mod text;

pub use document::{Color, PdfDocument, A4_HEIGHT_PT, A4_WIDTH_PT};
pub use font::{encode_text_hex, encode_win_ansi, FontStyle, FontWeight, StandardFont};
pub use graphics::PaintMode;
pub use image::{calculate_scaled_dimensions, get_dimensions, ImageDimensions, ImageScaleMode};
pub use text::TextRun;

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Millimetres to points
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * 72.0 / 25.4
}

/// Points to millimetres
pub fn pt_to_mm(pt: f64) -> f64 {
    pt * 25.4 / 72.0
}
