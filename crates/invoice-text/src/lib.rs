//! Invoice Text - text utilities for the invoice layout engine
//!
//! This crate provides:
//! - Greedy word wrapping against a caller-supplied width measure
//! - Money formatting (`{currency}{value:.2}`, no thousands separators)
//! - Display dates (`JAN 5, 2025`) and due-date arithmetic
//! - Document number generation (`YYYYMMDD` + two-digit suffix)
//!
//! # Example
//!
//! ```ignore
//! use invoice_text::{format_money, wrap_text};
//!
//! let lines = wrap_text("Fundamental EE Core", 20.0, |s| s.len() as f64);
//! let total = format_money("US$", 753.76); // "US$753.76"
//! ```

mod formatter;
mod wrap;

pub use formatter::{
    add_days, format_display_date, format_money, format_number, generate_document_number,
    parse_iso_date, to_fixed,
};
pub use wrap::wrap_text;

use thiserror::Error;

/// Errors that can occur during text processing
#[derive(Debug, Error)]
pub enum TextError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type for text operations
pub type Result<T> = std::result::Result<T, TextError>;
