//! Invoice Template - invoice/quote layout engine
//!
//! This crate provides:
//! - The invoice document model and JSON parsing
//! - The editable form layer with derived totals
//! - A deterministic vertical-flow layout (page cursor, block renderers,
//!   paginated item table) producing a [`RenderedPageSet`]
//! - Logo resolution with a drawn placeholder fallback
//! - PDF emission through `pdf-core`
//!
//! # Example
//!
//! ```ignore
//! use invoice_template::{parse_document, render_pdf, CompanyProfile, Logo};
//!
//! let document = parse_document(json)?;
//! let company = CompanyProfile::default();
//! let pdf_bytes = render_pdf(&document, &Logo::Unavailable, &company)?;
//! ```

pub mod blocks;
pub mod constants;
mod cursor;
mod emit;
mod form;
mod logo;
mod metrics;
mod page;
pub mod parser;
mod renderer;
mod schema;
mod table;

pub use cursor::PageCursor;
pub use emit::{output_file_name, render_pdf, render_to_file, write_pdf};
pub use form::{
    compute_totals, parse_numeric_input, FormItem, InvoiceForm, ItemField, PartyField, TaxSetting,
    Totals,
};
pub use logo::{resolve_logo, Logo, LogoError, LogoFetcher, LogoSource, NoFetch};
pub use metrics::{FontSpec, HelveticaMetrics, TextMetrics};
pub use page::{DrawCommand, Page, PageGeometry, RenderedPageSet};
pub use parser::{parse_company, parse_document};
pub use renderer::{render, InvoiceRenderer, RenderContext};
pub use schema::*;
pub use table::row_height;

use thiserror::Error;

/// Errors that can occur while building or emitting a document
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse document: {0}")]
    ParseError(String),

    #[error("PDF error: {0}")]
    PdfError(#[from] pdf_core::PdfError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Text error: {0}")]
    TextError(#[from] invoice_text::TextError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
