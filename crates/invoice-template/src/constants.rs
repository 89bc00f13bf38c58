//! Fixed layout constants
//!
//! Distances are millimetres with Y measured from the top of the page.
//! Font sizes are points.

use pdf_core::Color;

/// A4 width
pub const PAGE_WIDTH: f64 = 210.0;
/// A4 height
pub const PAGE_HEIGHT: f64 = 297.0;
/// Margin on every side
pub const MARGIN: f64 = 20.0;

/// Brand blue used for the logo placeholder, links and the site line
pub fn brand_blue() -> Color {
    Color::from_rgb(0, 86, 179)
}

// Logo

/// Side of the square the logo is drawn into
pub const LOGO_SIZE: f64 = 16.0;
/// Vertical band reserved for the logo, image or placeholder
pub const LOGO_BAND: f64 = 20.0;
/// Placeholder line width
pub const LOGO_GLYPH_LINE_WIDTH: f64 = 0.5;

// Company block

pub const COMPANY_NAME_SIZE: f32 = 10.0;
pub const COMPANY_TEXT_SIZE: f32 = 9.0;
/// Gap between the name and the first address line
pub const COMPANY_NAME_GAP: f64 = 5.0;
pub const COMPANY_LINE_PITCH: f64 = 4.0;

// Banner

pub const BANNER_SIZE: f32 = 32.0;
pub const BANNER_GRAY: u8 = 200;
/// Banner baseline below the top margin
pub const BANNER_OFFSET: f64 = 10.0;
/// Gap from the banner baseline to the number line
pub const BANNER_META_GAP: f64 = 15.0;
pub const BANNER_META_SIZE: f32 = 9.0;
pub const BANNER_META_PITCH: f64 = 4.5;

// Amount-due box

pub const AMOUNT_BOX_WIDTH: f64 = 60.0;
pub const AMOUNT_BOX_HEIGHT: f64 = 10.0;
/// Gap from the lower of company/banner bottoms to the box baseline
pub const AMOUNT_BOX_GAP: f64 = 7.0;
/// Box top above the baseline
pub const AMOUNT_BOX_RISE: f64 = 6.0;
/// Text baseline below the box baseline
pub const AMOUNT_TEXT_DROP: f64 = 0.5;
pub const AMOUNT_TEXT_SIZE: f32 = 11.0;
pub const AMOUNT_BOX_GRAY: u8 = 180;
pub const AMOUNT_BOX_LINE_WIDTH: f64 = 0.4;
/// Minimum distance from the company bottom to the recipients
pub const AMOUNT_COMPANY_CLEARANCE: f64 = 15.0;
/// Distance from the box baseline to the recipients
pub const AMOUNT_BOX_CLEARANCE: f64 = 10.0;

// Recipients

pub const RECIPIENT_HEADING_SIZE: f32 = 10.5;
pub const RECIPIENT_TEXT_SIZE: f32 = 9.5;
pub const RECIPIENT_HEADING_GAP: f64 = 6.0;
pub const RECIPIENT_LINE_PITCH: f64 = 4.8;
/// Horizontal inset subtracted from the column width when wrapping
pub const RECIPIENT_INSET: f64 = 10.0;
pub const RECIPIENT_GAP: f64 = 8.0;

// Item table

pub const TABLE_FONT_SIZE: f32 = 9.5;
pub const TABLE_LINE_HEIGHT_FACTOR: f64 = 1.15;
pub const TABLE_CELL_PADDING: f64 = 2.5;
/// Width of quantity, unit price and total columns
pub const TABLE_FIXED_COLUMN_WIDTH: f64 = 30.0;
pub const TABLE_GRID_GRAY: u8 = 220;
pub const TABLE_GRID_LINE_WIDTH: f64 = 0.1;
pub const TABLE_HEADERS: [&str; 4] = ["DESCRIPTION", "TOTAL QTY", "UNIT PRICE", "TOTAL"];

/// Helvetica cap height as a fraction of the font size
pub const CAP_HEIGHT_RATIO: f64 = 0.718;

// Summary grid

pub const SUMMARY_ROW_HEIGHT: f64 = 7.0;
pub const SUMMARY_WIDTH: f64 = 59.0;
/// Label inset from the grid's left edge
pub const SUMMARY_LABEL_INSET: f64 = 4.0;
/// Value inset from the right margin
pub const SUMMARY_VALUE_INSET: f64 = 2.0;
pub const SUMMARY_TEXT_DROP: f64 = 4.8;
pub const SUMMARY_TEXT_SIZE: f32 = 9.0;
pub const SUMMARY_BORDER_GRAY: u8 = 210;
pub const SUMMARY_BORDER_WIDTH: f64 = 0.1;
pub const SUMMARY_TAX_TEXT_GRAY: u8 = 80;
/// Extra offset below the top margin when the summary starts a page
pub const SUMMARY_CONTINUATION_GAP: f64 = 5.0;

pub fn summary_tax_fill() -> Color {
    Color::from_rgb(248, 250, 253)
}

pub fn summary_total_fill() -> Color {
    Color::from_rgb(235, 240, 247)
}

// Payment instructions

/// Lowest starting offset of the payment footer, measured from the page bottom
pub const PAYMENT_BOTTOM_OFFSET: f64 = 45.0;
pub const PAYMENT_GAP: f64 = 10.0;
pub const PAYMENT_TEXT_SIZE: f32 = 9.0;
pub const PAYMENT_LINE_PITCH: f64 = 5.0;
/// X offset of the company name after "Make all checks payable to"
pub const PAYMENT_NAME_OFFSET: f64 = 40.0;
/// X offset of the e-transfer address
pub const PAYMENT_EMAIL_OFFSET: f64 = 28.0;
pub const THANK_YOU_SIZE: f32 = 12.0;
pub const THANK_YOU_DROP: f64 = 24.0;

// Footer stamp

/// Legal line distance from the page bottom
pub const FOOTER_BOTTOM_OFFSET: f64 = 12.0;
pub const FOOTER_LINE_PITCH: f64 = 3.0;
pub const FOOTER_TEXT_SIZE: f32 = 7.0;
pub const FOOTER_GRAY: u8 = 150;
