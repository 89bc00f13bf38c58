//! Paginated item table
//!
//! Four columns: a flexible description column and three fixed 30mm columns
//! (quantity, unit price, line total). Rows are single-line; descriptions are
//! drawn as given. The header row is repeated at the top of every page that
//! holds data rows.

use crate::constants::*;
use crate::cursor::PageCursor;
use crate::metrics::FontSpec;
use crate::page::DrawCommand;
use crate::renderer::RenderContext;
use crate::LineItem;
use invoice_text::{format_money, format_number};
use pdf_core::{pt_to_mm, Align, Color};

/// Height of one table row in millimetres
///
/// One line of text at the table font size plus padding above and below.
pub fn row_height() -> f64 {
    pt_to_mm(TABLE_FONT_SIZE as f64 * TABLE_LINE_HEIGHT_FACTOR) + 2.0 * TABLE_CELL_PADDING
}

/// Column (left x, width) pairs for a content area starting at `left`
fn columns(left: f64, content_width: f64) -> [(f64, f64); 4] {
    let fixed = TABLE_FIXED_COLUMN_WIDTH;
    let description = content_width - 3.0 * fixed;
    [
        (left, description),
        (left + description, fixed),
        (left + description + fixed, fixed),
        (left + description + 2.0 * fixed, fixed),
    ]
}

/// Cell texts of one data row
pub fn row_cells(item: &LineItem, currency: &str) -> [String; 4] {
    [
        item.description.clone(),
        format_number(item.quantity),
        format_money(currency, item.unit_price),
        format_money(currency, item.line_total),
    ]
}

/// Draw the table starting at the cursor, breaking pages as rows overflow
pub fn render_item_table(cursor: &mut PageCursor, ctx: &RenderContext) {
    let document = ctx.document;
    let height = row_height();

    // Never leave a header alone at the bottom of a page
    let opening = if document.line_items.is_empty() {
        height
    } else {
        2.0 * height
    };
    cursor.ensure_space(opening);
    draw_row(cursor, &TABLE_HEADERS.map(String::from), true);

    for item in &document.line_items {
        if cursor.ensure_space(height) {
            draw_row(cursor, &TABLE_HEADERS.map(String::from), true);
        }
        draw_row(cursor, &row_cells(item, &document.currency_symbol), false);
    }
}

fn draw_row(cursor: &mut PageCursor, cells: &[String; 4], header: bool) {
    let geometry = *cursor.geometry();
    let height = row_height();
    let top = cursor.y();
    let font = if header {
        FontSpec::bold(TABLE_FONT_SIZE)
    } else {
        FontSpec::regular(TABLE_FONT_SIZE)
    };
    let cap_height = pt_to_mm(TABLE_FONT_SIZE as f64 * CAP_HEIGHT_RATIO);
    let baseline = top + height / 2.0 + cap_height / 2.0;

    for ((x, width), text) in columns(geometry.margin, geometry.content_width())
        .into_iter()
        .zip(cells)
    {
        cursor.draw(DrawCommand::StrokeRect {
            x,
            y: top,
            width,
            height,
            color: Color::gray(TABLE_GRID_GRAY),
            line_width: TABLE_GRID_LINE_WIDTH,
        });
        if !text.is_empty() {
            cursor.draw(
                DrawCommand::text(x + width / 2.0, baseline, text.as_str(), font)
                    .aligned(Align::Center),
            );
        }
    }

    cursor.advance(height);
}
