//! Subtotal, shipping, taxes and total-due grid

use crate::constants::*;
use crate::cursor::PageCursor;
use crate::metrics::FontSpec;
use crate::page::DrawCommand;
use crate::renderer::RenderContext;
use crate::InvoiceDocument;
use invoice_text::format_money;
use pdf_core::{Align, Color};

/// Visual emphasis of a summary row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// Bold, no fill
    Plain,
    /// Italic gray text on a light tint
    Tax,
    /// Bold on a heavier tint
    Total,
}

/// One label/value row of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
    pub style: RowStyle,
}

/// Shipping cell text: "N/A" when there is no shipping charge
pub fn shipping_value(document: &InvoiceDocument) -> String {
    if document.shipping_cost == 0.0 {
        "N/A".to_string()
    } else {
        format_money(&document.currency_symbol, document.shipping_cost)
    }
}

/// Rows in display order
pub fn summary_rows(document: &InvoiceDocument) -> Vec<SummaryRow> {
    let currency = &document.currency_symbol;
    let mut rows = Vec::with_capacity(document.taxes.len() + 3);

    rows.push(SummaryRow {
        label: "SUBTOTAL".to_string(),
        value: format_money(currency, document.subtotal),
        style: RowStyle::Plain,
    });
    rows.push(SummaryRow {
        label: "SHIPPING".to_string(),
        value: shipping_value(document),
        style: RowStyle::Plain,
    });
    for tax in &document.taxes {
        rows.push(SummaryRow {
            label: tax.label.clone(),
            value: format_money(currency, tax.amount),
            style: RowStyle::Tax,
        });
    }
    rows.push(SummaryRow {
        label: "TOTAL DUE".to_string(),
        value: format_money(currency, document.grand_total),
        style: RowStyle::Total,
    });

    rows
}

/// Height the grid needs, together with the payment instructions below it
pub fn summary_block_height(row_count: usize) -> f64 {
    row_count as f64 * SUMMARY_ROW_HEIGHT + PAYMENT_GAP + THANK_YOU_DROP
}

/// Draw the grid, breaking to a new page first if it would not fit
pub fn render_summary(cursor: &mut PageCursor, ctx: &RenderContext) {
    let rows = summary_rows(ctx.document);

    if cursor.ensure_space(summary_block_height(rows.len())) {
        cursor.advance(SUMMARY_CONTINUATION_GAP);
    }

    for row in &rows {
        draw_row(cursor, row);
    }
}

fn draw_row(cursor: &mut PageCursor, row: &SummaryRow) {
    let right = cursor.geometry().right_edge();
    let left = right - SUMMARY_WIDTH;
    let label_x = left + SUMMARY_LABEL_INSET;
    let top = cursor.y();
    let bottom = top + SUMMARY_ROW_HEIGHT;

    let fill = match row.style {
        RowStyle::Plain => None,
        RowStyle::Tax => Some(summary_tax_fill()),
        RowStyle::Total => Some(summary_total_fill()),
    };
    if let Some(color) = fill {
        cursor.draw(DrawCommand::FillRect {
            x: left,
            y: top,
            width: SUMMARY_WIDTH,
            height: SUMMARY_ROW_HEIGHT,
            color,
        });
    }

    let border = Color::gray(SUMMARY_BORDER_GRAY);
    for (x1, y1, x2, y2) in [
        (left, top, right, top),
        (left, bottom, right, bottom),
        (left, top, left, bottom),
        (right, top, right, bottom),
    ] {
        cursor.draw(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color: border,
            width: SUMMARY_BORDER_WIDTH,
        });
    }

    let (font, label_color) = match row.style {
        RowStyle::Tax => (
            FontSpec::italic(SUMMARY_TEXT_SIZE),
            Color::gray(SUMMARY_TAX_TEXT_GRAY),
        ),
        RowStyle::Plain | RowStyle::Total => (FontSpec::bold(SUMMARY_TEXT_SIZE), Color::black()),
    };
    let baseline = top + SUMMARY_TEXT_DROP;

    cursor.draw(DrawCommand::text(label_x, baseline, row.label.as_str(), font).colored(label_color));
    cursor.draw(
        DrawCommand::text(right - SUMMARY_VALUE_INSET, baseline, row.value.as_str(), font)
            .aligned(Align::Right),
    );

    cursor.advance(SUMMARY_ROW_HEIGHT);
}
