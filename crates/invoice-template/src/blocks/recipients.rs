//! Billing and shipping recipient columns

use crate::constants::{
    RECIPIENT_GAP, RECIPIENT_HEADING_GAP, RECIPIENT_HEADING_SIZE, RECIPIENT_INSET,
    RECIPIENT_LINE_PITCH, RECIPIENT_TEXT_SIZE,
};
use crate::cursor::PageCursor;
use crate::metrics::FontSpec;
use crate::page::DrawCommand;
use crate::renderer::RenderContext;
use crate::Party;

/// Wrapped lines of one recipient column
pub fn recipient_lines(ctx: &RenderContext, party: &Party, column_width: f64) -> Vec<String> {
    let content = party.display_lines().join("\n");
    ctx.metrics.wrap(
        &content,
        FontSpec::regular(RECIPIENT_TEXT_SIZE),
        column_width - RECIPIENT_INSET,
    )
}

/// Two equal columns; the cursor advances by the taller one
pub fn render_recipients(cursor: &mut PageCursor, ctx: &RenderContext) {
    let geometry = *cursor.geometry();
    let column_width = geometry.content_width() / 2.0;
    let left = geometry.margin;
    let right = geometry.margin + column_width;

    let heading_font = FontSpec::bold(RECIPIENT_HEADING_SIZE);
    cursor.draw(DrawCommand::text(left, cursor.y(), "BILLING RECIPIENT", heading_font));
    cursor.draw(DrawCommand::text(right, cursor.y(), "SHIPPING RECIPIENT", heading_font));
    cursor.advance(RECIPIENT_HEADING_GAP);

    let billing = recipient_lines(ctx, &ctx.document.billing_party, column_width);
    let shipping = recipient_lines(ctx, &ctx.document.shipping_party, column_width);

    let text_font = FontSpec::regular(RECIPIENT_TEXT_SIZE);
    for (x, lines) in [(left, &billing), (right, &shipping)] {
        let mut y = cursor.y();
        for line in lines {
            if !line.is_empty() {
                cursor.draw(DrawCommand::text(x, y, line.as_str(), text_font));
            }
            y += RECIPIENT_LINE_PITCH;
        }
    }

    let max_lines = billing.len().max(shipping.len());
    cursor.advance(max_lines as f64 * RECIPIENT_LINE_PITCH + RECIPIENT_GAP);
}
