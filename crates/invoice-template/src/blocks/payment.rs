//! Payment instructions and thank-you line

use crate::constants::*;
use crate::cursor::PageCursor;
use crate::metrics::FontSpec;
use crate::page::DrawCommand;
use crate::renderer::RenderContext;
use pdf_core::Align;

/// Draw the payment instructions below the summary
///
/// The block never starts above a fixed distance from the page bottom.
pub fn render_payment_footer(cursor: &mut PageCursor, ctx: &RenderContext) {
    let company = ctx.company;
    let geometry = *cursor.geometry();
    let x = geometry.margin;
    let top = (cursor.y() + PAYMENT_GAP).max(geometry.height - PAYMENT_BOTTOM_OFFSET);

    let regular = FontSpec::regular(PAYMENT_TEXT_SIZE);
    let bold = FontSpec::bold(PAYMENT_TEXT_SIZE);

    cursor.draw(DrawCommand::text(x, top, "Make all checks payable to ", regular));
    cursor.draw(DrawCommand::text(
        x + PAYMENT_NAME_OFFSET,
        top,
        company.name.as_str(),
        bold,
    ));

    let transfer_y = top + PAYMENT_LINE_PITCH;
    cursor.draw(DrawCommand::text(x, transfer_y, "Interac e-Transfer: ", regular));
    cursor.draw(
        DrawCommand::text(
            x + PAYMENT_EMAIL_OFFSET,
            transfer_y,
            company.e_transfer_email.as_str(),
            regular,
        )
        .colored(brand_blue()),
    );

    cursor.draw(DrawCommand::text(
        x,
        top + 2.0 * PAYMENT_LINE_PITCH,
        company.pos_note.as_str(),
        regular,
    ));

    let thank_you_y = top + THANK_YOU_DROP;
    cursor.draw(
        DrawCommand::text(
            geometry.width / 2.0,
            thank_you_y,
            company.thank_you.as_str(),
            FontSpec::bold_italic(THANK_YOU_SIZE),
        )
        .aligned(Align::Center),
    );

    cursor.set_y(thank_you_y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::FooterStamp;
    use crate::metrics::HelveticaMetrics;
    use crate::page::PageGeometry;
    use crate::{CompanyProfile, InvoiceDocument};
    use pretty_assertions::assert_eq;

    fn footer_top(start_y: f64) -> f64 {
        let company = CompanyProfile::default();
        let document = InvoiceDocument::default();
        let ctx = RenderContext {
            document: &document,
            company: &company,
            metrics: &HelveticaMetrics,
        };
        let mut cursor = PageCursor::new(
            PageGeometry::default(),
            FooterStamp::from_company(&company),
        );
        cursor.set_y(start_y);
        render_payment_footer(&mut cursor, &ctx);
        let pages = cursor.finish();
        pages.pages[0]
            .find_text_y("Make all checks payable to ")
            .unwrap()
    }

    #[test]
    fn test_short_document_pins_to_bottom() {
        assert_eq!(footer_top(150.0), 252.0);
    }

    #[test]
    fn test_long_document_follows_summary() {
        assert_eq!(footer_top(250.0), 260.0);
    }

    #[test]
    fn test_lines() {
        let company = CompanyProfile::default();
        let document = InvoiceDocument::default();
        let ctx = RenderContext {
            document: &document,
            company: &company,
            metrics: &HelveticaMetrics,
        };
        let mut cursor = PageCursor::new(
            PageGeometry::default(),
            FooterStamp::from_company(&company),
        );
        cursor.set_y(100.0);
        render_payment_footer(&mut cursor, &ctx);
        let pages = cursor.finish();
        let page = &pages.pages[0];

        assert_eq!(page.find_text_y("EVO-IN-MOTION Technology Ltd."), Some(252.0));
        assert_eq!(page.find_text_y("evoinmotion@gmail.com"), Some(257.0));
        assert_eq!(page.find_text_y(&company.pos_note), Some(262.0));
        assert_eq!(page.find_text_y("THANK YOU FOR YOUR BUSINESS!"), Some(276.0));
    }
}
