//! Logo, company identity, banner and amount-due box

use crate::constants::*;
use crate::cursor::PageCursor;
use crate::logo::Logo;
use crate::metrics::FontSpec;
use crate::page::DrawCommand;
use crate::renderer::RenderContext;
use invoice_text::format_money;
use pdf_core::{calculate_scaled_dimensions, Align, Color, ImageScaleMode, PaintMode};

/// Draw the logo (or its placeholder) and reserve the logo band
///
/// Both paths advance the cursor by the same amount.
pub fn render_logo(cursor: &mut PageCursor, logo: &Logo) {
    let x = cursor.geometry().margin;
    let y = cursor.y();

    match logo {
        Logo::Bytes {
            data,
            width,
            height,
        } => {
            let (w, h) = calculate_scaled_dimensions(
                *width,
                *height,
                LOGO_SIZE,
                LOGO_SIZE,
                ImageScaleMode::FitBox,
            );
            cursor.draw(DrawCommand::Image {
                x,
                y,
                width: w,
                height: h,
                data: data.clone(),
            });
        }
        Logo::Unavailable => draw_placeholder(cursor, x, y),
    }

    cursor.advance(LOGO_BAND);
}

/// Blue disc with a white line-and-ring glyph
fn draw_placeholder(cursor: &mut PageCursor, x: f64, y: f64) {
    let radius = LOGO_SIZE / 2.0;
    let (cx, cy) = (x + radius, y + radius);

    cursor.draw(DrawCommand::Circle {
        cx,
        cy,
        radius,
        color: brand_blue(),
        line_width: 0.0,
        mode: PaintMode::Fill,
    });

    for dy in [-2.0, 0.0, 2.0] {
        cursor.draw(DrawCommand::Line {
            x1: x + 5.0,
            y1: cy + dy,
            x2: x + 11.0,
            y2: cy + dy,
            color: Color::white(),
            width: LOGO_GLYPH_LINE_WIDTH,
        });
    }

    for (ring_x, ring_y) in [(x + 6.5, cy), (x + 9.5, cy - 2.0)] {
        cursor.draw(DrawCommand::Circle {
            cx: ring_x,
            cy: ring_y,
            radius: 1.0,
            color: Color::white(),
            line_width: LOGO_GLYPH_LINE_WIDTH,
            mode: PaintMode::Stroke,
        });
    }
}

/// Company name and contact lines on the left
///
/// Leaves the cursor on the last baseline and returns it.
pub fn render_company(cursor: &mut PageCursor, ctx: &RenderContext) -> f64 {
    let company = ctx.company;
    let x = cursor.geometry().margin;
    let text_font = FontSpec::regular(COMPANY_TEXT_SIZE);

    cursor.draw(DrawCommand::text(
        x,
        cursor.y(),
        company.name.as_str(),
        FontSpec::bold(COMPANY_NAME_SIZE),
    ));
    cursor.advance(COMPANY_NAME_GAP);

    cursor.draw(DrawCommand::text(x, cursor.y(), company.address.as_str(), text_font));
    cursor.advance(COMPANY_LINE_PITCH);
    cursor.draw(DrawCommand::text(x, cursor.y(), company.city.as_str(), text_font));
    cursor.advance(COMPANY_LINE_PITCH);
    cursor.draw(
        DrawCommand::text(x, cursor.y(), company.email.as_str(), text_font).colored(brand_blue()),
    );
    cursor.advance(COMPANY_LINE_PITCH);
    cursor.draw(DrawCommand::text(
        x,
        cursor.y(),
        format!("Business Number: {}", company.business_number),
        text_font,
    ));

    cursor.y()
}

/// Document-type word and number/date lines on the right
///
/// Positions are fixed from the top margin; the cursor is not moved.
/// Returns the last meta baseline.
pub fn render_banner(cursor: &mut PageCursor, ctx: &RenderContext) -> f64 {
    let document = ctx.document;
    let geometry = *cursor.geometry();
    let x = geometry.right_edge();
    let mut y = geometry.margin + BANNER_OFFSET;

    cursor.draw(
        DrawCommand::text(x, y, document.document_type.label(), FontSpec::regular(BANNER_SIZE))
            .colored(Color::gray(BANNER_GRAY))
            .aligned(Align::Right),
    );

    let meta_font = FontSpec::bold(BANNER_META_SIZE);
    let lines = [
        format!(
            "{} {}",
            document.document_type.number_label(),
            document.document_number
        ),
        format!("DATE: {}", document.issue_date),
        format!("DATE DUE: {}", document.due_date),
    ];

    y += BANNER_META_GAP;
    for (index, line) in lines.into_iter().enumerate() {
        if index > 0 {
            y += BANNER_META_PITCH;
        }
        cursor.draw(DrawCommand::text(x, y, line, meta_font).aligned(Align::Right));
    }

    y
}

/// Stroked box on the right margin holding the grand total
///
/// The box sits below the lower of the company block and banner; the cursor
/// moves below both the box and the company block.
pub fn render_amount_due(
    cursor: &mut PageCursor,
    ctx: &RenderContext,
    company_bottom: f64,
    banner_bottom: f64,
) {
    let document = ctx.document;
    let right = cursor.geometry().right_edge();
    let baseline = company_bottom.max(banner_bottom) + AMOUNT_BOX_GAP;

    cursor.draw(DrawCommand::StrokeRect {
        x: right - AMOUNT_BOX_WIDTH,
        y: baseline - AMOUNT_BOX_RISE,
        width: AMOUNT_BOX_WIDTH,
        height: AMOUNT_BOX_HEIGHT,
        color: Color::gray(AMOUNT_BOX_GRAY),
        line_width: AMOUNT_BOX_LINE_WIDTH,
    });

    let text = format!(
        "Amount Due: {}",
        format_money(&document.currency_symbol, document.grand_total)
    );
    cursor.draw(
        DrawCommand::text(
            right - AMOUNT_BOX_WIDTH / 2.0,
            baseline + AMOUNT_TEXT_DROP,
            text,
            FontSpec::bold(AMOUNT_TEXT_SIZE),
        )
        .aligned(Align::Center),
    );

    cursor.set_y(
        (company_bottom + AMOUNT_COMPANY_CLEARANCE).max(baseline + AMOUNT_BOX_CLEARANCE),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::FooterStamp;
    use crate::metrics::HelveticaMetrics;
    use crate::page::PageGeometry;
    use crate::{CompanyProfile, InvoiceDocument};
    use pretty_assertions::assert_eq;

    fn new_cursor() -> PageCursor {
        PageCursor::new(
            PageGeometry::default(),
            FooterStamp::from_company(&CompanyProfile::default()),
        )
    }

    fn document() -> InvoiceDocument {
        InvoiceDocument {
            document_number: "2025010542".to_string(),
            issue_date: "JAN 5, 2025".to_string(),
            due_date: "FEB 4, 2025".to_string(),
            grand_total: 753.76,
            currency_symbol: "US$".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_placeholder_and_image_reserve_same_band() {
        let mut placeholder = new_cursor();
        render_logo(&mut placeholder, &Logo::Unavailable);

        let mut image = new_cursor();
        let logo = Logo::Bytes {
            data: vec![1, 2, 3],
            width: 200,
            height: 100,
        };
        render_logo(&mut image, &logo);

        assert_eq!(placeholder.y(), 40.0);
        assert_eq!(image.y(), placeholder.y());
    }

    #[test]
    fn test_placeholder_glyph() {
        let mut cursor = new_cursor();
        render_logo(&mut cursor, &Logo::Unavailable);
        let pages = cursor.finish();
        let commands = pages.pages[0].commands();

        assert_eq!(
            commands[0],
            DrawCommand::Circle {
                cx: 28.0,
                cy: 28.0,
                radius: 8.0,
                color: brand_blue(),
                line_width: 0.0,
                mode: PaintMode::Fill,
            }
        );
        let lines = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(lines, 3);
    }

    #[test]
    fn test_image_fit_box() {
        let mut cursor = new_cursor();
        let logo = Logo::Bytes {
            data: vec![0],
            width: 200,
            height: 100,
        };
        render_logo(&mut cursor, &logo);
        let pages = cursor.finish();
        match &pages.pages[0].commands()[0] {
            DrawCommand::Image {
                x,
                y,
                width,
                height,
                ..
            } => {
                assert_eq!((*x, *y), (20.0, 20.0));
                assert_eq!((*width, *height), (16.0, 8.0));
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn test_header_positions() {
        let company = CompanyProfile::default();
        let document = document();
        let ctx = RenderContext {
            document: &document,
            company: &company,
            metrics: &HelveticaMetrics,
        };

        let mut cursor = new_cursor();
        render_logo(&mut cursor, &Logo::Unavailable);
        let company_bottom = render_company(&mut cursor, &ctx);
        let banner_bottom = render_banner(&mut cursor, &ctx);
        render_amount_due(&mut cursor, &ctx, company_bottom, banner_bottom);

        assert_eq!(company_bottom, 57.0);
        assert_eq!(banner_bottom, 54.0);
        assert_eq!(cursor.y(), 74.0);

        let pages = cursor.finish();
        let page = &pages.pages[0];
        assert_eq!(page.find_text_y("EVO-IN-MOTION Technology Ltd."), Some(40.0));
        assert_eq!(page.find_text_y("Business Number: 769120726"), Some(57.0));
        assert_eq!(page.find_text_y("INVOICE"), Some(30.0));
        assert_eq!(page.find_text_y("INV# 2025010542"), Some(45.0));
        assert_eq!(page.find_text_y("DATE: JAN 5, 2025"), Some(49.5));
        assert_eq!(page.find_text_y("DATE DUE: FEB 4, 2025"), Some(54.0));
        assert_eq!(page.find_text_y("Amount Due: US$753.76"), Some(64.5));
        assert!(page.commands().contains(&DrawCommand::StrokeRect {
            x: 130.0,
            y: 58.0,
            width: 60.0,
            height: 10.0,
            color: Color::gray(180),
            line_width: 0.4,
        }));
    }
}
