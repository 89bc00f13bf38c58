//! PDF serialization of rendered pages

use crate::logo::{Logo, LogoFetcher, LogoSource};
use crate::page::{DrawCommand, RenderedPageSet};
use crate::renderer::{render, InvoiceRenderer};
use crate::{CompanyProfile, InvoiceDocument, Result};
use pdf_core::{mm_to_pt, PaintMode, PdfDocument};
use std::path::{Path, PathBuf};

/// File name of the exported document (e.g. "INVOICE_2025010542.pdf")
pub fn output_file_name(document: &InvoiceDocument) -> String {
    format!(
        "{}_{}.pdf",
        document.document_type.label(),
        document.document_number
    )
}

/// Serialize rendered pages into PDF bytes
pub fn write_pdf(pages: &RenderedPageSet, title: &str) -> Result<Vec<u8>> {
    let geometry = pages.geometry;
    let mut doc = PdfDocument::with_page_size(mm_to_pt(geometry.width), mm_to_pt(geometry.height));
    doc.set_title(title);

    for page in &pages.pages {
        let page_number = doc.add_blank_page();
        for command in page.commands() {
            draw_command(&mut doc, page_number, command)?;
        }
    }

    Ok(doc.to_bytes()?)
}

fn draw_command(doc: &mut PdfDocument, page: usize, command: &DrawCommand) -> Result<()> {
    match command {
        DrawCommand::Text {
            x,
            y,
            text,
            font,
            color,
            align,
        } => {
            doc.set_font(font.weight, font.style, font.size);
            doc.set_text_color(*color);
            doc.insert_text(text, page, mm_to_pt(*x), mm_to_pt(*y), *align)?;
        }
        DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        } => {
            doc.set_stroke_color(*color);
            doc.set_line_width(mm_to_pt(*width));
            doc.draw_line(
                page,
                mm_to_pt(*x1),
                mm_to_pt(*y1),
                mm_to_pt(*x2),
                mm_to_pt(*y2),
            )?;
        }
        DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        } => {
            doc.set_fill_color(*color);
            doc.draw_rect(
                page,
                mm_to_pt(*x),
                mm_to_pt(*y),
                mm_to_pt(*width),
                mm_to_pt(*height),
                PaintMode::Fill,
            )?;
        }
        DrawCommand::StrokeRect {
            x,
            y,
            width,
            height,
            color,
            line_width,
        } => {
            doc.set_stroke_color(*color);
            doc.set_line_width(mm_to_pt(*line_width));
            doc.draw_rect(
                page,
                mm_to_pt(*x),
                mm_to_pt(*y),
                mm_to_pt(*width),
                mm_to_pt(*height),
                PaintMode::Stroke,
            )?;
        }
        DrawCommand::Circle {
            cx,
            cy,
            radius,
            color,
            line_width,
            mode,
        } => {
            doc.set_fill_color(*color);
            doc.set_stroke_color(*color);
            doc.set_line_width(mm_to_pt(*line_width));
            doc.draw_circle(page, mm_to_pt(*cx), mm_to_pt(*cy), mm_to_pt(*radius), *mode)?;
        }
        DrawCommand::Image {
            x,
            y,
            width,
            height,
            data,
        } => {
            doc.insert_image(
                data,
                page,
                mm_to_pt(*x),
                mm_to_pt(*y),
                mm_to_pt(*width),
                mm_to_pt(*height),
            )?;
        }
    }
    Ok(())
}

/// Lay out `document` and serialize it to PDF bytes
pub fn render_pdf(
    document: &InvoiceDocument,
    logo: &Logo,
    company: &CompanyProfile,
) -> Result<Vec<u8>> {
    let pages = render(document, logo, company);
    write_pdf(&pages, &document_title(document))
}

/// Resolve the logo, lay out `document` and write it into `out_dir`
///
/// Logo failures degrade to the placeholder; only PDF encoding and file
/// writing errors are returned.
pub async fn render_to_file<F: LogoFetcher>(
    document: &InvoiceDocument,
    source: LogoSource,
    fetcher: &F,
    company: &CompanyProfile,
    out_dir: &Path,
) -> Result<PathBuf> {
    let pages = InvoiceRenderer::new(company)
        .render_with_source(document, source, fetcher)
        .await;
    let bytes = write_pdf(&pages, &document_title(document))?;

    let path = out_dir.join(output_file_name(document));
    std::fs::write(&path, bytes)?;
    log::info!(
        "wrote {} ({} page(s))",
        path.display(),
        pages.page_count()
    );
    Ok(path)
}

fn document_title(document: &InvoiceDocument) -> String {
    format!(
        "{} {}",
        document.document_type.label(),
        document.document_number
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_file_name() {
        let mut document = InvoiceDocument {
            document_number: "2025010542".to_string(),
            ..Default::default()
        };
        assert_eq!(output_file_name(&document), "INVOICE_2025010542.pdf");

        document.document_type = DocumentType::Quote;
        document.document_number.push('Q');
        assert_eq!(output_file_name(&document), "QUOTE_2025010542Q.pdf");
    }

    #[test]
    fn test_render_pdf_loads() {
        let document = InvoiceDocument {
            document_number: "1".to_string(),
            currency_symbol: "US$".to_string(),
            ..Default::default()
        };
        let bytes = render_pdf(&document, &Logo::Unavailable, &CompanyProfile::default()).unwrap();
        let loaded = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(loaded.get_pages().len(), 1);
    }

    #[test]
    fn test_corrupt_image_command_is_fatal() {
        let mut pages = render(
            &InvoiceDocument::default(),
            &Logo::Unavailable,
            &CompanyProfile::default(),
        );
        pages.pages[0].push(DrawCommand::Image {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            data: b"junk".to_vec(),
        });
        assert!(write_pdf(&pages, "broken").is_err());
    }
}
