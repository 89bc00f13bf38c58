//! Document assembly

use crate::blocks::{
    render_amount_due, render_banner, render_company, render_logo, render_payment_footer,
    render_recipients, render_summary, FooterStamp,
};
use crate::cursor::PageCursor;
use crate::logo::{resolve_logo, Logo, LogoFetcher, LogoSource};
use crate::metrics::{HelveticaMetrics, TextMetrics};
use crate::page::{PageGeometry, RenderedPageSet};
use crate::table::render_item_table;
use crate::{CompanyProfile, InvoiceDocument};

/// Inputs shared by every block of one render
pub struct RenderContext<'a> {
    pub document: &'a InvoiceDocument,
    pub company: &'a CompanyProfile,
    pub metrics: &'a dyn TextMetrics,
}

/// Lays out invoice documents for one company
pub struct InvoiceRenderer<'a, M: TextMetrics = HelveticaMetrics> {
    company: &'a CompanyProfile,
    metrics: M,
    geometry: PageGeometry,
}

impl<'a> InvoiceRenderer<'a, HelveticaMetrics> {
    /// Create a renderer with the standard Helvetica metrics on A4
    pub fn new(company: &'a CompanyProfile) -> Self {
        Self {
            company,
            metrics: HelveticaMetrics,
            geometry: PageGeometry::default(),
        }
    }
}

impl<'a, M: TextMetrics> InvoiceRenderer<'a, M> {
    /// Use different text metrics
    pub fn with_metrics<N: TextMetrics>(self, metrics: N) -> InvoiceRenderer<'a, N> {
        InvoiceRenderer {
            company: self.company,
            metrics,
            geometry: self.geometry,
        }
    }

    /// Lay out `document` into pages
    ///
    /// Blocks run in a fixed order: logo, company, banner, amount due,
    /// recipients, item table, summary, payment instructions. The last page is
    /// stamped with the footer when the cursor finishes.
    pub fn render(&self, document: &InvoiceDocument, logo: &Logo) -> RenderedPageSet {
        let ctx = RenderContext {
            document,
            company: self.company,
            metrics: &self.metrics,
        };
        let mut cursor = PageCursor::new(self.geometry, FooterStamp::from_company(self.company));

        render_logo(&mut cursor, logo);
        let company_bottom = render_company(&mut cursor, &ctx);
        let banner_bottom = render_banner(&mut cursor, &ctx);
        render_amount_due(&mut cursor, &ctx, company_bottom, banner_bottom);
        render_recipients(&mut cursor, &ctx);
        render_item_table(&mut cursor, &ctx);
        render_summary(&mut cursor, &ctx);
        render_payment_footer(&mut cursor, &ctx);

        let pages = cursor.finish();
        log::debug!(
            "laid out {} {} on {} page(s)",
            document.document_type.label(),
            document.document_number,
            pages.page_count()
        );
        pages
    }

    /// Resolve the logo, then lay out `document`
    pub async fn render_with_source<F: LogoFetcher>(
        &self,
        document: &InvoiceDocument,
        source: LogoSource,
        fetcher: &F,
    ) -> RenderedPageSet {
        let logo = resolve_logo(source, fetcher).await;
        self.render(document, &logo)
    }
}

/// Lay out `document` with the default metrics and page format
pub fn render(document: &InvoiceDocument, logo: &Logo, company: &CompanyProfile) -> RenderedPageSet {
    InvoiceRenderer::new(company).render(document, logo)
}
