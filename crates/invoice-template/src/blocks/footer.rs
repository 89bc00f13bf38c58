//! Copyright footer stamp

use crate::constants::{brand_blue, FOOTER_BOTTOM_OFFSET, FOOTER_GRAY, FOOTER_LINE_PITCH, FOOTER_TEXT_SIZE};
use crate::metrics::FontSpec;
use crate::page::{DrawCommand, Page, PageGeometry};
use crate::CompanyProfile;
use pdf_core::{Align, Color};

/// The two right-aligned lines drawn at the bottom of every page
#[derive(Debug, Clone, PartialEq)]
pub struct FooterStamp {
    pub legal: String,
    pub site: String,
}

impl FooterStamp {
    pub fn from_company(company: &CompanyProfile) -> Self {
        Self {
            legal: company.copyright.clone(),
            site: company.website.clone(),
        }
    }

    /// Draw the stamp onto `page`
    pub fn draw(&self, page: &mut Page, geometry: &PageGeometry) {
        let font = FontSpec::regular(FOOTER_TEXT_SIZE);
        let x = geometry.right_edge();
        let y = geometry.height - FOOTER_BOTTOM_OFFSET;

        page.push(
            DrawCommand::text(x, y, self.legal.as_str(), font)
                .colored(Color::gray(FOOTER_GRAY))
                .aligned(Align::Right),
        );
        page.push(
            DrawCommand::text(x, y + FOOTER_LINE_PITCH, self.site.as_str(), font)
                .colored(brand_blue())
                .aligned(Align::Right),
        );
    }
}
