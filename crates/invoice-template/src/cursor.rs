//! Vertical write position and page flow

use crate::blocks::FooterStamp;
use crate::page::{DrawCommand, Page, PageGeometry, RenderedPageSet};

/// Current write position of a render
///
/// The cursor owns the pages produced so far. Leaving a page, either through
/// [`PageCursor::ensure_space`] or [`PageCursor::new_page`], stamps the footer
/// on it; [`PageCursor::finish`] stamps the last one. Stamping is idempotent,
/// so every page carries exactly one footer.
pub struct PageCursor {
    geometry: PageGeometry,
    y: f64,
    pages: Vec<Page>,
    footer: FooterStamp,
}

impl PageCursor {
    /// Start on a fresh first page at the top margin
    pub fn new(geometry: PageGeometry, footer: FooterStamp) -> Self {
        Self {
            geometry,
            y: geometry.margin,
            pages: vec![Page::new()],
            footer,
        }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn advance(&mut self, dy: f64) {
        self.y += dy;
    }

    /// Zero-based index of the current page
    pub fn page_index(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Whether `height` more millimetres fit above the bottom margin
    pub fn fits(&self, height: f64) -> bool {
        self.y + height <= self.geometry.bottom_limit()
    }

    /// Break to a new page unless `height` fits on the current one
    ///
    /// Returns `true` when a break happened. The new page starts at the top
    /// margin.
    pub fn ensure_space(&mut self, height: f64) -> bool {
        if self.fits(height) {
            return false;
        }
        log::debug!(
            "page break: y={:.2}mm + {:.2}mm exceeds {:.2}mm",
            self.y,
            height,
            self.geometry.bottom_limit()
        );
        self.new_page();
        true
    }

    /// Unconditional page break
    pub fn new_page(&mut self) {
        self.stamp_footer();
        self.pages.push(Page::new());
        self.y = self.geometry.margin;
    }

    /// Draw the footer stamp on the current page if it has none yet
    pub fn stamp_footer(&mut self) {
        let geometry = self.geometry;
        let footer = &self.footer;
        if let Some(page) = self.pages.last_mut() {
            if !page.is_footer_stamped() {
                footer.draw(page, &geometry);
                page.mark_footer_stamped();
            }
        }
    }

    /// Append a command to the current page
    pub fn draw(&mut self, command: DrawCommand) {
        if let Some(page) = self.pages.last_mut() {
            page.push(command);
        }
    }

    /// Stamp the last page and hand over the finished pages
    pub fn finish(mut self) -> RenderedPageSet {
        self.stamp_footer();
        RenderedPageSet {
            geometry: self.geometry,
            pages: self.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FontSpec;
    use pretty_assertions::assert_eq;

    fn cursor() -> PageCursor {
        let footer = FooterStamp {
            legal: "legal".to_string(),
            site: "site".to_string(),
        };
        PageCursor::new(PageGeometry::default(), footer)
    }

    #[test]
    fn test_starts_at_margin() {
        let cursor = cursor();
        assert_eq!(cursor.y(), 20.0);
        assert_eq!(cursor.page_index(), 0);
    }

    #[test]
    fn test_advance() {
        let mut cursor = cursor();
        cursor.advance(20.0);
        cursor.advance(5.5);
        assert_eq!(cursor.y(), 45.5);
    }

    #[test]
    fn test_ensure_space_fits() {
        let mut cursor = cursor();
        cursor.set_y(270.0);
        assert!(!cursor.ensure_space(7.0));
        assert_eq!(cursor.page_index(), 0);
        assert_eq!(cursor.y(), 270.0);
    }

    #[test]
    fn test_ensure_space_breaks() {
        let mut cursor = cursor();
        cursor.set_y(270.0);
        assert!(cursor.ensure_space(7.5));
        assert_eq!(cursor.page_index(), 1);
        assert_eq!(cursor.y(), 20.0);
    }

    #[test]
    fn test_footer_once_per_page() {
        let mut cursor = cursor();
        cursor.stamp_footer();
        cursor.stamp_footer();
        cursor.new_page();
        cursor.draw(DrawCommand::text(20.0, 20.0, "body", FontSpec::regular(9.0)));
        cursor.stamp_footer();

        let pages = cursor.finish();
        assert_eq!(pages.page_count(), 2);
        for page in &pages.pages {
            assert_eq!(page.count_text("legal"), 1);
            assert_eq!(page.count_text("site"), 1);
            assert!(page.is_footer_stamped());
        }
    }

    #[test]
    fn test_finish_stamps_last_page() {
        let pages = cursor().finish();
        assert_eq!(pages.page_count(), 1);
        assert_eq!(pages.pages[0].count_text("legal"), 1);
    }
}
