//! PDF Document writer

use crate::font::{FontStyle, FontWeight, StandardFont};
use crate::graphics::{
    generate_circle_operators, generate_line_operators, generate_rect_operators, GraphicsState,
    PaintMode,
};
use crate::image::{
    calculate_scaled_dimensions, generate_image_operators, ImageScaleMode, ImageXObject,
};
use crate::text::TextRun;
use crate::{Align, PdfError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeSet, HashMap};
use std::hash::{Hash, Hasher};
use std::io::Write;
use std::path::Path;

/// A4 width in points
pub const A4_WIDTH_PT: f64 = 595.28;
/// A4 height in points
pub const A4_HEIGHT_PT: f64 = 841.89;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Gray level (0-255)
    pub fn gray(level: u8) -> Self {
        Self::from_rgb(level, level, level)
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Buffered content of one page
#[derive(Debug, Default)]
struct PageBuffer {
    /// Content stream operators
    content: Vec<u8>,
    /// Fonts referenced by the content
    fonts: BTreeSet<StandardFont>,
    /// Images referenced by the content (index into `PdfDocument::images`)
    images: BTreeSet<usize>,
}

/// PDF document built page by page
///
/// Pages are buffered in memory and the lopdf object graph is assembled
/// once, in [`PdfDocument::to_bytes`] or [`PdfDocument::save`].
pub struct PdfDocument {
    /// Page size in points (width, height)
    page_size: (f64, f64),
    /// Buffered pages (page number = index + 1)
    pages: Vec<PageBuffer>,
    /// Current font weight
    current_weight: FontWeight,
    /// Current font style
    current_style: FontStyle,
    /// Current font size
    current_font_size: f32,
    /// Current text color
    current_text_color: Color,
    /// Current stroke color
    current_stroke_color: Color,
    /// Current fill color
    current_fill_color: Color,
    /// Current line width in points
    current_line_width: f64,
    /// Image XObjects in insertion order
    images: Vec<ImageXObject>,
    /// Image data hash -> index into `images`
    image_index: HashMap<u64, usize>,
    /// Document title for the Info dictionary
    title: Option<String>,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocument {
    /// Create an empty A4 document
    pub fn new() -> Self {
        Self::with_page_size(A4_WIDTH_PT, A4_HEIGHT_PT)
    }

    /// Create an empty document whose pages all share one size (points)
    pub fn with_page_size(width: f64, height: f64) -> Self {
        Self {
            page_size: (width, height),
            pages: Vec::new(),
            current_weight: FontWeight::default(),
            current_style: FontStyle::default(),
            current_font_size: 12.0,
            current_text_color: Color::default(),
            current_stroke_color: Color::default(),
            current_fill_color: Color::default(),
            current_line_width: 1.0,
            images: Vec::new(),
            image_index: HashMap::new(),
            title: None,
        }
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page size in points (width, height)
    pub fn page_size(&self) -> (f64, f64) {
        self.page_size
    }

    /// Append a blank page
    ///
    /// # Returns
    /// New page number (1-indexed)
    pub fn add_blank_page(&mut self) -> usize {
        self.pages.push(PageBuffer::default());
        self.pages.len()
    }

    /// Set the document title
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Set the current font
    pub fn set_font(&mut self, weight: FontWeight, style: FontStyle, size: f32) {
        self.current_weight = weight;
        self.current_style = style;
        self.current_font_size = size;
    }

    /// Set the text color
    pub fn set_text_color(&mut self, color: Color) {
        self.current_text_color = color;
    }

    /// Set the stroke color for lines and outlines
    pub fn set_stroke_color(&mut self, color: Color) {
        self.current_stroke_color = color;
    }

    /// Set the fill color for filled shapes
    pub fn set_fill_color(&mut self, color: Color) {
        self.current_fill_color = color;
    }

    /// Set the line width in points
    pub fn set_line_width(&mut self, width: f64) {
        self.current_line_width = width;
    }

    fn current_font(&self) -> StandardFont {
        StandardFont::from_style(self.current_weight, self.current_style)
    }

    fn graphics_state(&self) -> GraphicsState {
        GraphicsState {
            stroke_color: self.current_stroke_color,
            fill_color: self.current_fill_color,
            line_width: self.current_line_width,
        }
    }

    /// Width of `text` in points with the current font
    pub fn get_text_width(&self, text: &str) -> f64 {
        self.current_font()
            .text_width_points(text, self.current_font_size) as f64
    }

    fn page_mut(&mut self, page: usize) -> Result<&mut PageBuffer> {
        let page_count = self.pages.len();
        if page == 0 || page > page_count {
            return Err(PdfError::InvalidPage(page, page_count));
        }
        Ok(&mut self.pages[page - 1])
    }

    /// Convert a top-origin Y coordinate to PDF bottom-origin
    fn to_pdf_y(&self, y: f64) -> f64 {
        self.page_size.1 - y
    }

    /// Insert text at a specific position
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `page` - Page number (1-indexed)
    /// * `x` - Anchor X coordinate in points
    /// * `y` - Baseline Y coordinate in points (from top)
    /// * `align` - Text alignment relative to the anchor
    pub fn insert_text(
        &mut self,
        text: &str,
        page: usize,
        x: f64,
        y: f64,
        align: Align,
    ) -> Result<()> {
        // Validate page before the empty-text shortcut so bad pages still fail
        self.page_mut(page)?;

        if text.is_empty() {
            return Ok(());
        }

        let font = self.current_font();
        let run = TextRun::new(text, font, self.current_font_size, self.current_text_color);
        let operators = run.to_operators(x, self.to_pdf_y(y), align);

        let buffer = self.page_mut(page)?;
        buffer.fonts.insert(font);
        buffer.content.extend_from_slice(&operators);
        Ok(())
    }

    /// Draw a straight line (coordinates from top)
    pub fn draw_line(&mut self, page: usize, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        let operators = generate_line_operators(
            x1,
            self.to_pdf_y(y1),
            x2,
            self.to_pdf_y(y2),
            &self.graphics_state(),
        );
        self.buffer_content(page, &operators)
    }

    /// Draw a rectangle whose top-left corner is (`x`, `y`)
    pub fn draw_rect(
        &mut self,
        page: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        mode: PaintMode,
    ) -> Result<()> {
        let operators = generate_rect_operators(
            x,
            self.to_pdf_y(y + height),
            width,
            height,
            mode,
            &self.graphics_state(),
        );
        self.buffer_content(page, &operators)
    }

    /// Draw a circle centered at (`cx`, `cy`)
    pub fn draw_circle(
        &mut self,
        page: usize,
        cx: f64,
        cy: f64,
        radius: f64,
        mode: PaintMode,
    ) -> Result<()> {
        let operators =
            generate_circle_operators(cx, self.to_pdf_y(cy), radius, mode, &self.graphics_state());
        self.buffer_content(page, &operators)
    }

    /// Insert an image stretched to the given box
    ///
    /// # Arguments
    /// * `data` - Image file bytes (JPEG or PNG)
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points
    /// * `y` - Y coordinate of the top edge in points (from top)
    /// * `width` - Image width in points
    /// * `height` - Image height in points
    pub fn insert_image(
        &mut self,
        data: &[u8],
        page: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()> {
        self.insert_image_scaled(data, page, x, y, width, height, ImageScaleMode::Stretch)
    }

    /// Insert an image with scaling mode
    #[allow(clippy::too_many_arguments)]
    pub fn insert_image_scaled(
        &mut self,
        data: &[u8],
        page: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        mode: ImageScaleMode,
    ) -> Result<()> {
        self.page_mut(page)?;

        let index = self.get_or_create_image(data)?;
        let (orig_width, orig_height) = (self.images[index].width, self.images[index].height);
        let (actual_width, actual_height) =
            calculate_scaled_dimensions(orig_width, orig_height, width, height, mode);

        let pdf_y = self.to_pdf_y(y + actual_height);
        let operators =
            generate_image_operators(&image_resource_name(index), x, pdf_y, actual_width, actual_height);

        let buffer = self.page_mut(page)?;
        buffer.images.insert(index);
        buffer.content.extend_from_slice(&operators);
        Ok(())
    }

    /// Get or create an image XObject, deduplicated by data hash
    fn get_or_create_image(&mut self, data: &[u8]) -> Result<usize> {
        let mut hasher = DefaultHasher::new();
        data.hash(&mut hasher);
        let data_hash = hasher.finish();

        if let Some(&index) = self.image_index.get(&data_hash) {
            return Ok(index);
        }

        let xobject = ImageXObject::from_bytes(data)
            .map_err(|e| PdfError::ImageError(format!("Failed to create image XObject: {e}")))?;
        self.images.push(xobject);
        let index = self.images.len() - 1;
        self.image_index.insert(data_hash, index);
        Ok(index)
    }

    /// Buffer content operators for a page
    fn buffer_content(&mut self, page: usize, content: &[u8]) -> Result<()> {
        self.page_mut(page)?.content.extend_from_slice(content);
        Ok(())
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut document = self.build()?;
        let mut buffer = Vec::new();
        document
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(buffer)
    }

    /// Assemble the lopdf object graph from the buffered pages
    fn build(&self) -> Result<Document> {
        if self.pages.is_empty() {
            return Err(PdfError::SaveError("Document has no pages".to_string()));
        }

        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();

        // Shared font objects, only for fonts some page uses
        let mut font_ids: HashMap<StandardFont, ObjectId> = HashMap::new();
        for font in StandardFont::ALL {
            if self.pages.iter().any(|p| p.fonts.contains(&font)) {
                let id = document.add_object(font.to_pdf_dictionary());
                font_ids.insert(font, id);
            }
        }

        let image_ids: Vec<ObjectId> = self
            .images
            .iter()
            .map(|image| document.add_object(image.to_pdf_stream()))
            .collect();

        let mut kids = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let content_id = document.add_object(compress_content(&page.content)?);

            let mut font_dict = Dictionary::new();
            for font in &page.fonts {
                if let Some(id) = font_ids.get(font) {
                    font_dict.set(font.resource_name(), Object::Reference(*id));
                }
            }

            let mut xobject_dict = Dictionary::new();
            for &index in &page.images {
                xobject_dict.set(
                    image_resource_name(index).as_bytes(),
                    Object::Reference(image_ids[index]),
                );
            }

            let mut resources = Dictionary::new();
            if !font_dict.is_empty() {
                resources.set("Font", Object::Dictionary(font_dict));
            }
            if !xobject_dict.is_empty() {
                resources.set("XObject", Object::Dictionary(xobject_dict));
            }

            let mut page_dict = Dictionary::new();
            page_dict.set("Type", Object::Name(b"Page".to_vec()));
            page_dict.set("Parent", Object::Reference(pages_id));
            page_dict.set(
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(self.page_size.0 as f32),
                    Object::Real(self.page_size.1 as f32),
                ]),
            );
            page_dict.set("Resources", Object::Dictionary(resources));
            page_dict.set("Contents", Object::Reference(content_id));

            kids.push(Object::Reference(document.add_object(page_dict)));
        }

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Count", Object::Integer(kids.len() as i64));
        pages_dict.set("Kids", Object::Array(kids));
        document
            .objects
            .insert(pages_id, Object::Dictionary(pages_dict));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = document.add_object(catalog);
        document.trailer.set("Root", Object::Reference(catalog_id));

        if let Some(title) = &self.title {
            let mut info = Dictionary::new();
            info.set("Title", Object::string_literal(title.as_str()));
            info.set("Producer", Object::string_literal("pdf-core"));
            let info_id = document.add_object(info);
            document.trailer.set("Info", Object::Reference(info_id));
        }

        Ok(document)
    }
}

fn image_resource_name(index: usize) -> String {
    format!("Im{}", index + 1)
}

/// Flate-compress a content stream
fn compress_content(content: &[u8]) -> Result<Stream> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(content)?;
    let compressed = encoder.finish()?;

    let mut dict = Dictionary::new();
    dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
    Ok(Stream::new(dict, compressed))
}
