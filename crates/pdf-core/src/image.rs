//! Image handling for PDF documents

use crate::{PdfError, Result};
use image::{ColorType, DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use lopdf::{Dictionary, Object, Stream};
use std::io::{Cursor, Write};

impl From<image::ImageError> for PdfError {
    fn from(err: image::ImageError) -> Self {
        PdfError::ImageError(err.to_string())
    }
}

/// Image scaling mode for insert_image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageScaleMode {
    /// Stretch to exact dimensions
    #[default]
    Stretch,
    /// Fit within bounding box, preserving aspect ratio
    FitBox,
}

/// Calculate display dimensions based on scaling mode
///
/// # Returns
/// (actual_width, actual_height) in the target's units
pub fn calculate_scaled_dimensions(
    original_width: u32,
    original_height: u32,
    target_width: f64,
    target_height: f64,
    mode: ImageScaleMode,
) -> (f64, f64) {
    match mode {
        ImageScaleMode::Stretch => (target_width, target_height),
        ImageScaleMode::FitBox => {
            if original_width == 0 || original_height == 0 {
                return (target_width, target_height);
            }
            let width_ratio = target_width / original_width as f64;
            let height_ratio = target_height / original_height as f64;
            let scale = width_ratio.min(height_ratio);
            (
                original_width as f64 * scale,
                original_height as f64 * scale,
            )
        }
    }
}

/// Image dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

fn reader(data: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>> {
    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
    match reader.format() {
        Some(ImageFormat::Jpeg) | Some(ImageFormat::Png) => Ok(reader),
        Some(other) => Err(PdfError::ImageError(format!(
            "Unsupported image format: {other:?}"
        ))),
        None => Err(PdfError::ImageError("Unknown image format".to_string())),
    }
}

/// Read image dimensions from the header without decoding pixel data
///
/// Only JPEG and PNG are accepted.
pub fn get_dimensions(data: &[u8]) -> Result<ImageDimensions> {
    let (width, height) = reader(data)?.into_dimensions()?;
    Ok(ImageDimensions { width, height })
}

/// Image XObject for PDF embedding
#[derive(Debug, Clone)]
pub struct ImageXObject {
    pub width: u32,
    pub height: u32,
    /// "DeviceRGB" or "DeviceGray"
    pub color_space: &'static str,
    pub bits_per_component: u8,
    /// "DCTDecode" for JPEG, "FlateDecode" for PNG
    pub filter: &'static str,
    /// Compressed sample data
    pub data: Vec<u8>,
}

impl ImageXObject {
    /// Create an XObject from JPEG or PNG bytes
    ///
    /// JPEG data is passed through with DCTDecode. PNG data is decoded,
    /// alpha is blended onto white, and the samples are Flate-compressed.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let reader = reader(data)?;
        let is_jpeg = reader.format() == Some(ImageFormat::Jpeg);
        let decoder = reader.into_decoder()?;
        let (width, height) = decoder.dimensions();
        let color_type = decoder.color_type();

        if is_jpeg {
            let color_space = if color_type == ColorType::L8 {
                "DeviceGray"
            } else {
                "DeviceRGB"
            };
            return Ok(Self {
                width,
                height,
                color_space,
                bits_per_component: 8,
                filter: "DCTDecode",
                data: data.to_vec(),
            });
        }

        let image = DynamicImage::from_decoder(decoder)?;
        let (raw, color_space) = match color_type {
            ColorType::L8 | ColorType::L16 => (image.to_luma8().into_raw(), "DeviceGray"),
            ColorType::La8 | ColorType::La16 => {
                let la = image.to_luma_alpha8();
                let gray = la
                    .pixels()
                    .map(|p| blend_on_white(p[0], p[1]))
                    .collect();
                (gray, "DeviceGray")
            }
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => {
                let rgba = image.to_rgba8();
                let mut rgb = Vec::with_capacity((width * height * 3) as usize);
                for p in rgba.pixels() {
                    rgb.push(blend_on_white(p[0], p[3]));
                    rgb.push(blend_on_white(p[1], p[3]));
                    rgb.push(blend_on_white(p[2], p[3]));
                }
                (rgb, "DeviceRGB")
            }
            _ => (image.to_rgb8().into_raw(), "DeviceRGB"),
        };

        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&raw)?;
        let compressed = encoder.finish()?;

        Ok(Self {
            width,
            height,
            color_space,
            bits_per_component: 8,
            filter: "FlateDecode",
            data: compressed,
        })
    }

    /// Convert to lopdf Stream object
    pub fn to_pdf_stream(&self) -> Stream {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", Object::Name(b"Image".to_vec()));
        dict.set("Width", self.width as i64);
        dict.set("Height", self.height as i64);
        dict.set(
            "ColorSpace",
            Object::Name(self.color_space.as_bytes().to_vec()),
        );
        dict.set("BitsPerComponent", self.bits_per_component as i64);
        dict.set("Filter", Object::Name(self.filter.as_bytes().to_vec()));

        Stream::new(dict, self.data.clone())
    }
}

fn blend_on_white(value: u8, alpha: u8) -> u8 {
    let a = alpha as f32 / 255.0;
    (value as f32 * a + 255.0 * (1.0 - a)) as u8
}

/// Generate operators to draw an image XObject
///
/// (`x`, `y`) is the lower-left corner in PDF coordinates.
pub fn generate_image_operators(
    image_name: &str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Vec<u8> {
    format!("q\n{width} 0 0 {height} {x} {y} cm\n/{image_name} Do\nQ\n").into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgba};

    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_scaled_dimensions_stretch() {
        assert_eq!(
            calculate_scaled_dimensions(100, 50, 16.0, 16.0, ImageScaleMode::Stretch),
            (16.0, 16.0)
        );
    }

    #[test]
    fn test_scaled_dimensions_fit_box() {
        assert_eq!(
            calculate_scaled_dimensions(100, 50, 16.0, 16.0, ImageScaleMode::FitBox),
            (16.0, 8.0)
        );
        assert_eq!(
            calculate_scaled_dimensions(50, 100, 16.0, 16.0, ImageScaleMode::FitBox),
            (8.0, 16.0)
        );
    }

    #[test]
    fn test_scaled_dimensions_zero_size_image() {
        assert_eq!(
            calculate_scaled_dimensions(0, 0, 16.0, 16.0, ImageScaleMode::FitBox),
            (16.0, 16.0)
        );
    }

    #[test]
    fn test_png_dimensions() {
        let png = png_bytes(DynamicImage::ImageLuma8(ImageBuffer::<Luma<u8>, Vec<u8>>::new(100, 50)));
        let dims = get_dimensions(&png).unwrap();
        assert_eq!(dims, ImageDimensions { width: 100, height: 50 });
    }

    #[test]
    fn test_unknown_format_rejected() {
        let garbage = vec![0u8; 32];
        assert!(get_dimensions(&garbage).is_err());
        assert!(ImageXObject::from_bytes(&garbage).is_err());
    }

    #[test]
    fn test_gray_png_xobject() {
        let png = png_bytes(DynamicImage::ImageLuma8(ImageBuffer::<Luma<u8>, Vec<u8>>::new(4, 4)));
        let xobject = ImageXObject::from_bytes(&png).unwrap();
        assert_eq!(xobject.width, 4);
        assert_eq!(xobject.color_space, "DeviceGray");
        assert_eq!(xobject.filter, "FlateDecode");
    }

    #[test]
    fn test_rgba_png_blended_to_rgb() {
        let img = ImageBuffer::from_pixel(2, 2, Rgba([0u8, 86, 179, 0]));
        let xobject = ImageXObject::from_bytes(&png_bytes(DynamicImage::ImageRgba8(img))).unwrap();
        assert_eq!(xobject.color_space, "DeviceRGB");

        let mut decoder = flate2::read::ZlibDecoder::new(&xobject.data[..]);
        let mut raw = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut raw).unwrap();
        // Fully transparent pixels become white
        assert_eq!(raw, vec![255u8; 12]);
    }

    #[test]
    fn test_generate_image_operators() {
        let ops = String::from_utf8(generate_image_operators("Im1", 100.0, 200.0, 50.0, 75.0)).unwrap();
        assert!(ops.contains("50 0 0 75 100 200 cm"));
        assert!(ops.contains("/Im1 Do"));
    }

    #[test]
    fn test_image_xobject_to_pdf_stream() {
        let xobject = ImageXObject {
            width: 100,
            height: 50,
            color_space: "DeviceRGB",
            bits_per_component: 8,
            filter: "DCTDecode",
            data: vec![1, 2, 3, 4, 5],
        };

        let stream = xobject.to_pdf_stream();
        let dict = stream.dict;

        assert_eq!(dict.get(b"Subtype").unwrap().as_name().unwrap(), b"Image");
        assert_eq!(dict.get(b"Width").unwrap().as_i64().unwrap(), 100);
        assert_eq!(dict.get(b"Filter").unwrap().as_name().unwrap(), b"DCTDecode");
        assert_eq!(stream.content, vec![1, 2, 3, 4, 5]);
    }
}
