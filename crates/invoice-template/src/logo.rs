//! Logo resolution
//!
//! A logo can be supplied inline, fetched from a URL through a caller-provided
//! [`LogoFetcher`], or omitted. Every failure degrades to
//! [`Logo::Unavailable`], which the layout draws as a placeholder glyph.

use image::ImageFormat;
use thiserror::Error;

/// Why a logo could not be used
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("Failed to fetch logo: {0}")]
    Fetch(String),

    #[error("Failed to decode logo: {0}")]
    Decode(String),

    #[error("Unsupported logo format: {0}")]
    UnsupportedFormat(String),
}

/// Where the logo comes from
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LogoSource {
    InlineBytes(Vec<u8>),
    FetchByUrl(String),
    #[default]
    None,
}

/// A decoded logo, or the placeholder marker
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Logo {
    /// JPEG or PNG bytes with their pixel size
    Bytes {
        data: Vec<u8>,
        width: u32,
        height: u32,
    },
    #[default]
    Unavailable,
}

impl Logo {
    /// Decode JPEG/PNG bytes
    pub fn decode(data: Vec<u8>) -> Result<Self, LogoError> {
        let format =
            image::guess_format(&data).map_err(|e| LogoError::Decode(e.to_string()))?;
        if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
            return Err(LogoError::UnsupportedFormat(format!("{format:?}")));
        }

        let decoded = image::load_from_memory_with_format(&data, format)
            .map_err(|e| LogoError::Decode(e.to_string()))?;

        Ok(Logo::Bytes {
            width: decoded.width(),
            height: decoded.height(),
            data,
        })
    }

    /// Decode bytes, falling back to the placeholder on failure
    pub fn from_bytes_or_placeholder(data: Vec<u8>) -> Self {
        match Logo::decode(data) {
            Ok(logo) => logo,
            Err(e) => {
                log::warn!("{e}; drawing placeholder logo");
                Logo::Unavailable
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Logo::Bytes { .. })
    }
}

/// Supplies logo bytes for a URL
///
/// Implementations may fail; the engine catches every error.
#[allow(async_fn_in_trait)]
pub trait LogoFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LogoError>;
}

/// Fetcher for environments without network access
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFetch;

impl LogoFetcher for NoFetch {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LogoError> {
        Err(LogoError::Fetch(format!("no fetcher available for {url}")))
    }
}

/// Turn a logo source into a drawable logo
///
/// This is the only suspension point of a render. Fetch or decode failures
/// are logged and yield [`Logo::Unavailable`]; nothing is retried.
pub async fn resolve_logo<F: LogoFetcher>(source: LogoSource, fetcher: &F) -> Logo {
    match source {
        LogoSource::None => Logo::Unavailable,
        LogoSource::InlineBytes(data) => Logo::from_bytes_or_placeholder(data),
        LogoSource::FetchByUrl(url) => match fetcher.fetch(&url).await {
            Ok(data) => Logo::from_bytes_or_placeholder(data),
            Err(e) => {
                log::warn!("{e}; drawing placeholder logo");
                Logo::Unavailable
            }
        },
    }
}
