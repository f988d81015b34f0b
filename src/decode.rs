//! PNG decoding.
//!
//! Verifies the PNG signature and decodes the whole image into a `PixelGrid`.
//! Every colour type is normalised to 8-bit RGBA; images without an alpha
//! channel decode as fully painted. A non-zero 16-bit alpha never narrows
//! to zero, so painted pixels stay painted.

use image::{DynamicImage, ImageFormat};

use crate::error::{Result, TscError};
use crate::types::PixelGrid;

/// The fixed 8-byte prefix of every PNG stream.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Check whether the stream starts with the PNG signature.
pub fn is_png(bytes: &[u8]) -> bool {
    bytes.starts_with(&PNG_SIGNATURE)
}

/// Decode a PNG byte stream into a pixel grid.
///
/// Fails with `SignatureMismatch` before any parsing when the signature does
/// not match, and with `Decode` when the header or image data is malformed.
/// Intermediate buffers are owned by the decoder and dropped on every path.
pub fn decode(bytes: &[u8]) -> Result<PixelGrid> {
    if !is_png(bytes) {
        return Err(TscError::SignatureMismatch);
    }

    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png).map_err(|e| {
        TscError::Decode {
            message: e.to_string(),
        }
    })?;

    let wide = match &image {
        DynamicImage::ImageRgba16(_) | DynamicImage::ImageLumaA16(_) => Some(image.to_rgba16()),
        _ => None,
    };

    let mut rgba = image.into_rgba8();
    if let Some(wide) = wide {
        for (narrow, source) in rgba.pixels_mut().zip(wide.pixels()) {
            if source[3] > 0 {
                narrow[3] = narrow[3].max(1);
            }
        }
    }

    let (width, height) = rgba.dimensions();
    PixelGrid::from_rgba(width, height, rgba.into_raw())
}
