use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader};
use px_core::CoreError;
use px_core::frame::{PixelBuffer, PixelFormat};
use px_core::traits::ImageDecoder;

/// Décodeur d'images fichier (PNG, JPEG, BMP, GIF) basé sur `image`.
///
/// The format is sniffed from the file content, so a misnamed file still
/// decodes. Truncated or corrupt files fail here instead of producing garbage.
///
/// # Example
/// ```no_run
/// use px_core::traits::ImageDecoder;
/// use px_source::image::ImageFileDecoder;
/// use std::path::Path;
/// let frame = ImageFileDecoder.decode(Path::new("photo.jpg")).unwrap();
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageFileDecoder;

impl ImageDecoder for ImageFileDecoder {
    fn decode(&self, path: &Path) -> Result<PixelBuffer, CoreError> {
        load_image(path)
    }
}

/// Marqueur début de scan JPEG.
const JPEG_SOS: [u8; 2] = [0xFF, 0xDA];
/// Marqueur fin d'image JPEG.
const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];
/// Octet final d'un flux GIF.
const GIF_TRAILER: u8 = 0x3B;

/// Load an image from disk.
///
/// Images with an alpha channel come back as [`PixelFormat::Rgba`] so that
/// resampling can weigh color by coverage; everything else is
/// [`PixelFormat::Rgb`].
///
/// # Errors
/// [`CoreError::FileNotFound`] if `path` is not a regular file,
/// [`CoreError::Decode`] if it is incomplete or cannot be decoded.
pub fn load_image(path: &Path) -> Result<PixelBuffer, CoreError> {
    if !path.is_file() {
        return Err(CoreError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let decode_err = |reason: String| CoreError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = std::fs::read(path).map_err(|e| decode_err(e.to_string()))?;
    let reader = ImageReader::new(Cursor::new(bytes.as_slice()))
        .with_guessed_format()
        .map_err(|e| decode_err(e.to_string()))?;
    if let Some(format) = reader.format() {
        check_complete(format, &bytes).map_err(decode_err)?;
    }
    let img = reader.decode().map_err(|e| decode_err(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(decode_err(format!("empty image ({width}×{height})")));
    }
    log::debug!("decoded {} ({width}×{height}, {:?})", path.display(), img.color());

    let (format, data) = if img.color().has_alpha() {
        (PixelFormat::Rgba, img.into_rgba8().into_raw())
    } else {
        (PixelFormat::Rgb, img.into_rgb8().into_raw())
    };
    PixelBuffer::from_raw(width, height, format, data)
        .ok_or_else(|| decode_err("pixel data does not match dimensions".to_string()))
}

/// Check that the stream reaches its end-of-image marker.
///
/// The JPEG decoder fills missing scan data with gray instead of failing, so
/// a cut file would otherwise decode to a plausible-looking image.
fn check_complete(format: ImageFormat, bytes: &[u8]) -> Result<(), String> {
    match format {
        ImageFormat::Jpeg => {
            let last_scan = bytes
                .windows(2)
                .rposition(|w| w == JPEG_SOS)
                .ok_or_else(|| "JPEG without scan data".to_string())?;
            if bytes[last_scan..].windows(2).any(|w| w == JPEG_EOI) {
                Ok(())
            } else {
                Err("truncated JPEG: missing end-of-image marker".to_string())
            }
        }
        ImageFormat::Gif => match bytes.iter().rev().find(|&&b| b != 0) {
            Some(&GIF_TRAILER) => Ok(()),
            _ => Err("truncated GIF: missing trailer".to_string()),
        },
        _ => Ok(()),
    }
}
