use std::path::Path;

use crate::error::CoreError;
use crate::frame::PixelBuffer;

/// Décode un fichier image en grille de pixels RGB.
///
/// Implémenté par : `ImageFileDecoder` (crate `px-source`). Tests plug in
/// synthetic decoders returning hand-built buffers.
///
/// # Example
/// ```
/// use px_core::traits::ImageDecoder;
/// use px_core::frame::PixelBuffer;
/// use px_core::CoreError;
/// use std::path::Path;
///
/// struct SolidDecoder;
/// impl ImageDecoder for SolidDecoder {
///     fn decode(&self, _path: &Path) -> Result<PixelBuffer, CoreError> {
///         Ok(PixelBuffer::solid_rgb(4, 4, (0, 0, 0)))
///     }
/// }
/// let fb = SolidDecoder.decode(Path::new("any.png")).unwrap();
/// assert_eq!(fb.width, 4);
/// ```
pub trait ImageDecoder {
    /// Charge `path` en buffer RGB.
    ///
    /// # Errors
    /// [`CoreError::FileNotFound`] if `path` is not a regular file,
    /// [`CoreError::Decode`] if its content is not a valid image.
    fn decode(&self, path: &Path) -> Result<PixelBuffer, CoreError>;
}
