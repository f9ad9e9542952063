use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};
use px_core::CoreError;
use px_core::frame::{PixelBuffer, PixelFormat};

/// Correction d'aspect : une cellule de police monospace est plus haute que large.
pub const ASPECT_FACTOR: f64 = 0.45;

/// Rows needed to keep proportions at `columns` characters wide.
///
/// `round(height * columns / width * ASPECT_FACTOR)`, clamped to at least 1.
///
/// # Example
/// ```
/// use px_source::resize::target_rows;
/// assert_eq!(target_rows(100, 100, 10), 5);
/// assert_eq!(target_rows(10_000, 1, 1), 1);
/// ```
#[must_use]
pub fn target_rows(width: u32, height: u32, columns: u32) -> u32 {
    if width == 0 {
        return 1;
    }
    let rows =
        (f64::from(height) * f64::from(columns) / f64::from(width) * ASPECT_FACTOR).round();
    (rows as u32).max(1)
}

/// Resizer réutilisable wrappant fast_image_resize (Lanczos3).
///
/// # Example
/// ```
/// use px_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
}

impl Resizer {
    /// Create a new resizer using a Lanczos3 convolution.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
        }
    }

    /// Resample `src` to exactly `width × height`, returning a new buffer.
    ///
    /// # Errors
    /// [`CoreError::InvalidDimensions`] if either side of source or target is zero.
    ///
    /// # Example
    /// ```
    /// use px_source::resize::Resizer;
    /// use px_core::frame::PixelBuffer;
    /// let mut r = Resizer::new();
    /// let src = PixelBuffer::solid_rgb(100, 100, (9, 9, 9));
    /// let dst = r.resize(&src, 50, 20).unwrap();
    /// assert_eq!(dst.dimensions(), (50, 20));
    /// ```
    pub fn resize(
        &mut self,
        src: &PixelBuffer,
        width: u32,
        height: u32,
    ) -> Result<PixelBuffer, CoreError> {
        if src.width == 0 || src.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: src.width,
                height: src.height,
            });
        }
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        if src.width == width && src.height == height {
            return Ok(src.clone());
        }

        let pixel_type = match src.format {
            PixelFormat::Rgb => PixelType::U8x3,
            // fast_image_resize prémultiplie l'alpha par défaut pour U8x4
            PixelFormat::Rgba => PixelType::U8x4,
            PixelFormat::Luma => PixelType::U8,
        };

        // fast_image_resize veut un &mut sur la source
        let mut src_buf = src.data.clone();
        let mut dst = PixelBuffer::new(width, height, src.format);
        {
            let src_image = Image::from_slice_u8(src.width, src.height, &mut src_buf, pixel_type)
                .map_err(|_| CoreError::InvalidDimensions {
                    width: src.width,
                    height: src.height,
                })?;
            let mut dst_image = Image::from_slice_u8(width, height, &mut dst.data, pixel_type)
                .map_err(|_| CoreError::InvalidDimensions { width, height })?;

            self.inner
                .resize(&src_image, &mut dst_image, Some(&self.options))
                .map_err(|e| {
                    log::error!("resize {}×{} → {width}×{height} failed: {e}", src.width, src.height);
                    CoreError::InvalidDimensions { width, height }
                })?;
        }
        Ok(dst)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Resize to `columns` characters wide, deriving the row count with [`target_rows`].
///
/// # Errors
/// Returns an error if `columns` is zero or the source is empty.
///
/// # Example
/// ```
/// use px_source::resize::resize_to_columns;
/// use px_core::frame::PixelBuffer;
/// let src = PixelBuffer::solid_rgb(200, 100, (0, 0, 0));
/// let dst = resize_to_columns(&src, 40).unwrap();
/// assert_eq!(dst.dimensions(), (40, 9));
/// ```
pub fn resize_to_columns(src: &PixelBuffer, columns: u32) -> Result<PixelBuffer, CoreError> {
    if columns == 0 {
        return Err(CoreError::InvalidDimensions {
            width: columns,
            height: src.height,
        });
    }
    let rows = target_rows(src.width, src.height, columns);
    log::debug!(
        "resize {}×{} → {columns}×{rows}",
        src.width,
        src.height
    );
    Resizer::new().resize(src, columns, rows)
}
