use crate::color::luma;

/// Channel layout of a [`PixelBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// 3 bytes per pixel, R G B.
    Rgb,
    /// 4 bytes per pixel, R G B A (straight alpha).
    Rgba,
    /// 1 byte per pixel, luminosity.
    Luma,
}

impl PixelFormat {
    /// Bytes per pixel.
    #[must_use]
    pub fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
            Self::Luma => 1,
        }
    }
}

/// Grille de pixels, row-major. Chaque étape produit un nouveau buffer.
///
/// # Example
/// ```
/// use px_core::frame::{PixelBuffer, PixelFormat};
/// let fb = PixelBuffer::new(10, 10, PixelFormat::Rgb);
/// assert_eq!(fb.data.len(), 300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixels, row-major, `format.channels()` bytes per pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Channel layout.
    pub format: PixelFormat,
}

impl PixelBuffer {
    /// Crée un buffer noir aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use px_core::frame::{PixelBuffer, PixelFormat};
    /// let fb = PixelBuffer::new(100, 50, PixelFormat::Luma);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * format.channels()],
            width,
            height,
            format,
        }
    }

    /// RGB buffer filled with a single color.
    ///
    /// # Example
    /// ```
    /// use px_core::frame::PixelBuffer;
    /// let fb = PixelBuffer::solid_rgb(2, 2, (255, 0, 0));
    /// assert_eq!(fb.rgb(1, 1), (255, 0, 0));
    /// ```
    #[must_use]
    pub fn solid_rgb(width: u32, height: u32, color: (u8, u8, u8)) -> Self {
        let data = [color.0, color.1, color.2]
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self {
            data,
            width,
            height,
            format: PixelFormat::Rgb,
        }
    }

    /// Wrap raw bytes, checking the length against the dimensions.
    ///
    /// Returns `None` if `data.len()` does not match `width × height × channels`.
    #[must_use]
    pub fn from_raw(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * format.channels();
        (data.len() == expected).then_some(Self {
            data,
            width,
            height,
            format,
        })
    }

    /// `(width, height)`.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Accès au pixel (x, y) → (r, g, b). Luma pixels are replicated on all
    /// channels, alpha is ignored.
    #[inline]
    #[must_use]
    pub fn rgb(&self, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * self.format.channels();
        match self.format {
            PixelFormat::Rgb | PixelFormat::Rgba => {
                (self.data[idx], self.data[idx + 1], self.data[idx + 2])
            }
            PixelFormat::Luma => {
                let v = self.data[idx];
                (v, v, v)
            }
        }
    }

    /// Luminosité du pixel (x, y), Rec. 601 pour les buffers RGB.
    ///
    /// # Example
    /// ```
    /// use px_core::frame::PixelBuffer;
    /// let fb = PixelBuffer::solid_rgb(1, 1, (255, 255, 255));
    /// assert_eq!(fb.luminance(0, 0), 255);
    /// ```
    #[inline]
    #[must_use]
    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        match self.format {
            PixelFormat::Luma => self.data[y as usize * self.width as usize + x as usize],
            PixelFormat::Rgb | PixelFormat::Rgba => {
                let (r, g, b) = self.rgb(x, y);
                luma(r, g, b)
            }
        }
    }

    /// Copy as a 3-channel RGB buffer. Alpha is discarded, luma is replicated.
    ///
    /// # Example
    /// ```
    /// use px_core::frame::{PixelBuffer, PixelFormat};
    /// let fb = PixelBuffer::from_raw(1, 1, PixelFormat::Rgba, vec![10, 20, 30, 0]).unwrap();
    /// assert_eq!(fb.to_rgb().data, vec![10, 20, 30]);
    /// ```
    #[must_use]
    pub fn to_rgb(&self) -> PixelBuffer {
        let data = match self.format {
            PixelFormat::Rgb => self.data.clone(),
            PixelFormat::Rgba => self
                .data
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
            PixelFormat::Luma => self.data.iter().flat_map(|&v| [v, v, v]).collect(),
        };
        PixelBuffer {
            data,
            width: self.width,
            height: self.height,
            format: PixelFormat::Rgb,
        }
    }

    /// Iterate rows as byte slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let stride = (self.width as usize * self.format.channels()).max(1);
        self.data.chunks_exact(stride)
    }
}

/// Texte final du pipeline : une ligne par rangée de pixels.
///
/// In colored mode every character of a row carries its own color marker.
///
/// # Example
/// ```
/// use px_core::frame::RenderedArt;
/// let art = RenderedArt { rows: vec!["@@".into(), "  ".into()], columns: 2, colored: false };
/// assert_eq!(art.to_text(), "@@\n  ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedArt {
    /// Rows, top to bottom.
    pub rows: Vec<String>,
    /// Characters per row (markers excluded).
    pub columns: u32,
    /// True if rows contain color markers.
    pub colored: bool,
}

impl RenderedArt {
    /// Rows joined by `\n`, without a trailing newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.rows.join("\n")
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_checks_length() {
        assert!(PixelBuffer::from_raw(2, 2, PixelFormat::Rgb, vec![0; 12]).is_some());
        assert!(PixelBuffer::from_raw(2, 2, PixelFormat::Rgb, vec![0; 4]).is_none());
        assert!(PixelBuffer::from_raw(2, 2, PixelFormat::Luma, vec![0; 4]).is_some());
    }

    #[test]
    fn rows_follow_row_major_order() {
        let fb = PixelBuffer::from_raw(2, 3, PixelFormat::Luma, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[u8]> = fb.rows().collect();
        assert_eq!(rows, vec![&[1u8, 2][..], &[3, 4][..], &[5, 6][..]]);
    }

    #[test]
    fn luma_pixels_read_back_as_gray() {
        let fb = PixelBuffer::from_raw(1, 1, PixelFormat::Luma, vec![42]).unwrap();
        assert_eq!(fb.rgb(0, 0), (42, 42, 42));
        assert_eq!(fb.luminance(0, 0), 42);
    }

    #[test]
    fn to_rgb_drops_alpha_and_widens_luma() {
        let rgba =
            PixelBuffer::from_raw(2, 1, PixelFormat::Rgba, vec![1, 2, 3, 255, 4, 5, 6, 0]).unwrap();
        assert_eq!(rgba.rgb(1, 0), (4, 5, 6));
        let rgb = rgba.to_rgb();
        assert_eq!(rgb.format, PixelFormat::Rgb);
        assert_eq!(rgb.data, vec![1, 2, 3, 4, 5, 6]);

        let luma = PixelBuffer::from_raw(1, 1, PixelFormat::Luma, vec![9]).unwrap();
        assert_eq!(luma.to_rgb().data, vec![9, 9, 9]);
    }
}
