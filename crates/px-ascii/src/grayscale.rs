use px_core::color::luma;
use px_core::frame::{PixelBuffer, PixelFormat};

/// Convert a buffer to single-channel luminosity (Rec. 601 weighting).
///
/// A `Luma` input is returned as a copy; dimensions never change.
///
/// # Example
/// ```
/// use px_core::frame::{PixelBuffer, PixelFormat};
/// use px_ascii::grayscale::to_gray;
/// let gray = to_gray(&PixelBuffer::solid_rgb(3, 2, (255, 255, 255)));
/// assert_eq!(gray.format, PixelFormat::Luma);
/// assert_eq!(gray.data, vec![255; 6]);
/// ```
#[must_use]
pub fn to_gray(src: &PixelBuffer) -> PixelBuffer {
    let data = match src.format {
        PixelFormat::Luma => src.data.clone(),
        PixelFormat::Rgb | PixelFormat::Rgba => src
            .data
            .chunks_exact(src.format.channels())
            .map(|px| luma(px[0], px[1], px[2]))
            .collect(),
    };
    PixelBuffer {
        data,
        width: src.width,
        height: src.height,
        format: PixelFormat::Luma,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_dimensions() {
        let src = PixelBuffer::solid_rgb(7, 3, (12, 200, 40));
        let gray = to_gray(&src);
        assert_eq!(gray.dimensions(), (7, 3));
        assert_eq!(gray.data.len(), 21);
    }

    #[test]
    fn uses_perceptual_weights_not_average() {
        let src = PixelBuffer::from_raw(2, 1, PixelFormat::Rgb, vec![0, 255, 0, 0, 0, 255]).unwrap();
        let gray = to_gray(&src);
        // Une moyenne simple donnerait 85 pour les deux.
        assert_eq!(gray.data, vec![150, 29]);
    }

    #[test]
    fn alpha_does_not_weigh_in() {
        let src =
            PixelBuffer::from_raw(2, 1, PixelFormat::Rgba, vec![0, 255, 0, 0, 0, 0, 255, 255])
                .unwrap();
        assert_eq!(to_gray(&src).data, vec![150, 29]);
    }

    #[test]
    fn luma_input_is_copied() {
        let src = PixelBuffer::from_raw(2, 1, PixelFormat::Luma, vec![3, 9]).unwrap();
        assert_eq!(to_gray(&src), src);
    }
}
