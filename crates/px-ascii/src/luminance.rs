use px_core::charset::CharPalette;
use px_core::frame::{PixelBuffer, PixelFormat, RenderedArt};

use crate::color_map::push_colored;

/// Map a luminosity value to its palette character.
///
/// `palette[floor(v / 255 * (len - 1))]`: 0 → darkest, 255 → lightest.
///
/// # Example
/// ```
/// use px_core::charset::CharPalette;
/// use px_ascii::luminance::map_pixel;
/// let palette = CharPalette::new("@%#*+=-:. ").unwrap();
/// assert_eq!(map_pixel(0, &palette), '@');
/// assert_eq!(map_pixel(255, &palette), ' ');
/// ```
#[inline]
#[must_use]
pub fn map_pixel(luminosity: u8, palette: &CharPalette) -> char {
    palette.map(luminosity)
}

/// Render a grayscale buffer into plain rows, one character per pixel.
///
/// # Panics
/// Panics if `gray` is not a `Luma` buffer.
///
/// # Example
/// ```
/// use px_core::charset::CharPalette;
/// use px_core::frame::{PixelBuffer, PixelFormat};
/// use px_ascii::luminance::render;
///
/// let gray = PixelBuffer::from_raw(2, 2, PixelFormat::Luma, vec![0, 255, 255, 0]).unwrap();
/// let art = render(&gray, &CharPalette::new("@ ").unwrap());
/// assert_eq!(art.rows, vec!["@ ".to_string(), " @".to_string()]);
/// ```
#[must_use]
pub fn render(gray: &PixelBuffer, palette: &CharPalette) -> RenderedArt {
    assert_eq!(gray.format, PixelFormat::Luma, "render expects a Luma buffer");
    let rows = gray
        .rows()
        .map(|row| row.iter().map(|&v| map_pixel(v, palette)).collect())
        .collect();
    RenderedArt {
        rows,
        columns: gray.width,
        colored: false,
    }
}

/// Render with a truecolor marker per character, sampled from `color`.
///
/// The character comes from `gray`, the color from the pixel at the same
/// position in `color`.
///
/// # Panics
/// Panics if the two buffers differ in size or `gray` is not `Luma`.
///
/// # Example
/// ```
/// use px_core::charset::CharPalette;
/// use px_core::frame::{PixelBuffer, PixelFormat};
/// use px_ascii::luminance::render_colored;
///
/// let color = PixelBuffer::solid_rgb(1, 1, (255, 0, 0));
/// let gray = PixelBuffer::from_raw(1, 1, PixelFormat::Luma, vec![0]).unwrap();
/// let art = render_colored(&color, &gray, &CharPalette::new("@ ").unwrap());
/// assert_eq!(art.rows[0], "\x1b[38;2;255;0;0m@\x1b[0m");
/// ```
#[must_use]
pub fn render_colored(color: &PixelBuffer, gray: &PixelBuffer, palette: &CharPalette) -> RenderedArt {
    assert_eq!(
        color.dimensions(),
        gray.dimensions(),
        "color and gray buffers must have identical dimensions"
    );
    assert_eq!(gray.format, PixelFormat::Luma, "render_colored expects a Luma gray buffer");

    // ~20 octets par caractère coloré
    let row_capacity = gray.width as usize * 20;
    let mut rows = Vec::with_capacity(gray.height as usize);
    for y in 0..gray.height {
        let mut row = String::with_capacity(row_capacity);
        for x in 0..gray.width {
            let ch = map_pixel(gray.luminance(x, y), palette);
            push_colored(&mut row, ch, color.rgb(x, y));
        }
        rows.push(row);
    }
    log::debug!("rendered {} colored rows", rows.len());

    RenderedArt {
        rows,
        columns: gray.width,
        colored: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grayscale::to_gray;
    use px_core::charset::CHARSET_DEFAULT;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[(x * 17) as u8, (y * 31) as u8, ((x + y) * 5) as u8]);
            }
        }
        PixelBuffer::from_raw(width, height, PixelFormat::Rgb, data).unwrap()
    }

    #[test]
    fn plain_rows_have_one_char_per_pixel() {
        let palette = CharPalette::new(CHARSET_DEFAULT).unwrap();
        let gray = to_gray(&gradient(13, 5));
        let art = render(&gray, &palette);
        assert_eq!(art.height(), 5);
        assert!(art.rows.iter().all(|r| r.chars().count() == 13));
        assert!(!art.colored);
    }

    #[test]
    fn black_is_darkest_and_white_is_lightest() {
        let palette = CharPalette::new(CHARSET_DEFAULT).unwrap();
        let black = render(&to_gray(&PixelBuffer::solid_rgb(4, 2, (0, 0, 0))), &palette);
        assert!(black.rows.iter().all(|r| r == "@@@@"));
        let white = render(&to_gray(&PixelBuffer::solid_rgb(4, 2, (255, 255, 255))), &palette);
        assert!(white.rows.iter().all(|r| r == "    "));
    }

    #[test]
    fn colored_rows_wrap_each_plain_glyph() {
        let palette = CharPalette::new(CHARSET_DEFAULT).unwrap();
        let color = gradient(15, 9);
        let gray = to_gray(&color);
        let plain = render(&gray, &palette);
        let colored = render_colored(&color, &gray, &palette);
        for (y, (plain_row, colored_row)) in plain.rows.iter().zip(&colored.rows).enumerate() {
            let mut expected = String::new();
            for (x, ch) in plain_row.chars().enumerate() {
                push_colored(&mut expected, ch, color.rgb(x as u32, y as u32));
            }
            assert_eq!(colored_row, &expected);
        }
    }

    #[test]
    fn color_comes_from_the_same_pixel() {
        let palette = CharPalette::new("@ ").unwrap();
        let color = PixelBuffer::from_raw(2, 1, PixelFormat::Rgb, vec![0, 0, 0, 255, 255, 255]).unwrap();
        let gray = to_gray(&color);
        let art = render_colored(&color, &gray, &palette);
        assert_eq!(art.rows[0], "\x1b[38;2;0;0;0m@\x1b[0m\x1b[38;2;255;255;255m \x1b[0m");
    }

    #[test]
    #[should_panic(expected = "identical dimensions")]
    fn mismatched_buffers_panic() {
        let palette = CharPalette::new("@ ").unwrap();
        let color = PixelBuffer::solid_rgb(3, 3, (0, 0, 0));
        let gray = to_gray(&PixelBuffer::solid_rgb(2, 3, (0, 0, 0)));
        let _ = render_colored(&color, &gray, &palette);
    }
}
