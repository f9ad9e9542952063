use crate::error::CoreError;

/// 10 caractères, défaut, du plus dense au plus clair.
pub const CHARSET_DEFAULT: &str = "@%#*+=-:. ";

/// Ordered character palette with a pre-computed luminance lookup table.
///
/// Index 0 is the darkest character, the last index the lightest.
/// The LUT is built once so the per-pixel cost is a single array access.
///
/// # Example
/// ```
/// use px_core::charset::CharPalette;
/// let palette = CharPalette::new("@%#*+=-:. ").unwrap();
/// assert_eq!(palette.map(0), '@');
/// assert_eq!(palette.map(255), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct CharPalette {
    chars: Vec<char>,
    lut: [char; 256],
}

impl CharPalette {
    /// Build a palette from a string ordered darkest→lightest.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if `charset` has fewer than 2 characters.
    pub fn new(charset: &str) -> Result<Self, CoreError> {
        let chars: Vec<char> = charset.chars().collect();
        if chars.len() < 2 {
            return Err(CoreError::Config(format!(
                "--chars must contain at least 2 characters, got {}",
                chars.len()
            )));
        }
        let mut lut = [' '; 256];
        for (value, slot) in lut.iter_mut().enumerate() {
            *slot = chars[palette_index(value as u8, chars.len())];
        }
        Ok(Self { chars, lut })
    }

    /// Map a luminance value [0..255] to a character.
    ///
    /// # Example
    /// ```
    /// use px_core::charset::CharPalette;
    /// let palette = CharPalette::new("@#. ").unwrap();
    /// assert_eq!(palette.map(128), '#');
    /// ```
    #[inline]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }

    /// Number of characters in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: a palette holds at least 2 characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Darkest character (index 0).
    #[must_use]
    pub fn darkest(&self) -> char {
        self.chars[0]
    }

    /// Lightest character (last index).
    #[must_use]
    pub fn lightest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    /// Characters in palette order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

/// Palette index for a luminance value: `floor(v / 255 * (len - 1))`.
///
/// Evaluated in `f64` in that exact order (divide, multiply, truncate) so
/// bright and dark extremes land on the same glyph as the reference output.
///
/// # Example
/// ```
/// use px_core::charset::palette_index;
/// assert_eq!(palette_index(0, 10), 0);
/// assert_eq!(palette_index(255, 10), 9);
/// assert_eq!(palette_index(127, 10), 4);
/// ```
#[must_use]
pub fn palette_index(luminance: u8, len: usize) -> usize {
    let last = len.saturating_sub(1);
    let index = (f64::from(luminance) / 255.0 * last as f64) as usize;
    index.min(last)
}
