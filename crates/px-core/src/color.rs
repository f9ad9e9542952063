/// Luma ITU-R 601-2 : `L = R·299/1000 + G·587/1000 + B·114/1000`.
///
/// Computed in 16.16 fixed point with rounding, which is the conventional
/// RGB → grayscale conversion used by most image libraries.
///
/// # Example
/// ```
/// use px_core::color::luma;
/// assert_eq!(luma(0, 0, 0), 0);
/// assert_eq!(luma(255, 255, 255), 255);
/// assert_eq!(luma(255, 0, 0), 76);
/// ```
#[inline]
#[must_use]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_inputs_are_preserved() {
        for v in 0..=255u8 {
            assert_eq!(luma(v, v, v), v, "gray {v} drifted");
        }
    }

    #[test]
    fn green_weighs_more_than_red_and_blue() {
        let r = luma(200, 0, 0);
        let g = luma(0, 200, 0);
        let b = luma(0, 0, 200);
        assert!(g > r && r > b, "unexpected weighting r={r} g={g} b={b}");
    }

    #[test]
    fn primaries_match_rec601_weights() {
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
    }
}
