use std::fmt::Write;

/// Séquence de fin de scope couleur.
pub const MARKER_RESET: &str = "\x1b[0m";

/// Append `ch` wrapped in its own truecolor marker: `ESC[38;2;R;G;Bm` + ch + `ESC[0m`.
///
/// Every character gets its own color scope, adjacent identical colors are
/// not merged.
///
/// # Example
/// ```
/// use px_ascii::color_map::push_colored;
/// let mut row = String::new();
/// push_colored(&mut row, '@', (200, 50, 50));
/// assert_eq!(row, "\x1b[38;2;200;50;50m@\x1b[0m");
/// ```
pub fn push_colored(out: &mut String, ch: char, (r, g, b): (u8, u8, u8)) {
    // Écrire dans une String ne peut pas échouer.
    let _ = write!(out, "\x1b[38;2;{r};{g};{b}m{ch}{MARKER_RESET}");
}
