/// ASCII conversion engine for pixscii.
///
/// Converts pixel buffers to rows of characters, optionally colorized.
pub mod color_map;
pub mod grayscale;
pub mod luminance;

pub use grayscale::to_gray;
pub use luminance::{map_pixel, render, render_colored};
