/// Pixel sources for pixscii: image decoding and resampling.

pub mod image;
pub mod resize;

pub use crate::image::{ImageFileDecoder, load_image};
pub use crate::resize::{ASPECT_FACTOR, Resizer, resize_to_columns, target_rows};
