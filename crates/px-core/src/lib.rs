/// Configuration, types, and shared structures for pixscii.
///
/// This crate contains the pixel buffers, the character palette, the error
/// taxonomy and the configuration shared across the pixscii workspace.

pub mod charset;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use charset::CharPalette;
pub use config::RenderConfig;
pub use error::CoreError;
pub use frame::{PixelBuffer, PixelFormat, RenderedArt};
