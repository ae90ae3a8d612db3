use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a finished image to a file in some format.
pub trait FilePresenterPort {
    fn present(&self, image: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;

    fn format_name(&self) -> &str;
}
