use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6) writer. Missing parent directories are created.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, image: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(fs::File::create(filepath)?);
        let resolution = image.resolution();

        // P6 header: magic, width and height, max channel value
        write!(file, "P6\n{} {}\n255\n", resolution.width(), resolution.height())?;
        file.write_all(image.buffer())?;
        file.flush()
    }

    fn format_name(&self) -> &str {
        "PPM (P6)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;

    #[test]
    fn test_writes_header_then_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("image.ppm");
        let resolution = Resolution::new(2, 1).unwrap();
        let image = PixelBuffer::from_data(resolution, vec![255, 0, 0, 0, 0, 255]).unwrap();

        PpmFilePresenter::new().present(&image, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 255]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.ppm");
        fs::write(&path, vec![7u8; 100]).unwrap();
        let image = PixelBuffer::from_data(Resolution::new(1, 1).unwrap(), vec![1, 2, 3]).unwrap();

        PpmFilePresenter::new().present(&image, &path).unwrap();

        assert_eq!(fs::read(&path).unwrap().len(), b"P6\n1 1\n255\n".len() + 3);
    }
}
