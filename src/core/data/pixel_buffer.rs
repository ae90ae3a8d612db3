use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.size() * 3
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        resolution_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                resolution_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "resolution size {} does not match buffer size {}",
                    resolution_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed 8-bit RGB, row-major, stride `3 * width`, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = resolution_to_buffer_size(resolution);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                resolution_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn stride(&self) -> usize {
        self.resolution.width() as usize * 3
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.resolution.contains_point(pixel) {
            return None;
        }

        let index = pixel.y as usize * self.stride() + pixel.x as usize * 3;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_rejects_wrong_length() {
        let resolution = Resolution::new(2, 2).unwrap();
        let result = PixelBuffer::from_data(resolution, vec![0; 11]);

        assert_eq!(
            result,
            Err(PixelBufferError::BoundsMismatch {
                resolution_size: 12,
                buffer_size: 11
            })
        );
    }

    #[test]
    fn test_pixel_reads_packed_rgb() {
        let resolution = Resolution::new(2, 2).unwrap();
        let data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let buffer = PixelBuffer::from_data(resolution, data).unwrap();

        assert_eq!(buffer.stride(), 6);
        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }), Some(Colour { r: 4, g: 5, b: 6 }));
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), Some(Colour { r: 7, g: 8, b: 9 }));
        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }), None);
    }
}
