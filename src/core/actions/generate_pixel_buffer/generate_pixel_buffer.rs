use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError<E> {
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl<E> From<PixelBufferError> for GeneratePixelBufferError<E> {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps input values to colours into a packed RGB buffer.
///
/// Each value owns its own three bytes of output, so the mapping runs in
/// parallel with no coordination beyond the shared, read-only mapper.
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    resolution: Resolution,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync,
    CMap::Failure: Send,
{
    if input.len() != resolution.size() {
        return Err(GeneratePixelBufferError::PixelBuffer(
            PixelBufferError::BoundsMismatch {
                resolution_size: resolution.size() * 3,
                buffer_size: input.len() * 3,
            },
        ));
    }

    let mut buffer: PixelBufferData = vec![0; input.len() * 3];

    buffer
        .par_chunks_mut(3)
        .zip(input.par_iter())
        .try_for_each(|(pixel, &value)| -> Result<(), GeneratePixelBufferError<CMap::Failure>> {
            let Colour { r, g, b } = mapper.map(value).map_err(GeneratePixelBufferError::ColourMap)?;
            pixel.copy_from_slice(&[r, g, b]);
            Ok(())
        })?;

    Ok(PixelBuffer::from_data(resolution, buffer)?)
}
