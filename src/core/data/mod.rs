pub mod colour;
pub mod colour_lut;
pub mod complex;
pub mod gradient;
pub mod iteration_field;
pub mod pixel_buffer;
pub mod point;
pub mod resolution;
pub mod viewport;
