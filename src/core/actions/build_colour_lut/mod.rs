pub mod build_colour_lut;
