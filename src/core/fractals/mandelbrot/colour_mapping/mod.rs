pub mod lut_colour_map;
