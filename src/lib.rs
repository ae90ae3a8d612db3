pub mod controllers;
pub mod core;
pub mod presenters;
pub mod storage;

pub use crate::controllers::cli::render_controller::RenderController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::build_colour_lut::build_colour_lut::build_colour_lut;
pub use crate::core::actions::render::render::{evaluate, render, render_view, RenderError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::colour_lut::{ColourLut, MappingMode, DEFAULT_LUT_SIZE};
pub use crate::core::data::gradient::{Gradient, GradientStop};
pub use crate::core::data::iteration_field::{EscapeValue, IterationField};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::resolution::Resolution;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::iteration_policy::compute_max_iterations;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::RenderSettings;
pub use crate::core::fractals::mandelbrot::params::RenderRequest;
pub use crate::core::fractals::mandelbrot::quality::{Quality, QualityLevel};
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::storage::gradient_preset::GradientPreset;
