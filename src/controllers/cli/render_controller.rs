use std::error::Error;
use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::render::render;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::RenderSettings;

pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    settings: RenderSettings,
    image: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P, settings: RenderSettings) -> Self {
        Self {
            presenter,
            settings,
            image: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[must_use]
    pub fn image(&self) -> Option<&PixelBuffer> {
        self.image.as_ref()
    }

    /// Renders `viewport` with the iteration budget the settings' quality
    /// gives for its zoom span, replacing any previous image.
    pub fn render(
        &mut self,
        viewport: Viewport,
        resolution: Resolution,
    ) -> Result<&PixelBuffer, Box<dyn Error>> {
        self.settings.validate()?;

        let request = self.settings.build_render_request(viewport, resolution)?;
        let lut = self.settings.build_lut()?;

        info!("Rendering Mandelbrot set...");
        info!("Image size: {}x{}", resolution.width(), resolution.height());
        info!(
            "Max iterations: {} ({} quality)",
            request.max_iterations(),
            self.settings.quality
        );

        let start = Instant::now();
        let image = render(&request, &lut)?;

        info!("Duration: {:?}", start.elapsed());

        Ok(self.image.insert(image))
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        match &self.image {
            Some(image) => {
                self.presenter.present(image, filepath)?;
                info!("Wrote {} to {}", self.presenter.format_name(), filepath.display());
            }
            None => warn!("nothing rendered yet, not writing {}", filepath.display()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::gradient::{Gradient, GradientStop};
    use crate::core::data::point::Point;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct StubPresenter {
        written: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for StubPresenter {
        fn present(&self, image: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.to_path_buf(), image.buffer_size()));
            Ok(())
        }

        fn format_name(&self) -> &str {
            "stub"
        }
    }

    fn black_to_white() -> RenderSettings {
        RenderSettings {
            gradient: Gradient::new(vec![
                GradientStop::new(0.0, Colour::BLACK).unwrap(),
                GradientStop::new(1.0, Colour::WHITE).unwrap(),
            ]),
            ..RenderSettings::default()
        }
    }

    #[test]
    fn test_render_then_write() {
        let mut controller = RenderController::new(StubPresenter::default(), black_to_white());
        let resolution = Resolution::new(4, 4).unwrap();

        let image = controller.render(Viewport::default(), resolution).unwrap();
        assert_eq!(image.pixel(Point { x: 3, y: 2 }), Some(Colour::WHITE));

        controller.write("out/frame.ppm").unwrap();

        let written = controller.presenter.written.borrow();
        assert_eq!(written.as_slice(), &[(PathBuf::from("out/frame.ppm"), 48)]);
    }

    #[test]
    fn test_write_before_render_writes_nothing() {
        let controller = RenderController::new(StubPresenter::default(), RenderSettings::default());

        controller.write("never.ppm").unwrap();

        assert!(controller.image().is_none());
        assert!(controller.presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_invalid_settings_keep_previous_image() {
        let mut controller = RenderController::new(StubPresenter::default(), black_to_white());
        let resolution = Resolution::new(2, 2).unwrap();
        controller.render(Viewport::default(), resolution).unwrap();

        controller.settings.lut_size = 0;

        assert!(controller.render(Viewport::default(), resolution).is_err());
        assert!(controller.image().is_some());
    }
}
