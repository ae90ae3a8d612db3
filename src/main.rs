use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use mandel_gradient::core::data::viewport::Viewport;
use mandel_gradient::storage::gradient_preset::{read_preset, write_preset};
use mandel_gradient::storage::settings::{read_settings, write_settings};
use mandel_gradient::{
    GradientPreset, PpmFilePresenter, QualityLevel, RenderController, RenderSettings, Resolution,
};

#[derive(Parser, Debug)]
#[command(name = "mandel_gradient")]
#[command(about = "Render the Mandelbrot set through a colour gradient to a PPM image")]
struct Args {
    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    #[arg(long, default_value_t = Viewport::default().xmin(), allow_negative_numbers = true)]
    xmin: f64,

    #[arg(long, default_value_t = Viewport::default().xmax(), allow_negative_numbers = true)]
    xmax: f64,

    #[arg(long, default_value_t = Viewport::default().ymin(), allow_negative_numbers = true)]
    ymin: f64,

    #[arg(long, default_value_t = Viewport::default().ymax(), allow_negative_numbers = true)]
    ymax: f64,

    /// Render settings JSON; built-in defaults when omitted
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Gradient preset (.grd) replacing the settings' gradient
    #[arg(short, long)]
    gradient: Option<PathBuf>,

    /// low, medium, high, ultra or custom
    #[arg(short, long)]
    quality: Option<QualityLevel>,

    #[arg(long)]
    escape_radius: Option<f64>,

    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,

    /// Also write the resolved settings to this JSON file
    #[arg(long)]
    save_settings: Option<PathBuf>,

    /// Also write the resolved gradient as a preset named after the file
    #[arg(long)]
    save_preset: Option<PathBuf>,
}

impl Args {
    fn resolve_settings(&self) -> Result<RenderSettings, Box<dyn Error>> {
        let mut settings = match &self.settings {
            Some(path) => read_settings(path)?,
            None => RenderSettings::default(),
        };

        if let Some(path) = &self.gradient {
            let preset = read_preset(path)?;
            info!("Using gradient preset {:?}", preset.name());
            settings.gradient = preset.into_gradient();
        }

        if let Some(quality) = self.quality {
            settings.quality = quality;
        }

        if let Some(escape_radius) = self.escape_radius {
            settings.escape_radius = escape_radius;
        }

        Ok(settings)
    }

    fn save_resolved(&self, settings: &RenderSettings) -> Result<(), Box<dyn Error>> {
        if let Some(path) = &self.save_settings {
            write_settings(settings, path)?;
            info!("Saved settings to {}", path.display());
        }

        if let Some(path) = &self.save_preset {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            write_preset(&GradientPreset::new(name, settings.gradient.clone()), path)?;
            info!("Saved gradient preset to {}", path.display());
        }

        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = args.resolve_settings()?;
    args.save_resolved(&settings)?;
    let viewport = Viewport::new(args.xmin, args.xmax, args.ymin, args.ymax)?;
    let resolution = Resolution::new(args.width, args.height)?;

    let mut controller = RenderController::new(PpmFilePresenter::new(), settings);

    controller.render(viewport, resolution)?;
    controller.write(&args.output)?;

    Ok(())
}
