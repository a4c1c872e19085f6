//! `prism [SETTINGS.json]` renders a scene to an image file.
//!
//! Without a settings file the default scene is rendered at 1064x768 using
//! `envmap.jpg` as the background and written to `out.ppm`.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use prism_core::{EnvironmentMap, RenderSettings};
use prism_renderer::{render, save, Camera, RenderConfig, Scene};

fn load_settings(path: Option<PathBuf>) -> Result<RenderSettings> {
    match path {
        Some(path) => RenderSettings::load(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => {
            log::debug!("No settings file given, using defaults");
            Ok(RenderSettings::default())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Prism");

    let settings = load_settings(std::env::args_os().nth(1).map(PathBuf::from))?;
    log::debug!("{:?}", settings);

    let start = Instant::now();
    let environment = EnvironmentMap::load(&settings.environment_map)
        .context("Can not load the environment map")?;
    log::info!(
        "Environment map {}x{} loaded in {:?}",
        environment.width(),
        environment.height(),
        start.elapsed()
    );

    let scene = Scene::from_description(&settings.scene_description(), environment);
    let camera = Camera::new(settings.width, settings.height, settings.fov());
    let config = RenderConfig::from(&settings);

    let image = render(&camera, &scene, &config);

    save(&image, &settings.output)
        .with_context(|| format!("Failed to save {}", settings.output.display()))?;
    log::info!("Saved to {}", settings.output.display());

    Ok(())
}
