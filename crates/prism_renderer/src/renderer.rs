//! Frame renderer.
//!
//! One primary ray per pixel, traced with [`cast_ray`] into a floating
//! point framebuffer. Rows can be distributed across threads with rayon;
//! every pixel is computed the same way either way, so the result is
//! identical.

use std::time::Instant;

use prism_core::config::DEFAULT_MAX_DEPTH;
use prism_core::RenderSettings;
use rayon::prelude::*;

use crate::output::color_to_rgb8;
use crate::{cast_ray, Camera, Color, Scene};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Deepest recursion level that is still shaded
    pub max_depth: u32,
    /// Render rows in parallel
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            parallel: false,
        }
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            max_depth: settings.max_depth,
            parallel: settings.parallel,
        }
    }
}

/// Unclamped linear colors, one per pixel, row-major from the top row.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Tone map and quantize to packed RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Trace the primary ray through pixel (x, y).
#[inline]
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    cast_ray(&camera.ray_for_pixel(x, y), scene, 0, config)
}

/// Render the entire scene in one pass.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let mut image = Framebuffer::new(camera.image_width, camera.image_height);
    let width = image.width as usize;
    if width == 0 {
        return image;
    }

    log::info!(
        "Rendering {}x{} ({} spheres, {} lights, max depth {}, {})",
        camera.image_width,
        camera.image_height,
        scene.spheres().len(),
        scene.lights().len(),
        config.max_depth,
        if config.parallel { "parallel" } else { "serial" }
    );
    let start = Instant::now();

    let render_row = |(y, row): (usize, &mut [Color])| {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = render_pixel(camera, scene, x as u32, y as u32, config);
        }
    };

    if config.parallel {
        image
            .pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(render_row);
    } else {
        image.pixels.chunks_mut(width).enumerate().for_each(render_row);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
