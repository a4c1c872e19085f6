//! Render the default scene without an environment map file.
//!
//! A small procedural sky stands in for the decoded background image.

use prism_core::{EnvironmentMap, SceneDescription};
use prism_renderer::{render, save, Camera, RenderConfig, Scene, Vec3};

fn main() {
    println!("Prism - Default Scene Example");
    println!("=============================");

    let environment = procedural_sky(256, 128);
    let scene = Scene::from_description(&SceneDescription::default_scene(), environment);

    let camera = Camera::new(640, 480, 90f32.to_radians());
    let config = RenderConfig {
        parallel: true,
        ..RenderConfig::default()
    };

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, &config);
    println!("Rendered {}x{} in {:?}", image.width, image.height, start.elapsed());

    let filename = "default_scene.ppm";
    save(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

/// Horizon-to-zenith blue gradient over a grey ground.
fn procedural_sky(width: u32, height: u32) -> EnvironmentMap {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        let v = y as f32 / height as f32;
        for _ in 0..width {
            let color = if v < 0.5 {
                let a = v * 2.0;
                Vec3::new(0.3, 0.5, 0.9) * (1.0 - a) + Vec3::new(0.9, 0.9, 1.0) * a
            } else {
                Vec3::splat(0.35)
            };
            pixels.push(color);
        }
    }
    EnvironmentMap::from_pixels(width, height, pixels).expect("sky dimensions match")
}
