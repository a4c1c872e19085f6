//! Prism Renderer - recursive CPU ray tracing.
//!
//! Spheres and a checkerboard floor lit by point lights, with hard shadows,
//! Phong highlights, mirror reflection and Snell refraction. Rays that escape
//! the scene (or recurse too deep) pick up the environment map.

mod camera;
mod hittable;
mod output;
mod renderer;
mod scene;
mod shading;
mod sphere;

pub use camera::Camera;
pub use hittable::{Floor, HitRecord};
pub use output::{color_to_rgb8, save, tone_map, write_ppm, OutputError};
pub use renderer::{render, render_pixel, Framebuffer, RenderConfig};
pub use scene::{Scene, MAX_DISTANCE};
pub use shading::{
    cast_ray, local_illumination, offset_origin, reflect, refract, Color, LightIntensity,
    SHADOW_BIAS,
};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{Ray, Vec3};
