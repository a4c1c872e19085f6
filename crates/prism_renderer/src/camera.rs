//! Pinhole camera for primary ray generation.

use prism_math::{Ray, Vec3};

/// A pinhole camera at the origin looking down -z, with +y up.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    /// Horizontal field of view in radians
    fov: f32,
    origin: Vec3,
}

impl Camera {
    /// Create a camera for an image of the given size.
    pub fn new(image_width: u32, image_height: u32, fov: f32) -> Self {
        Self {
            image_width,
            image_height,
            fov,
            origin: Vec3::ZERO,
        }
    }

    /// Primary ray through the center of pixel (i, j), with (0, 0) the
    /// top-left pixel.
    pub fn ray_for_pixel(&self, i: u32, j: u32) -> Ray {
        let width = self.image_width as f32;
        let height = self.image_height as f32;

        let dir_x = (i as f32 + 0.5) - width / 2.0;
        let dir_y = -(j as f32 + 0.5) + height / 2.0;
        let dir_z = -width / (2.0 * (self.fov / 2.0).tan());

        Ray::new(self.origin, Vec3::new(dir_x, dir_y, dir_z).normalize())
    }
}
