//! Spherical environment map sampled by rays that escape the scene.
//!
//! The map is decoded once, then shared read-only by every ray of a render.

use std::f32::consts::PI;
use std::path::Path;

use prism_math::{Vec2, Vec3};
use thiserror::Error;

/// Errors that can occur while building an environment map.
#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("failed to load environment map {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("environment map dimensions must be positive, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("environment map is {width}x{height} but has {len} pixels")]
    SizeMismatch { width: u32, height: u32, len: usize },
}

pub type EnvironmentResult<T> = Result<T, EnvironmentError>;

/// A latitude-longitude image of reflectances in [0, 1].
///
/// Pixels are stored row-major, top row first.
#[derive(Clone, Debug)]
pub struct EnvironmentMap {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

impl EnvironmentMap {
    /// Create a map from decoded pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Vec3>) -> EnvironmentResult<Self> {
        if width == 0 || height == 0 {
            return Err(EnvironmentError::EmptyImage { width, height });
        }
        if pixels.len() != width as usize * height as usize {
            return Err(EnvironmentError::SizeMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a map from tightly packed 8-bit RGB data.
    ///
    /// Bytes are scaled by 1/255 and used as-is, without sRGB decoding.
    pub fn from_rgb8(width: u32, height: u32, data: &[u8]) -> EnvironmentResult<Self> {
        let pixels = data
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0] as f32, p[1] as f32, p[2] as f32) / 255.0)
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// A 1x1 map that returns the same color in every direction.
    pub fn uniform(color: Vec3) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![color],
        }
    }

    /// Decode an environment map from an image file (png or jpeg).
    pub fn load(path: impl AsRef<Path>) -> EnvironmentResult<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| EnvironmentError::Load {
            path: path.display().to_string(),
            source,
        })?;

        let color_type = img.color();
        if color_type != image::ColorType::Rgb8 {
            log::warn!(
                "Environment map {} is {:?}, converting to RGB8",
                path.display(),
                color_type
            );
        }

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let map = Self::from_rgb8(width, height, rgb.as_raw())?;

        log::debug!(
            "Loaded environment map: {} ({}x{})",
            path.display(),
            width,
            height
        );

        Ok(map)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Look up the color seen along a unit direction.
    pub fn sample(&self, dir: Vec3) -> Vec3 {
        let uv = spherical_uv(dir);
        // u and v reach exactly 1.0 along -z and straight down.
        let x = ((uv.x * self.width as f32) as usize).min(self.width as usize - 1);
        let y = ((uv.y * self.height as f32) as usize).min(self.height as usize - 1);
        self.pixels[x + y * self.width as usize]
    }
}

/// Map a unit direction to latitude-longitude texture coordinates in [0, 1].
///
/// u wraps around the vertical axis with its seam along -z,
/// v runs from straight up (0) to straight down (1).
pub fn spherical_uv(dir: Vec3) -> Vec2 {
    let u = 0.5 + dir.x.atan2(dir.z) / (2.0 * PI);
    let v = 0.5 - dir.y.asin() / PI;
    Vec2::new(u, v)
}
