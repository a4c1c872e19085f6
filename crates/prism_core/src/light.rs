//! Point lights.

use prism_math::Vec3;
use serde::Deserialize;

/// An omnidirectional point light with no falloff.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new light.
    pub const fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}
