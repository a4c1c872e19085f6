//! Scene description: the spheres and lights a render is built from.
//!
//! This is plain data. The renderer turns it into an intersectable scene
//! once it has been validated.

use prism_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::{Light, Material};

/// Errors for scene descriptions that break the geometric invariants.
#[derive(Error, Debug, PartialEq)]
pub enum SceneError {
    #[error("sphere {index}: radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("sphere {index}: center must be finite")]
    InvalidCenter { index: usize },

    #[error("sphere {index}: refractive index must be positive, got {ior}")]
    InvalidRefractiveIndex { index: usize, ior: f32 },

    #[error("sphere {index}: specular exponent must be non-negative, got {exponent}")]
    InvalidSpecularExponent { index: usize, exponent: f32 },

    #[error("light {index}: intensity must be non-negative and finite, got {intensity}")]
    InvalidLight { index: usize, intensity: f32 },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// A sphere as written in a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SphereDesc {
    pub center: Vec3,
    pub radius: f32,
    #[serde(default)]
    pub material: Material,
}

impl SphereDesc {
    pub const fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// Ordered spheres plus an unordered set of point lights.
///
/// Sphere order only matters when two spheres are hit at exactly the same
/// distance; the first one wins.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub spheres: Vec<SphereDesc>,
    #[serde(default)]
    pub lights: Vec<Light>,
}

impl SceneDescription {
    /// Four spheres (ivory, glass, red rubber, mirror) under three lights.
    pub fn default_scene() -> Self {
        Self {
            spheres: vec![
                SphereDesc::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, Material::IVORY),
                SphereDesc::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, Material::GLASS),
                SphereDesc::new(Vec3::new(1.5, -0.5, -18.0), 3.0, Material::RED_RUBBER),
                SphereDesc::new(Vec3::new(7.0, 5.0, -18.0), 4.0, Material::MIRROR),
            ],
            lights: vec![
                Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5),
                Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8),
                Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7),
            ],
        }
    }

    /// Check every sphere and light against the data model invariants.
    pub fn validate(&self) -> SceneResult<()> {
        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.center.is_finite() {
                return Err(SceneError::InvalidCenter { index });
            }
            if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            let material = &sphere.material;
            if !(material.refractive_index > 0.0) {
                return Err(SceneError::InvalidRefractiveIndex {
                    index,
                    ior: material.refractive_index,
                });
            }
            if !(material.specular_exponent >= 0.0) {
                return Err(SceneError::InvalidSpecularExponent {
                    index,
                    exponent: material.specular_exponent,
                });
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !(light.intensity >= 0.0 && light.intensity.is_finite()) {
                return Err(SceneError::InvalidLight {
                    index,
                    intensity: light.intensity,
                });
            }
        }

        Ok(())
    }
}
