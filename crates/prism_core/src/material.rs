//! Surface optical parameters.

use prism_math::{Vec3, Vec4};
use serde::Deserialize;

/// Optical parameters of a surface.
///
/// `albedo` weights the four light transport terms in order:
/// diffuse, specular, reflection, refraction. The weights need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Index of refraction (1.0 = no bending)
    pub refractive_index: f32,
    /// Weights of the diffuse, specular, reflect and refract terms
    pub albedo: Vec4,
    /// Base color, conceptually in [0, 1] but not clamped
    pub diffuse_color: Vec3,
    /// Phong exponent, higher is a tighter highlight
    pub specular_exponent: f32,
}

impl Material {
    /// Off-white matte surface with a soft highlight.
    pub const IVORY: Material = Material::new(
        1.0,
        Vec4::new(0.6, 0.3, 0.1, 0.0),
        Vec3::new(0.4, 0.4, 0.3),
        50.0,
    );

    /// Mostly refractive, slightly reflective.
    pub const GLASS: Material = Material::new(
        1.5,
        Vec4::new(0.0, 0.5, 0.1, 0.8),
        Vec3::new(0.6, 0.7, 0.8),
        125.0,
    );

    pub const RED_RUBBER: Material = Material::new(
        1.0,
        Vec4::new(0.9, 0.1, 0.0, 0.0),
        Vec3::new(0.3, 0.1, 0.1),
        10.0,
    );

    /// Near-perfect reflector with a very sharp, very bright highlight.
    pub const MIRROR: Material = Material::new(
        1.0,
        Vec4::new(0.0, 10.0, 0.8, 0.0),
        Vec3::new(1.0, 1.0, 1.0),
        1425.0,
    );

    /// Create a new material.
    pub const fn new(
        refractive_index: f32,
        albedo: Vec4,
        diffuse_color: Vec3,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    /// Weight of the diffuse term.
    #[inline]
    pub fn diffuse_weight(&self) -> f32 {
        self.albedo.x
    }

    /// Weight of the specular highlight term.
    #[inline]
    pub fn specular_weight(&self) -> f32 {
        self.albedo.y
    }

    /// Weight of the recursive reflection term.
    #[inline]
    pub fn reflect_weight(&self) -> f32 {
        self.albedo.z
    }

    /// Weight of the recursive refraction term.
    #[inline]
    pub fn refract_weight(&self) -> f32 {
        self.albedo.w
    }
}

impl Default for Material {
    /// Pure diffuse, black, non-refracting.
    fn default() -> Self {
        Self::new(1.0, Vec4::new(1.0, 0.0, 0.0, 0.0), Vec3::ZERO, 0.0)
    }
}
