//! Hit records and the checkerboard floor.

use prism_core::Material;
use prism_math::{Interval, Ray, Vec3};

/// Record of the nearest ray-surface intersection.
///
/// Recomputed for every query, never cached across rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: Material,
}

/// The bounded checkerboard plane under the spheres.
///
/// It is not stored in the scene; its placement and pattern are fixed.
pub struct Floor;

impl Floor {
    /// Height of the plane.
    pub const HEIGHT: f32 = -4.0;

    /// Extent along x (exclusive); outside the plane is transparent.
    pub const X_EXTENT: Interval = Interval::new(-10.0, 10.0);

    /// Extent along z (exclusive).
    pub const Z_EXTENT: Interval = Interval::new(-30.0, -10.0);

    /// Rays flatter than this are treated as parallel to the plane.
    const MIN_DIR_Y: f32 = 1e-3;

    /// Dims the floor relative to the lit spheres.
    const DIM: f32 = 0.3;

    /// Distance to the floor if the ray crosses it in front of the origin,
    /// inside the board, and strictly closer than `max_t`.
    pub fn intersect(ray: &Ray, max_t: f32) -> Option<f32> {
        if ray.direction.y.abs() <= Self::MIN_DIR_Y {
            return None;
        }

        let d = -(ray.origin.y - Self::HEIGHT) / ray.direction.y;
        let p = ray.at(d);

        let on_board = Self::X_EXTENT.surrounds(p.x) && Self::Z_EXTENT.surrounds(p.z);
        (d > 0.0 && on_board && d < max_t).then_some(d)
    }

    /// Diffuse color of the board at a point on it.
    ///
    /// Squares are two units wide: even cells are near-white, odd cells tan.
    pub fn color_at(point: Vec3) -> Vec3 {
        let cell = (0.5 * point.x).floor() as i64 + (0.5 * point.z).floor() as i64;
        let color = if cell.rem_euclid(2) == 0 {
            Vec3::new(1.0, 1.0, 1.0)
        } else {
            Vec3::new(1.0, 0.7, 0.3)
        };
        color * Self::DIM
    }
}
