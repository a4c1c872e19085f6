//! Sphere primitive for ray tracing.

use prism_core::{Material, SphereDesc};
use prism_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. `radius` must be positive.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Distance along a unit-direction ray to the nearest surface crossing
    /// at t >= 0.
    ///
    /// When the origin is inside the sphere this is the exit point, which is
    /// what refracted rays travelling through glass need.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        let l2 = l.dot(l);
        let r2 = self.radius * self.radius;

        // Pointing away from a sphere we are not inside
        if tca < 0.0 && l2 > r2 {
            return None;
        }

        let d2 = l2 - tca * tca;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;

        if t0 >= 0.0 {
            Some(t0)
        } else if t1 >= 0.0 {
            Some(t1)
        } else {
            None
        }
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}

impl From<&SphereDesc> for Sphere {
    fn from(desc: &SphereDesc) -> Self {
        Self::new(desc.center, desc.radius, desc.material)
    }
}
