//! The renderable scene: spheres, lights, floor and environment.

use prism_core::{EnvironmentMap, Light, Material, SceneDescription};
use prism_math::{Ray, Vec3};

use crate::hittable::{Floor, HitRecord};
use crate::Sphere;

/// Render distance cutoff: nothing farther than this is hit.
pub const MAX_DISTANCE: f32 = 1000.0;

/// An immutable scene, shared read-only by every ray of a render.
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    environment: EnvironmentMap,
}

impl Scene {
    /// Create a scene. Spheres are tested in order; the first of two
    /// equally distant spheres wins.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>, environment: EnvironmentMap) -> Self {
        Self {
            spheres,
            lights,
            environment,
        }
    }

    /// Build a scene from an already validated description.
    pub fn from_description(desc: &SceneDescription, environment: EnvironmentMap) -> Self {
        let spheres = desc.spheres.iter().map(Sphere::from).collect();
        Self::new(spheres, desc.lights.clone(), environment)
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Color seen along a direction that escapes the scene.
    #[inline]
    pub fn background(&self, dir: Vec3) -> Vec3 {
        self.environment.sample(dir)
    }

    /// Find the nearest surface along the ray.
    ///
    /// Returns `None` when nothing is hit closer than [`MAX_DISTANCE`].
    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        let mut closest: Option<(f32, &Sphere)> = None;
        for sphere in &self.spheres {
            if let Some(t) = sphere.intersect(ray) {
                if closest.map_or(true, |(best, _)| t < best) {
                    closest = Some((t, sphere));
                }
            }
        }

        let mut hit = closest.map(|(t, sphere)| {
            let point = ray.at(t);
            HitRecord {
                t,
                point,
                normal: sphere.normal_at(point),
                material: *sphere.material(),
            }
        });

        let sphere_dist = hit.map_or(f32::MAX, |h| h.t);
        if let Some(t) = Floor::intersect(ray, sphere_dist) {
            let point = ray.at(t);
            // Only the diffuse color is procedural; the rest of the floor's
            // optics come from whatever sphere lies behind it.
            let base = hit.map_or_else(Material::default, |h| h.material);
            hit = Some(HitRecord {
                t,
                point,
                normal: Vec3::Y,
                material: Material {
                    diffuse_color: Floor::color_at(point),
                    ..base
                },
            });
        }

        hit.filter(|h| h.t < MAX_DISTANCE)
    }
}
