//! Recursive Whitted shading.
//!
//! Local terms (Lambert diffuse, Phong specular, hard shadows) are combined
//! with recursively traced reflection and refraction, each weighted by the
//! material's albedo.

use prism_math::{Ray, Vec3};

use crate::{HitRecord, RenderConfig, Scene};

/// Color type alias (RGB, unbounded until tone mapping)
pub type Color = Vec3;

/// Offset applied along the normal before casting a secondary ray, so it
/// does not re-hit the surface it starts on.
pub const SHADOW_BIAS: f32 = 1e-3;

/// Direction used in place of a refracted ray under total internal reflection.
const TOTAL_INTERNAL_REFLECTION_DIR: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Accumulated light intensity at a surface point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightIntensity {
    pub diffuse: f32,
    pub specular: f32,
}

/// Compute the color seen along a ray.
///
/// `depth` counts the bounces so far; the camera passes 0. Rays deeper than
/// `config.max_depth` or that hit nothing return the environment color.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return scene.background(ray.direction);
    }
    let Some(hit) = scene.intersect(ray) else {
        return scene.background(ray.direction);
    };

    let dir = ray.direction;

    let reflect_dir = reflect(dir, hit.normal).normalize();
    let reflect_orig = offset_origin(hit.point, hit.normal, reflect_dir);
    let reflect_color = cast_ray(&Ray::new(reflect_orig, reflect_dir), scene, depth + 1, config);

    let refract_dir = refract(dir, hit.normal, hit.material.refractive_index, 1.0).normalize();
    let refract_orig = offset_origin(hit.point, hit.normal, refract_dir);
    let refract_color = cast_ray(&Ray::new(refract_orig, refract_dir), scene, depth + 1, config);

    let light = local_illumination(scene, &hit, dir);
    let m = &hit.material;

    m.diffuse_color * light.diffuse * m.diffuse_weight()
        + Color::ONE * light.specular * m.specular_weight()
        + reflect_color * m.reflect_weight()
        + refract_color * m.refract_weight()
}

/// Sum the diffuse and specular contributions of every unshadowed light.
///
/// A light is skipped entirely when anything lies between the point and the
/// light; there is no partial attenuation.
pub fn local_illumination(scene: &Scene, hit: &HitRecord, view_dir: Vec3) -> LightIntensity {
    let mut intensity = LightIntensity::default();

    for light in scene.lights() {
        let to_light = light.position - hit.point;
        let light_dir = to_light.normalize();
        let light_distance = to_light.length();

        let shadow_orig = offset_origin(hit.point, hit.normal, light_dir);
        if let Some(shadow) = scene.intersect(&Ray::new(shadow_orig, light_dir)) {
            if (shadow.point - shadow_orig).length() < light_distance {
                continue;
            }
        }

        intensity.diffuse += light.intensity * light_dir.dot(hit.normal).max(0.0);
        intensity.specular += reflect(light_dir, hit.normal)
            .dot(view_dir)
            .max(0.0)
            .powf(hit.material.specular_exponent)
            * light.intensity;
    }

    intensity
}

/// Move a point off its surface, to the side `dir` leaves from.
#[inline]
pub fn offset_origin(point: Vec3, normal: Vec3, dir: Vec3) -> Vec3 {
    if dir.dot(normal) < 0.0 {
        point - normal * SHADOW_BIAS
    } else {
        point + normal * SHADOW_BIAS
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(i: Vec3, n: Vec3) -> Vec3 {
    i - n * 2.0 * i.dot(n)
}

/// Refract a unit vector through a surface with Snell's law.
///
/// `n` is the outward normal, `eta_t` the index inside the surface and
/// `eta_i` the index outside. Rays leaving the surface (pointing along `n`)
/// swap the two media. Total internal reflection yields the fixed direction
/// (1, 0, 0) rather than a reflected ray.
pub fn refract(i: Vec3, n: Vec3, eta_t: f32, eta_i: f32) -> Vec3 {
    let cosi = -i.dot(n).clamp(-1.0, 1.0);
    let (cosi, n, eta_i, eta_t) = if cosi < 0.0 {
        (-cosi, -n, eta_t, eta_i)
    } else {
        (cosi, n, eta_i, eta_t)
    };

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);

    if k < 0.0 {
        TOTAL_INTERNAL_REFLECTION_DIR
    } else {
        i * eta + n * (eta * cosi - k.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;
    use prism_core::{EnvironmentMap, Light, Material};
    use prism_math::Vec4;

    fn gradient_environment() -> EnvironmentMap {
        let mut pixels = Vec::new();
        for y in 0..8 {
            for x in 0..16 {
                pixels.push(Vec3::new(x as f32 / 16.0, y as f32 / 8.0, 0.5));
            }
        }
        EnvironmentMap::from_pixels(16, 8, pixels).unwrap()
    }

    #[test]
    fn test_reflect() {
        let i = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(i, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(reflect(-Vec3::Z, Vec3::Z), Vec3::Z);
    }

    #[test]
    fn test_refract_unit_index_passes_straight() {
        let i = Vec3::new(0.3, -0.8, 0.1).normalize();
        let r = refract(i, Vec3::Y, 1.0, 1.0);
        assert!((r - i).length() < 1e-6);
    }

    #[test]
    fn test_refract_into_glass_bends_toward_normal() {
        let i = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = refract(i, Vec3::Y, 1.5, 1.0);

        // sin(theta_t) = sin(45deg) / 1.5
        let expected_sin = std::f32::consts::FRAC_1_SQRT_2 / 1.5;
        assert!((r.x - expected_sin).abs() < 1e-5);
        assert!(r.y < 0.0);
        assert!((r.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_refract_out_of_glass_swaps_media() {
        // Leaving glass along the outward normal side
        let i = Vec3::new(0.2, 1.0, 0.0).normalize();
        let r = refract(i, Vec3::Y, 1.5, 1.0);

        // Bends away from the normal: larger tangential component
        assert!(r.x > i.x);
        assert!(r.y > 0.0);
        assert!((r.x - i.x * 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_total_internal_reflection_fallback() {
        // Grazing exit from glass
        let i = Vec3::new(1.0, 0.1, 0.0).normalize();
        assert_eq!(refract(i, Vec3::Y, 1.5, 1.0), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_offset_origin() {
        let p = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(offset_origin(p, Vec3::Y, Vec3::Y).y, 1.0 + SHADOW_BIAS);
        assert_eq!(offset_origin(p, Vec3::Y, -Vec3::Y).y, 1.0 - SHADOW_BIAS);
    }

    #[test]
    fn test_escaping_ray_returns_environment() {
        let environment = gradient_environment();
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, Material::IVORY);
        let scene = Scene::new(
            vec![sphere],
            vec![Light::new(Vec3::new(10.0, 10.0, 10.0), 1.5)],
            environment.clone(),
        );
        let config = RenderConfig::default();

        let dirs = [
            Vec3::new(0.3, 0.4, -1.0).normalize(),
            Vec3::new(-1.0, 0.2, 0.5).normalize(),
            Vec3::new(0.1, 0.9, 0.2).normalize(),
        ];
        for dir in dirs {
            let color = cast_ray(&Ray::new(Vec3::ZERO, dir), &scene, 0, &config);
            assert_eq!(color, environment.sample(dir), "dir={dir:?}");
        }
    }

    #[test]
    fn test_recursion_depth_is_bounded() {
        // The camera sits inside a mirror that encloses everything, so no ray
        // ever escapes; only the depth limit ends the recursion.
        let half_mirror = Material::new(1.0, Vec4::new(0.0, 0.0, 0.5, 0.0), Vec3::ZERO, 0.0);
        let enclosure = Sphere::new(Vec3::ZERO, 100.0, half_mirror);
        let scene = Scene::new(vec![enclosure], Vec::new(), EnvironmentMap::uniform(Vec3::ONE));
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        // Depths 0..=4 are shaded, depth 5 falls back: five halvings
        let color = cast_ray(&ray, &scene, 0, &RenderConfig::default());
        assert_eq!(color, Vec3::splat(0.5f32.powi(5)));

        let shallow = RenderConfig {
            max_depth: 0,
            ..RenderConfig::default()
        };
        let color = cast_ray(&ray, &scene, 0, &shallow);
        assert_eq!(color, Vec3::splat(0.5));
    }

    #[test]
    fn test_shadowed_light_contributes_nothing() {
        let target = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, Material::IVORY);
        let occluder = Sphere::new(Vec3::new(0.0, 5.0, -10.0), 1.0, Material::RED_RUBBER);
        let light = Light::new(Vec3::new(0.0, 10.0, -10.0), 1.0);
        let hit = HitRecord {
            t: 1.0,
            point: Vec3::new(0.0, 1.0, -10.0),
            normal: Vec3::Y,
            material: Material::IVORY,
        };
        let view_dir = Vec3::new(0.0, -1.0, 0.0);

        let blocked = Scene::new(
            vec![target.clone(), occluder],
            vec![light],
            EnvironmentMap::uniform(Vec3::ZERO),
        );
        assert_eq!(
            local_illumination(&blocked, &hit, view_dir),
            LightIntensity::default()
        );

        let open = Scene::new(vec![target], vec![light], EnvironmentMap::uniform(Vec3::ZERO));
        let lit = local_illumination(&open, &hit, view_dir);
        assert!(lit.diffuse > 0.0);
        assert!((lit.diffuse - 1.0).abs() < 1e-6);
        assert!(lit.specular > 0.0);
    }

    #[test]
    fn test_occluder_beyond_light_does_not_shadow() {
        let target = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, Material::IVORY);
        let beyond = Sphere::new(Vec3::new(0.0, 5.0, -10.0), 1.0, Material::IVORY);
        let light = Light::new(Vec3::new(0.0, 3.0, -10.0), 0.7);
        let scene = Scene::new(
            vec![target, beyond],
            vec![light],
            EnvironmentMap::uniform(Vec3::ZERO),
        );
        let hit = HitRecord {
            t: 1.0,
            point: Vec3::new(0.0, 1.0, -10.0),
            normal: Vec3::Y,
            material: Material::IVORY,
        };

        let lit = local_illumination(&scene, &hit, -Vec3::Y);
        assert!((lit.diffuse - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_diffuse_composition() {
        let matte = Material::new(1.0, Vec4::new(1.0, 0.0, 0.0, 0.0), Vec3::splat(0.5), 10.0);
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, matte);
        let light = Light::new(Vec3::new(0.0, 0.0, 10.0), 2.0);
        let scene = Scene::new(vec![sphere], vec![light], EnvironmentMap::uniform(Vec3::ZERO));

        let color = cast_ray(&Ray::new(Vec3::ZERO, -Vec3::Z), &scene, 0, &RenderConfig::default());
        assert!((color - Vec3::ONE).length() < 1e-5, "color={color:?}");
    }
}
