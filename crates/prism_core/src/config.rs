//! Render settings, loadable from a JSON file.
//!
//! Every field is optional in the file; missing fields take the defaults of
//! the reference render (1064x768, 90 degree field of view, four bounces).

use std::path::{Path, PathBuf};

use prism_math::Interval;
use serde::Deserialize;
use thiserror::Error;

use crate::scene::{SceneDescription, SceneError};

/// Deepest recursion level that is still shaded; one level deeper falls
/// back to the environment map.
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// Largest accepted `max_depth`. Every shaded level spawns a reflected and a
/// refracted ray, so work doubles per level.
pub const MAX_DEPTH_LIMIT: u32 = 16;

/// Valid horizontal field of view, in degrees (exclusive).
const FOV_RANGE: Interval = Interval::new(0.0, 180.0);

/// Errors that can occur while loading render settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid settings: {0}")]
    Invalid(String),

    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything needed to produce one image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Horizontal field of view in degrees
    pub fov_degrees: f32,
    /// Deepest shaded recursion level
    pub max_depth: u32,
    /// Image decoded as the background
    pub environment_map: PathBuf,
    /// Output path; `.ppm` is written as binary PPM, anything else by extension
    pub output: PathBuf,
    /// Distribute rows across threads (output is identical either way)
    pub parallel: bool,
    /// Scene to render; `None` uses the default scene
    pub scene: Option<SceneDescription>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1064,
            height: 768,
            fov_degrees: 90.0,
            max_depth: DEFAULT_MAX_DEPTH,
            environment_map: PathBuf::from("envmap.jpg"),
            output: PathBuf::from("out.ppm"),
            parallel: true,
            scene: None,
        }
    }
}

impl RenderSettings {
    /// Read and validate settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings: RenderSettings =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        settings.validate()?;
        log::debug!("Loaded render settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "width and height must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if !FOV_RANGE.surrounds(self.fov_degrees) {
            return Err(ConfigError::Invalid(format!(
                "fov_degrees must be between 0 and 180, got {}",
                self.fov_degrees
            )));
        }

        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_depth must be at most {}, got {}",
                MAX_DEPTH_LIMIT, self.max_depth
            )));
        }

        if let Some(scene) = &self.scene {
            scene.validate()?;
        }

        Ok(())
    }

    /// Horizontal field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    /// The configured scene, or the default scene when none is given.
    pub fn scene_description(&self) -> SceneDescription {
        self.scene
            .clone()
            .unwrap_or_else(SceneDescription::default_scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = RenderSettings::default();
        assert_eq!(settings.width, 1064);
        assert_eq!(settings.height, 768);
        assert_eq!(settings.max_depth, 4);
        assert!((settings.fov() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(settings.validate().is_ok());
        assert_eq!(settings.scene_description(), SceneDescription::default_scene());
    }

    #[test]
    fn test_partial_json() {
        let settings: RenderSettings =
            serde_json::from_str(r#"{ "width": 320, "height": 240, "parallel": false }"#).unwrap();

        assert_eq!(settings.width, 320);
        assert_eq!(settings.height, 240);
        assert!(!settings.parallel);
        // Untouched fields keep their defaults
        assert_eq!(settings.fov_degrees, 90.0);
        assert_eq!(settings.output, PathBuf::from("out.ppm"));
        assert!(settings.scene.is_none());
    }

    #[test]
    fn test_json_with_scene() {
        let json = r#"{
            "scene": {
                "spheres": [{ "center": [0, 0, -10], "radius": 2 }],
                "lights": []
            }
        }"#;
        let settings: RenderSettings = serde_json::from_str(json).unwrap();

        let scene = settings.scene_description();
        assert_eq!(scene.spheres.len(), 1);
        assert!(scene.lights.is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let zero = RenderSettings {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::Invalid(_))));

        let wide = RenderSettings {
            fov_degrees: 180.0,
            ..Default::default()
        };
        assert!(matches!(wide.validate(), Err(ConfigError::Invalid(_))));

        let deep = RenderSettings {
            max_depth: 30,
            ..Default::default()
        };
        assert!(matches!(deep.validate(), Err(ConfigError::Invalid(_))));

        let at_limit = RenderSettings {
            max_depth: MAX_DEPTH_LIMIT,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        let mut scene = SceneDescription::default_scene();
        scene.spheres[0].radius = -1.0;
        let bad_scene = RenderSettings {
            scene: Some(scene),
            ..Default::default()
        };
        assert!(matches!(bad_scene.validate(), Err(ConfigError::Scene(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = RenderSettings::load("no/such/settings.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
