//! Prism Core - scene description for the Prism ray tracer.
//!
//! This crate provides the read-only inputs a render consumes:
//!
//! - **Surface data**: `Material`, `Light`
//! - **Scene description**: `SphereDesc`, `SceneDescription` and the default scene
//! - **Environment map**: decoded background image sampled by escaping rays
//! - **Render settings**: JSON-configurable image size, field of view and paths
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{EnvironmentMap, RenderSettings};
//!
//! let settings = RenderSettings::load("render.json")?;
//! let environment = EnvironmentMap::load(&settings.environment_map)?;
//! let scene = settings.scene_description();
//! println!("{} spheres, {} lights", scene.spheres.len(), scene.lights.len());
//! ```

pub mod config;
pub mod environment;
pub mod light;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use config::{ConfigError, RenderSettings};
pub use environment::{EnvironmentError, EnvironmentMap};
pub use light::Light;
pub use material::Material;
pub use scene::{SceneDescription, SceneError, SphereDesc};
