use crate::catalog::{BodyCatalog, BodyDefinition, CatalogError, default_bodies};
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const ENVIRONMENT_PREFIX: &str = "ORRERY";

#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OrreryConfig {
    pub simulation: SimulationConfig,
    pub scene: SceneConfig,
    pub camera: CameraConfig,
    pub bodies: Vec<BodyDefinition>,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            scene: SceneConfig::default(),
            camera: CameraConfig::default(),
            bodies: default_bodies(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Added to every body's angular speed each frame
    pub global_rate: f32,
    pub rate_step: f32,
    /// The global rate is clamped to `[-rate_limit, rate_limit]`
    pub rate_limit: f32,
    pub initial_seed: Option<u64>,
    pub start_paused: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            global_rate: 0.001,
            rate_step: 0.001,
            rate_limit: 0.05,
            initial_seed: None,
            start_paused: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub sun_radius: f32,
    pub sun_texture: String,
    pub backdrop_texture: String,
    pub backdrop_radius: f32,
    pub point_light_intensity: f32,
    pub point_light_range: f32,
    pub ambient_brightness: f32,
    pub guide_segments: usize,
    pub show_orbit_guides: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sun_radius: 6.0,
            sun_texture: "textures/sun.jpg".to_string(),
            backdrop_texture: "textures/milkyway.jpg".to_string(),
            backdrop_radius: 500.0,
            point_light_intensity: 50_000_000.0,
            point_light_range: 250.0,
            ambient_brightness: 400.0,
            guide_segments: 64,
            show_orbit_guides: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub orbit_smoothness: f32,
    pub zoom_smoothness: f32,
    pub pan_smoothness: f32,
    pub zoom_lower_limit: f32,
    /// `None` leaves zoom unbounded
    pub zoom_upper_limit: Option<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [75.0, 100.0, 75.0],
            fov_degrees: 55.0,
            near: 0.1,
            far: 1000.0,
            orbit_smoothness: 0.1,
            zoom_smoothness: 0.1,
            pan_smoothness: 0.02,
            zoom_lower_limit: 8.0,
            zoom_upper_limit: Some(450.0),
        }
    }
}

impl OrreryConfig {
    /// Validated catalog of the configured bodies.
    pub fn catalog(&self) -> Result<BodyCatalog, CatalogError> {
        BodyCatalog::new(self.bodies.clone())
    }

    /// Location of the per-user configuration file, when the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "orrery", "Orrery")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the per-user configuration, falling back to defaults
    pub fn load_from_user_config() -> Self {
        match Self::user_config_path() {
            Some(path) => Self::load_or_default(path),
            None => {
                info!("No configuration directory available. Using defaults.");
                Self::default()
            }
        }
    }

    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    /// or cannot be parsed. `ORRERY__SECTION__KEY` environment variables override file values,
    /// and apply on top of the defaults when there is no file.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load_layered(
            path.as_ref(),
            config::Environment::with_prefix(ENVIRONMENT_PREFIX).separator("__"),
        )
    }

    fn load_layered(path: &Path, environment: config::Environment) -> Self {
        let file_exists = path.exists();
        if !file_exists {
            info!("Config file {} not found. Using defaults.", path.display());
        }

        let loaded = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(environment)
            .build()
            .and_then(|settings| settings.try_deserialize::<Self>());

        match loaded {
            Ok(config) => {
                if file_exists {
                    info!("Loaded configuration from {}", path.display());
                }
                config
            }
            Err(e) => {
                warn!(
                    "Failed to parse config file {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Rejects scene settings that would produce degenerate geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scene = &self.scene;
        for (field, value) in [
            ("scene.sun_radius", scene.sun_radius),
            ("scene.backdrop_radius", scene.backdrop_radius),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Configuration values that load but cannot be used
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositive { field: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be a positive number, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("orrery-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_default_config_catalog_is_valid() {
        let config = OrreryConfig::default();
        let catalog = config.catalog().expect("default bodies validate");
        assert_eq!(catalog, BodyCatalog::default());
        assert_eq!(config.scene.guide_segments, 64);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = OrreryConfig::load_or_default(temp_path("does-not-exist.toml"));
        assert_eq!(config, OrreryConfig::default());
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        let path = temp_path("roundtrip.toml");
        let mut config = OrreryConfig::default();
        config.simulation.global_rate = 0.004;
        config.simulation.initial_seed = Some(7);
        config.bodies.truncate(2);

        config.save(&path).expect("config saves");
        let loaded = OrreryConfig::load_or_default(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.simulation.global_rate, 0.004);
        assert_eq!(loaded.simulation.initial_seed, Some(7));
        assert_eq!(loaded.bodies.len(), 2);
        assert_eq!(loaded.bodies[0].name, "Mercury");
    }

    #[test]
    fn test_partial_file_fills_remaining_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "[simulation]\nglobal_rate = 0.002\n").expect("write temp file");
        let loaded = OrreryConfig::load_or_default(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.simulation.global_rate, 0.002);
        assert_eq!(loaded.camera, CameraConfig::default());
        assert_eq!(loaded.bodies, default_bodies());
    }

    #[test]
    fn test_unparseable_file_gives_defaults() {
        let path = temp_path("broken.toml");
        std::fs::write(&path, "this is = = not toml").expect("write temp file");
        let loaded = OrreryConfig::load_or_default(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, OrreryConfig::default());
    }

    #[test]
    fn test_invalid_configured_body_surfaces_catalog_error() {
        let mut config = OrreryConfig::default();
        config.bodies[0].orbit_radius = -3.0;
        assert!(matches!(
            config.catalog(),
            Err(CatalogError::NonPositiveRadius { .. })
        ));
    }

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let source = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        config::Environment::with_prefix(ENVIRONMENT_PREFIX)
            .separator("__")
            .source(Some(source))
    }

    #[test]
    fn test_environment_overrides_apply_without_a_file() {
        let loaded = OrreryConfig::load_layered(
            &temp_path("env-only.toml"),
            environment(&[("ORRERY__SIMULATION__GLOBAL_RATE", "0.004")]),
        );

        assert_eq!(loaded.simulation.global_rate, 0.004);
        assert_eq!(loaded.scene, SceneConfig::default());
    }

    #[test]
    fn test_environment_overrides_file_values() {
        let path = temp_path("env-over-file.toml");
        std::fs::write(&path, "[scene]\nsun_radius = 4.0\nbackdrop_radius = 300.0\n")
            .expect("write temp file");
        let loaded = OrreryConfig::load_layered(
            &path,
            environment(&[("ORRERY__SCENE__SUN_RADIUS", "9.5")]),
        );
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.scene.sun_radius, 9.5);
        assert_eq!(loaded.scene.backdrop_radius, 300.0);
    }

    #[test]
    fn test_validate_rejects_degenerate_scene() {
        assert_eq!(OrreryConfig::default().validate(), Ok(()));

        let mut config = OrreryConfig::default();
        config.scene.sun_radius = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "scene.sun_radius",
                value: 0.0
            })
        );

        let mut config = OrreryConfig::default();
        config.scene.backdrop_radius = -500.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "scene.backdrop_radius",
                ..
            })
        ));

        config.scene.backdrop_radius = f32::NAN;
        assert!(config.validate().is_err());
    }
}
