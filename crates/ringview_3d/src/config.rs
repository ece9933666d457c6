//! Scene configuration
//!
//! Every section is optional in the TOML file and falls back to the values
//! the scene was tuned with.
//!
//! ```toml
//! [ring]
//! radius = 5.0
//!
//! [intro]
//! duration = 3.0
//!
//! [smoothing]
//! kind = "time-normalized"
//! factor = 0.1
//! reference_hz = 60.0
//!
//! [[catalog]]
//! title = "About us"
//! model = "/models/about.fbx"
//! ```

use crate::camera::{Pose, Swirl, MAX_ELEVATION};
use crate::catalog::{CatalogEntry, Ring};
use crate::error::{Result, SceneError};
use crate::focus::FocusSettings;
use ringview_animation::{Easing, SmoothingPolicy};
use ringview_core::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default file name for scene configuration
pub const CONFIG_FILE: &str = "ringview.toml";

/// Complete scene configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub ring: RingConfig,
    pub intro: IntroConfig,
    pub overview: OverviewConfig,
    pub focus: FocusConfig,
    pub smoothing: SmoothingPolicy,
    pub orbit: OrbitConfig,
    /// Ordered objects; the length sets the ring cardinality
    pub catalog: Vec<CatalogEntry>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ring: RingConfig::default(),
            intro: IntroConfig::default(),
            overview: OverviewConfig::default(),
            focus: FocusConfig::default(),
            smoothing: SmoothingPolicy::default(),
            orbit: OrbitConfig::default(),
            catalog: default_catalog(),
        }
    }
}

/// Ring geometry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub radius: f32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self { radius: 5.0 }
    }
}

/// Opening flight
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    /// Flight duration in seconds
    pub duration: f32,
    pub start_position: Vec3,
    /// Where the camera looks before the flight, up into the sky
    pub start_look_at: Vec3,
    pub easing: Easing,
    pub swirl: Swirl,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            duration: 3.0,
            start_position: Vec3::new(0.0, 15.0, 0.0),
            start_look_at: Vec3::new(0.0, 20.0, 0.0),
            easing: Easing::CubicOut,
            swirl: Swirl::NONE,
        }
    }
}

impl IntroConfig {
    pub fn start_pose(&self) -> Pose {
        Pose::new(self.start_position, self.start_look_at)
    }
}

/// Resting pose reached by the intro and restored by back
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewConfig {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(8.0, 7.0, 10.0),
            look_at: Vec3::ZERO,
        }
    }
}

impl OverviewConfig {
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.look_at)
    }
}

/// Camera placement around a focused object
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    pub offset: Vec3,
    pub look_offset: Vec3,
    pub arrive_epsilon: f32,
    pub return_epsilon: f32,
}

impl Default for FocusConfig {
    fn default() -> Self {
        let settings = FocusSettings::default();
        Self {
            offset: settings.offset,
            look_offset: settings.look_offset,
            arrive_epsilon: settings.arrive_epsilon,
            return_epsilon: settings.return_epsilon,
        }
    }
}

impl FocusConfig {
    pub fn settings(&self) -> FocusSettings {
        FocusSettings {
            offset: self.offset,
            look_offset: self.look_offset,
            arrive_epsilon: self.arrive_epsilon,
            return_epsilon: self.return_epsilon,
        }
    }
}

/// Orbit navigation limits and feel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotation_speed: f32,
    pub zoom_speed: f32,
    pub damping: f32,
    pub enable_pan: bool,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            min_distance: 5.0,
            max_distance: 20.0,
            rotation_speed: 0.005,
            zoom_speed: 0.1,
            damping: 0.1,
            enable_pan: false,
        }
    }
}

fn default_catalog() -> Vec<CatalogEntry> {
    (1..=6)
        .map(|i| CatalogEntry::new(format!("Object {i}"), ""))
        .collect()
}

impl SceneConfig {
    /// Parse from TOML and validate
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SceneConfig =
            toml::from_str(content).map_err(|e| SceneError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SceneError::Config(e.to_string()))
    }

    /// Save to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Reject values that would stall or break the scene
    pub fn validate(&self) -> Result<()> {
        fn check(ok: bool, message: impl FnOnce() -> String) -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(SceneError::Config(message()))
            }
        }

        let radius = self.ring.radius;
        check(radius.is_finite() && radius >= 0.0, || {
            format!("ring.radius must be non-negative, got {radius}")
        })?;
        let duration = self.intro.duration;
        check(duration.is_finite() && duration >= 0.0, || {
            format!("intro.duration must be non-negative, got {duration}")
        })?;
        let (arrive, ret) = (self.focus.arrive_epsilon, self.focus.return_epsilon);
        check(arrive > 0.0 && ret > 0.0, || {
            format!("focus epsilons must be positive, got arrive={arrive} return={ret}")
        })?;
        let orbit = &self.orbit;
        check(
            orbit.min_distance > 0.0 && orbit.min_distance <= orbit.max_distance,
            || {
                format!(
                    "orbit distance range is empty: {}..{}",
                    orbit.min_distance, orbit.max_distance
                )
            },
        )?;
        check((0.0..1.0).contains(&orbit.damping), || {
            format!("orbit.damping must be in [0, 1), got {}", orbit.damping)
        })?;

        // Orbit navigation takes over from the overview pose; it must be a
        // pose the orbit can express or the first drag jumps the camera
        let overview = &self.overview;
        check(overview.look_at == Ring::CENTER, || {
            format!(
                "overview.look_at must be the ring center {:?}, got {:?}",
                Ring::CENTER,
                overview.look_at
            )
        })?;
        let offset = overview.position - Ring::CENTER;
        let distance = offset.length();
        check(
            distance >= orbit.min_distance && distance <= orbit.max_distance,
            || {
                format!(
                    "overview.position is {distance} from the ring center, outside orbit range {}..{}",
                    orbit.min_distance, orbit.max_distance
                )
            },
        )?;
        let elevation = (offset.y / distance).clamp(-1.0, 1.0).asin();
        check(elevation.abs() <= MAX_ELEVATION, || {
            format!(
                "overview.position is {:.1} degrees above the ring plane, orbit allows {:.1}",
                elevation.to_degrees(),
                MAX_ELEVATION.to_degrees()
            )
        })?;
        self.smoothing.validate().map_err(SceneError::Config)?;
        Ok(())
    }
}
