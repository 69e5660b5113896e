//! Configuration management for the face tracking application

use crate::tracker::{SmoothingParams, TrackerConfig};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracking and smoothing parameters
    pub tracker: TrackerSection,

    /// Cascade detector parameters
    pub detector: DetectorSection,

    /// Display configuration
    pub display: DisplaySection,

    /// Capture device configuration
    pub camera: CameraSection,
}

/// Tracking and smoothing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerSection {
    /// Match gate in pixels between box centers
    pub match_max_distance: f32,

    /// EMA weight of the newest measurement
    pub alpha: f64,

    /// Dead-zone in pixels
    pub threshold: i32,
}

impl Default for TrackerSection {
    fn default() -> Self {
        let tracker = TrackerConfig::default();
        Self {
            match_max_distance: tracker.match_max_distance,
            alpha: tracker.smoothing.alpha,
            threshold: tracker.smoothing.threshold,
        }
    }
}

/// Cascade detector parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorSection {
    /// Path to the Haar cascade XML file
    pub cascade_path: PathBuf,

    /// Image pyramid scale step, must be greater than 1.0
    pub scale_factor: f64,

    /// Neighbouring hits required to keep a candidate
    pub min_neighbors: i32,

    /// Smallest face side in pixels (0 for no limit)
    pub min_size: i32,
}

impl Default for DetectorSection {
    fn default() -> Self {
        Self {
            cascade_path: PathBuf::from("haarcascade_frontalface_default.xml"),
            scale_factor: 1.2,
            min_neighbors: 7,
            min_size: 0,
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    pub window_name: String,

    /// Text drawn next to every face
    pub label: String,

    /// Run without a window
    pub headless: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            window_name: "frame".to_string(),
            label: "Face".to_string(),
            headless: false,
        }
    }
}

/// Capture device configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSection {
    /// Camera index
    pub index: i32,

    /// Video file to read instead of a camera
    pub video: Option<PathBuf>,
}

impl Config {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Tracker settings as used by [`FaceTracker`](crate::FaceTracker)
    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            match_max_distance: self.tracker.match_max_distance,
            smoothing: SmoothingParams::new(self.tracker.alpha, self.tracker.threshold),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.tracker_config().validate()?;

        if self.detector.scale_factor.is_nan() || self.detector.scale_factor <= 1.0 {
            return Err(Error::Config(format!(
                "Detector scale factor must be greater than 1.0, got {}",
                self.detector.scale_factor
            )));
        }
        if self.detector.min_neighbors < 0 {
            return Err(Error::Config(
                "Detector min_neighbors must be non-negative".to_string(),
            ));
        }
        if self.detector.min_size < 0 {
            return Err(Error::Config(
                "Detector min_size must be non-negative".to_string(),
            ));
        }
        if self.camera.index < 0 {
            return Err(Error::Config("Camera index must be non-negative".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Face tracking configuration

[tracker]
match_max_distance = 150.0
alpha = 0.2
threshold = 2

[detector]
cascade_path = "haarcascade_frontalface_default.xml"
scale_factor = 1.2
min_neighbors = 7
min_size = 0

[display]
window_name = "frame"
label = "Face"
headless = false

[camera]
index = 0
"#;
