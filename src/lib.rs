//! Real-time face tracking on top of an opaque per-frame face detector.
//!
//! Each frame, raw detections are associated with the previous frame's
//! boxes by greedy nearest-center matching and stabilized with an
//! exponential moving average that ignores sub-threshold jitter.
//!
//! ```
//! use facetrack_rs::{FaceBox, FaceTracker, TrackerConfig};
//!
//! let mut tracker = FaceTracker::new(TrackerConfig::default());
//! tracker.update(vec![FaceBox::new(100, 100, 80, 80)]);
//! let smoothed = tracker.update(vec![FaceBox::new(120, 100, 80, 80)]);
//! assert_eq!(smoothed, vec![FaceBox::new(104, 100, 80, 80)]);
//! ```

pub mod config;
pub mod error;
pub mod fps;
pub mod integration;
pub mod tracker;

pub use config::Config;
pub use error::{Error, Result};
pub use fps::FpsMeter;
pub use integration::{
    DisplayControl, DisplaySink, FaceDetector, FacePipeline, Frame, FrameResult, FrameSource,
    HeadlessSink, IntoFaceBoxes, Overlay, RunSummary, StopReason, annotate, run,
};
pub use tracker::{FaceBox, FaceTracker, SmoothingParams, TrackerConfig};
