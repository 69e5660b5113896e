//! FacePipeline for combining detection with tracking.

use crate::fps::FpsMeter;
use crate::integration::Frame;
use crate::tracker::{FaceBox, FaceTracker, TrackerConfig};

use super::FaceDetector;

/// Output of one processed frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameResult {
    /// Smoothed boxes, one per raw detection, in detection order.
    pub faces: Vec<FaceBox>,
    /// Frames per second as of this frame.
    pub fps: u32,
}

/// Bundles a face detector with a [`FaceTracker`] and an [`FpsMeter`].
///
/// The pipeline owns the only tracking state, so it must be threaded
/// through the frame loop rather than rebuilt per frame.
pub struct FacePipeline<D: FaceDetector> {
    detector: D,
    tracker: FaceTracker,
    fps: FpsMeter,
}

impl<D: FaceDetector> FacePipeline<D> {
    /// Create a new pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> Self {
        Self {
            detector,
            tracker: FaceTracker::new(config),
            fps: FpsMeter::new(),
        }
    }

    /// Create a new pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self::new(detector, TrackerConfig::default())
    }

    /// Replace the FPS meter, e.g. to start its window at a known instant.
    pub fn with_fps_meter(mut self, fps: FpsMeter) -> Self {
        self.fps = fps;
        self
    }

    /// Detect, track and count one frame.
    ///
    /// A detector error leaves the tracker untouched.
    pub fn process_frame(&mut self, frame: &Frame) -> Result<FrameResult, D::Error> {
        let detections = self.detector.detect(frame)?;
        let faces = self.tracker.update(detections);
        let fps = self.fps.tick();
        Ok(FrameResult { faces, fps })
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &FaceTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut FaceTracker {
        &mut self.tracker
    }

    /// Get a reference to the FPS meter.
    pub fn fps_meter(&self) -> &FpsMeter {
        &self.fps
    }
}
