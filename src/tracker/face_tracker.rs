//! Frame-to-frame face tracker with greedy association and dead-zone smoothing.

use log::{debug, trace};

use crate::tracker::face_box::FaceBox;
use crate::tracker::matching::{self, AssignmentResult};
use crate::tracker::smoothing::SmoothingParams;
use crate::{Error, Result};

/// Configuration for the FaceTracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Center-to-center distance, in pixels, below which a detection may
    /// claim a previous box.
    pub match_max_distance: f32,
    /// EMA and dead-zone applied to matched boxes.
    pub smoothing: SmoothingParams,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            match_max_distance: 150.0,
            smoothing: SmoothingParams::default(),
        }
    }
}

impl TrackerConfig {
    /// Check the match gate and the smoothing parameters.
    pub fn validate(&self) -> Result<()> {
        if self.match_max_distance.is_nan() || self.match_max_distance <= 0.0 {
            return Err(Error::Config(format!(
                "match_max_distance must be positive, got {}",
                self.match_max_distance
            )));
        }
        self.smoothing.validate()
    }
}

/// Keeps the previous frame's smoothed boxes and stabilizes new detections
/// against them.
///
/// Nothing survives a frame without detections, and no identity is stored:
/// a face that vanishes for one frame comes back as a fresh, unsmoothed box.
#[derive(Debug, Clone, Default)]
pub struct FaceTracker {
    previous: Vec<FaceBox>,
    config: TrackerConfig,
    frame_id: u64,
}

impl FaceTracker {
    /// Create an empty tracker with the given config.
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            previous: Vec::new(),
            config,
            frame_id: 0,
        }
    }

    /// Build a tracker after validating `config`.
    pub fn try_new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Associate `detections` with the previous frame's boxes and return
    /// one smoothed box per detection, in input order.
    ///
    /// An empty input drops every track.
    pub fn update(&mut self, detections: Vec<FaceBox>) -> Vec<FaceBox> {
        self.frame_id += 1;

        if detections.is_empty() {
            if !self.previous.is_empty() {
                debug!(
                    "frame {}: no detections, dropping {} tracks",
                    self.frame_id,
                    self.previous.len()
                );
            }
            self.previous.clear();
            return Vec::new();
        }

        let dists = matching::center_distance(&detections, &self.previous);
        let AssignmentResult {
            matches,
            unmatched_detections,
            unmatched_previous,
        } = matching::greedy_assignment(&dists, self.config.match_max_distance);

        trace!(
            "frame {}: {} matched, {} new, {} dropped",
            self.frame_id,
            matches.len(),
            unmatched_detections.len(),
            unmatched_previous.len()
        );

        // Unmatched detections pass through unchanged.
        let mut smoothed = detections.clone();
        for (idet, iprev) in matches {
            smoothed[idet] = self
                .config
                .smoothing
                .smooth_box(&self.previous[iprev], &detections[idet]);
        }

        self.previous = smoothed.clone();
        smoothed
    }

    /// Boxes emitted by the last `update`.
    pub fn previous(&self) -> &[FaceBox] {
        &self.previous
    }

    /// Forget all boxes.
    pub fn reset(&mut self) {
        self.previous.clear();
    }

    /// Get the tracker configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Number of `update` calls so far.
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_passthrough() {
        let mut tracker = FaceTracker::default();
        let dets = vec![FaceBox::new(10, 20, 50, 60), FaceBox::new(300, 40, 70, 70)];
        assert_eq!(tracker.update(dets.clone()), dets);
        assert_eq!(tracker.previous(), dets.as_slice());
    }

    #[test]
    fn test_matched_box_is_smoothed() {
        let mut tracker = FaceTracker::default();
        tracker.update(vec![FaceBox::new(100, 100, 80, 80)]);

        let out = tracker.update(vec![FaceBox::new(120, 100, 80, 90)]);
        // x: 100 + 0.2 * 20 = 104, y and w unchanged, h: 80 + 0.2 * 10 = 82
        assert_eq!(out, vec![FaceBox::new(104, 100, 80, 82)]);
        assert_eq!(tracker.previous(), out.as_slice());
    }

    #[test]
    fn test_smoothing_chains_from_smoothed_box() {
        let mut tracker = FaceTracker::default();
        tracker.update(vec![FaceBox::new(0, 0, 100, 100)]);
        tracker.update(vec![FaceBox::new(50, 0, 100, 100)]);
        // Previous x is now 10, not 50: 10 + 0.2 * 40 = 18
        let out = tracker.update(vec![FaceBox::new(50, 0, 100, 100)]);
        assert_eq!(out[0].x, 18);
    }

    #[test]
    fn test_empty_frame_clears_state() {
        let mut tracker = FaceTracker::default();
        tracker.update(vec![FaceBox::new(100, 100, 80, 80)]);
        assert!(tracker.update(vec![]).is_empty());
        assert!(tracker.previous().is_empty());

        // The face comes back unsmoothed
        let back = FaceBox::new(120, 100, 80, 80);
        assert_eq!(tracker.update(vec![back]), vec![back]);
    }

    #[test]
    fn test_unmatched_previous_boxes_are_dropped() {
        let mut tracker = FaceTracker::default();
        tracker.update(vec![FaceBox::new(0, 0, 10, 10), FaceBox::new(500, 500, 10, 10)]);
        let out = tracker.update(vec![FaceBox::new(5, 0, 10, 10)]);
        assert_eq!(out.len(), 1);
        assert_eq!(tracker.previous().len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut tracker = FaceTracker::default();
        tracker.update(vec![FaceBox::new(0, 0, 10, 10)]);
        tracker.reset();
        assert!(tracker.previous().is_empty());
        assert_eq!(tracker.frame_id(), 1);
    }

    #[test]
    fn test_config_validation() {
        assert!(FaceTracker::try_new(TrackerConfig::default()).is_ok());

        let bad = TrackerConfig {
            match_max_distance: 0.0,
            ..TrackerConfig::default()
        };
        assert!(FaceTracker::try_new(bad).is_err());

        let bad = TrackerConfig {
            smoothing: SmoothingParams::new(2.0, 2),
            ..TrackerConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
