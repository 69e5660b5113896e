//! Exponential moving average with a jitter dead-zone for integer box coordinates.

use crate::tracker::face_box::FaceBox;
use crate::{Error, Result};

/// Parameters of the dead-zone EMA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingParams {
    /// Weight of the new measurement, in (0, 1].
    pub alpha: f64,
    /// Per-coordinate movements strictly below this are treated as noise.
    pub threshold: i32,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            alpha: 0.2,
            threshold: 2,
        }
    }
}

impl SmoothingParams {
    /// Create parameters with EMA weight `alpha` and dead-zone `threshold`.
    pub fn new(alpha: f64, threshold: i32) -> Self {
        Self { alpha, threshold }
    }

    /// Reject `alpha` outside (0, 1] and negative thresholds.
    pub fn validate(&self) -> Result<()> {
        if self.alpha.is_nan() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(Error::Config(format!(
                "smoothing alpha must be in (0, 1], got {}",
                self.alpha
            )));
        }
        if self.threshold < 0 {
            return Err(Error::Config(format!(
                "smoothing threshold must be non-negative, got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Smooth one coordinate pair against its previous value.
    ///
    /// Each axis whose movement is below `threshold` is pinned to `last`
    /// before the EMA is applied. The EMA result is truncated toward zero.
    pub fn smooth_pair(&self, last: (i32, i32), current: (i32, i32)) -> (i32, i32) {
        (
            self.smooth_axis(last.0, current.0),
            self.smooth_axis(last.1, current.1),
        )
    }

    /// Smooth position and size of `current` against `last`, independently.
    pub fn smooth_box(&self, last: &FaceBox, current: &FaceBox) -> FaceBox {
        let (x, y) = self.smooth_pair(last.position(), current.position());
        let (w, h) = self.smooth_pair(last.size(), current.size());
        FaceBox::new(x, y, w, h)
    }

    fn smooth_axis(&self, last: i32, current: i32) -> i32 {
        let delta = i64::from(current) - i64::from(last);
        if delta.abs() < i64::from(self.threshold) {
            return last;
        }
        let ema = self.alpha * f64::from(current) + (1.0 - self.alpha) * f64::from(last);
        ema as i32
    }
}

/// Smooth `current` against `last` with the default parameters.
pub fn smooth(last: &FaceBox, current: &FaceBox) -> FaceBox {
    SmoothingParams::default().smooth_box(last, current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_input_is_fixed_point() {
        let params = SmoothingParams::default();
        for v in [-1000, -7, -1, 0, 1, 3, 7, 99, 1921, 100_000] {
            assert_eq!(params.smooth_pair((v, v), (v, v)), (v, v));
        }
    }

    #[test]
    fn test_dead_zone_pins_axis() {
        let params = SmoothingParams::default();
        // |dx| = 1 < 2 is ignored, dy = 10 follows the EMA
        assert_eq!(params.smooth_pair((50, 50), (51, 60)), (50, 52));
        assert_eq!(params.smooth_pair((50, 50), (49, 49)), (50, 50));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let params = SmoothingParams::default();
        // |dx| = 2 is not below the threshold: 50 + 0.2 * 2 = 50.4
        assert_eq!(params.smooth_pair((50, 0), (52, 0)), (50, 0));
        // 50 + 0.2 * 5 = 51
        assert_eq!(params.smooth_pair((50, 0), (55, 0)), (51, 0));
    }

    #[test]
    fn test_ema_truncates_instead_of_rounding() {
        let params = SmoothingParams::default();
        // 0.2 * 104 + 0.8 * 100 = 100.8 truncates to 100, not 101
        assert_eq!(params.smooth_pair((100, 100), (104, 104)), (100, 100));
        // Negative coordinates truncate toward zero: -100 + 0.2 * -4 = -100.8
        assert_eq!(params.smooth_pair((-100, 0), (-104, 0)), (-100, 0));
    }

    #[test]
    fn test_ema_crossing_zero_truncates_weighted_sum() {
        let params = SmoothingParams::default();
        // 0.2 * 164 + 0.8 * -91 = -39.999.., truncated toward zero
        assert_eq!(params.smooth_pair((-91, 0), (164, 0)), (-39, 0));
        assert_eq!(params.smooth_pair((0, -91), (0, 164)), (0, -39));
    }

    #[test]
    fn test_smooth_box_treats_size_separately() {
        let last = FaceBox::new(100, 100, 80, 80);
        let current = FaceBox::new(110, 101, 90, 120);
        // x: 100 + 2 = 102, y: pinned, w: 80 + 2 = 82, h: 80 + 8 = 88
        assert_eq!(smooth(&last, &current), FaceBox::new(102, 100, 82, 88));
    }

    #[test]
    fn test_alpha_one_follows_measurement() {
        let params = SmoothingParams::new(1.0, 0);
        assert_eq!(params.smooth_pair((0, 0), (13, -9)), (13, -9));
    }

    #[test]
    fn test_validate() {
        assert!(SmoothingParams::default().validate().is_ok());
        assert!(SmoothingParams::new(0.0, 2).validate().is_err());
        assert!(SmoothingParams::new(1.5, 2).validate().is_err());
        assert!(SmoothingParams::new(f64::NAN, 2).validate().is_err());
        assert!(SmoothingParams::new(0.5, -1).validate().is_err());
    }
}
