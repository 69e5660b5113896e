/// Integer pixel rectangle describing one face candidate.
///
/// Top-left origin, TLWH layout. A `FaceBox` carries no identity: two boxes
/// in consecutive frames are only related by the matching step of
/// [`FaceTracker::update`](crate::FaceTracker::update).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FaceBox {
    /// Top-left x coordinate
    pub x: i32,
    /// Top-left y coordinate
    pub y: i32,
    /// Width of the box
    pub w: i32,
    /// Height of the box
    pub h: i32,
}

impl FaceBox {
    /// Create a new FaceBox from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a FaceBox from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn from_tlbr(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x: x1,
            y: y1,
            w: x2 - x1,
            h: y2 - y1,
        }
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [i32; 4] {
        [self.x, self.y, self.x + self.w, self.y + self.h]
    }

    /// Convert to TLWH format: (x, y, w, h).
    #[inline]
    pub fn to_tlwh(&self) -> [i32; 4] {
        [self.x, self.y, self.w, self.h]
    }

    /// Position pair `(x, y)`.
    #[inline]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Size pair `(w, h)`.
    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.w, self.h)
    }

    /// Get the center point of the box.
    ///
    /// Computed in floating point so odd sizes keep their half pixel.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }

    /// Get the area of the box.
    #[inline]
    pub fn area(&self) -> i64 {
        i64::from(self.w) * i64::from(self.h)
    }

    /// Euclidean distance between the centers of two boxes.
    pub fn center_distance(&self, other: &FaceBox) -> f32 {
        let (ax, ay) = self.center();
        let (bx, by) = other.center();
        nalgebra::distance(&nalgebra::Point2::new(ax, ay), &nalgebra::Point2::new(bx, by))
    }
}

impl From<[i32; 4]> for FaceBox {
    /// Build from a TLWH array.
    fn from(tlwh: [i32; 4]) -> Self {
        Self::new(tlwh[0], tlwh[1], tlwh[2], tlwh[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_conversions() {
        let face = FaceBox::new(10, 20, 30, 40);

        assert_eq!(face.to_tlwh(), [10, 20, 30, 40]);
        assert_eq!(face.to_tlbr(), [10, 20, 40, 60]);
        assert_eq!(face.position(), (10, 20));
        assert_eq!(face.size(), (30, 40));
        assert_eq!(face.area(), 1200);
    }

    #[test]
    fn test_from_tlbr() {
        let face = FaceBox::from_tlbr(10, 20, 40, 60);
        assert_eq!(face, FaceBox::new(10, 20, 30, 40));
        assert_eq!(FaceBox::from([10, 20, 30, 40]), face);
    }

    #[test]
    fn test_center_keeps_half_pixels() {
        let face = FaceBox::new(0, 0, 11, 7);
        assert_eq!(face.center(), (5.5, 3.5));
    }

    #[test]
    fn test_center_distance() {
        let a = FaceBox::new(0, 0, 10, 10);
        let b = FaceBox::new(30, 40, 10, 10);

        // 3-4-5 triangle between (5, 5) and (35, 45)
        assert!((a.center_distance(&b) - 50.0).abs() < 1e-6);
        assert_eq!(a.center_distance(&a), 0.0);
    }

    #[test]
    fn test_center_distance_ignores_size_when_centers_coincide() {
        let small = FaceBox::new(45, 45, 10, 10);
        let large = FaceBox::new(0, 0, 100, 100);
        assert_eq!(small.center_distance(&large), 0.0);
    }
}
