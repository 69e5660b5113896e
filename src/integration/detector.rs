//! Trait for face detection backends.

use crate::integration::Frame;
use crate::tracker::FaceBox;

/// Trait for face detection backends.
///
/// Implement this trait to feed any detector into a [`FacePipeline`](super::FacePipeline).
///
/// # Example
///
/// ```
/// use facetrack_rs::{FaceBox, FaceDetector, Frame};
///
/// struct FixedDetector;
///
/// impl FaceDetector for FixedDetector {
///     type Error = std::convert::Infallible;
///
///     fn detect(&mut self, _frame: &Frame) -> Result<Vec<FaceBox>, Self::Error> {
///         Ok(vec![FaceBox::new(10, 10, 64, 64)])
///     }
/// }
/// ```
pub trait FaceDetector {
    /// Error type for detection failures.
    type Error;

    /// Run detection on one frame.
    ///
    /// An empty vector means no faces. Malformed input must be reported as
    /// an error rather than a partial result.
    fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceBox>, Self::Error>;
}

impl<D: FaceDetector + ?Sized> FaceDetector for Box<D> {
    type Error = D::Error;

    fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceBox>, Self::Error> {
        (**self).detect(frame)
    }
}

/// Helper trait for converting backend-specific outputs to `FaceBox`.
pub trait IntoFaceBoxes {
    /// Convert the output into a vector of face boxes.
    fn into_face_boxes(self) -> Vec<FaceBox>;
}

impl IntoFaceBoxes for Vec<FaceBox> {
    fn into_face_boxes(self) -> Vec<FaceBox> {
        self
    }
}

/// TLWH arrays, as produced by cascade classifiers.
impl IntoFaceBoxes for Vec<[i32; 4]> {
    fn into_face_boxes(self) -> Vec<FaceBox> {
        self.into_iter().map(FaceBox::from).collect()
    }
}
