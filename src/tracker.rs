mod face_box;
mod face_tracker;
pub mod matching;
mod smoothing;

pub use face_box::FaceBox;
pub use face_tracker::{FaceTracker, TrackerConfig};
pub use matching::AssignmentResult;
pub use smoothing::{SmoothingParams, smooth};
