//! Integration module for connecting detectors, frame sources and displays
//! with the face tracker.
//!
//! This module provides the traits at the boundary with external
//! collaborators and the frame loop that drives them.

mod annotate;
mod detector;
mod frame;
mod pipeline;
mod runner;

pub use annotate::{Overlay, TEXT_MARGIN, annotate};
pub use detector::{FaceDetector, IntoFaceBoxes};
pub use frame::Frame;
pub use pipeline::{FacePipeline, FrameResult};
pub use runner::{
    DisplayControl, DisplaySink, FrameSource, HeadlessSink, RunSummary, StopReason, run,
};

#[cfg(feature = "opencv-backend")]
mod opencv_backend;

#[cfg(feature = "opencv-backend")]
pub use opencv_backend::{CaptureSource, HaarCascadeDetector, HighGuiDisplay};
