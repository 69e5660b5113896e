//! OpenCV backend: camera or file capture, Haar cascade face detection and
//! a HighGUI window.
//!
//! Each wrapper releases its OpenCV resource in `Drop`, so the device and
//! windows are freed on every exit path of the frame loop.
//!
//! # Example
//!
//! ```ignore
//! use facetrack_rs::integration::{CaptureSource, HaarCascadeDetector, HighGuiDisplay};
//! use facetrack_rs::{Config, FacePipeline, run};
//!
//! let config = Config::default();
//! let detector = HaarCascadeDetector::new(&config.detector)?;
//! let mut source = CaptureSource::camera(0)?;
//! let mut display = HighGuiDisplay::new("frame")?;
//! let mut pipeline = FacePipeline::new(detector, config.tracker_config());
//! run(&mut source, &mut pipeline, &mut display, "Face")?;
//! ```

use log::{info, warn};
use opencv::{
    core::{AlgorithmHint, Mat, Point, Rect, Scalar, Size, Vector},
    highgui, imgproc,
    objdetect::CascadeClassifier,
    prelude::*,
    videoio::{self, VideoCapture},
};

use super::{DisplayControl, DisplaySink, FaceDetector, Frame, FrameSource, IntoFaceBoxes, Overlay};
use crate::config::DetectorSection;
use crate::tracker::FaceBox;
use crate::{Error, Result};

/// Box and label color (BGR blue).
const FACE_COLOR: (f64, f64, f64) = (255.0, 0.0, 0.0);

const KEY_ESC: i32 = 27;
const KEY_Q: i32 = b'q' as i32;

fn color() -> Scalar {
    Scalar::new(FACE_COLOR.0, FACE_COLOR.1, FACE_COLOR.2, 0.0)
}

/// Copy a [`Frame`] into a new `Mat` with the same layout.
fn frame_to_mat(frame: &Frame) -> Result<Mat> {
    let flat = Mat::from_slice(frame.data())?;
    let shaped = flat.reshape(i32::from(frame.channels()), frame.height() as i32)?;
    Ok(shaped.try_clone()?)
}

/// Gray-scale `Mat` of `frame`; single-channel frames are only copied.
fn gray_mat(frame: &Frame) -> Result<Mat> {
    let image = frame_to_mat(frame)?;
    let code = match frame.channels() {
        1 => return Ok(image),
        3 => imgproc::COLOR_BGR2GRAY,
        4 => imgproc::COLOR_BGRA2GRAY,
        n => return Err(Error::InvalidFrame(format!("unsupported channel count {n}"))),
    };
    let mut gray = Mat::default();
    imgproc::cvt_color(&image, &mut gray, code, 0, AlgorithmHint::ALGO_HINT_DEFAULT)?;
    Ok(gray)
}

/// Copy an 8-bit `Mat` into a [`Frame`].
fn mat_to_frame(mat: &Mat) -> Result<Frame> {
    if mat.depth() != opencv::core::CV_8U {
        return Err(Error::InvalidFrame(format!(
            "expected 8-bit pixels, got depth {}",
            mat.depth()
        )));
    }
    let owned;
    let mat = if mat.is_continuous() {
        mat
    } else {
        owned = mat.try_clone()?;
        &owned
    };
    let channels = u8::try_from(mat.channels())
        .map_err(|_| Error::InvalidFrame(format!("{} channels", mat.channels())))?;
    Frame::new(
        mat.cols() as u32,
        mat.rows() as u32,
        channels,
        mat.data_bytes()?.to_vec(),
    )
}

/// Frame source backed by `VideoCapture`.
pub struct CaptureSource {
    capture: VideoCapture,
    is_file: bool,
}

impl CaptureSource {
    /// Open camera `index`.
    pub fn camera(index: i32) -> Result<Self> {
        info!("Opening camera {}", index);
        let capture = VideoCapture::new(index, videoio::CAP_ANY)?;
        Self::opened(capture, false, format!("camera {index}"))
    }

    /// Open a video file.
    pub fn file(path: &str) -> Result<Self> {
        info!("Opening video file: {}", path);
        let capture = VideoCapture::from_file(path, videoio::CAP_ANY)?;
        Self::opened(capture, true, path.to_string())
    }

    fn opened(capture: VideoCapture, is_file: bool, what: String) -> Result<Self> {
        if !capture.is_opened()? {
            return Err(Error::SourceUnavailable(format!("cannot open {what}")));
        }
        Ok(Self { capture, is_file })
    }
}

impl FrameSource for CaptureSource {
    fn read(&mut self) -> Result<Option<Frame>> {
        let mut mat = Mat::default();
        if !self.capture.read(&mut mat)? || mat.empty() {
            if self.is_file {
                return Ok(None);
            }
            return Err(Error::ReadFailed("cannot read frame".to_string()));
        }
        mat_to_frame(&mat).map(Some)
    }
}

impl Drop for CaptureSource {
    fn drop(&mut self) {
        if let Err(e) = self.capture.release() {
            warn!("Failed to release capture: {}", e);
        }
    }
}

/// Face detector running an OpenCV Haar cascade on the gray-scale frame.
pub struct HaarCascadeDetector {
    classifier: CascadeClassifier,
    scale_factor: f64,
    min_neighbors: i32,
    min_size: i32,
}

impl HaarCascadeDetector {
    /// Load the cascade named in `config`.
    pub fn new(config: &DetectorSection) -> Result<Self> {
        let path = config.cascade_path.to_str().ok_or_else(|| {
            Error::Config(format!(
                "cascade path is not valid UTF-8: {}",
                config.cascade_path.display()
            ))
        })?;
        info!("Loading cascade from {}", path);
        let classifier = CascadeClassifier::new(path)?;
        if classifier.empty()? {
            return Err(Error::Detector(format!("cascade {path} is empty or missing")));
        }
        Ok(Self {
            classifier,
            scale_factor: config.scale_factor,
            min_neighbors: config.min_neighbors,
            min_size: config.min_size,
        })
    }
}

impl FaceDetector for HaarCascadeDetector {
    type Error = Error;

    fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceBox>> {
        let gray = gray_mat(frame)?;

        let mut faces = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            &gray,
            &mut faces,
            self.scale_factor,
            self.min_neighbors,
            0,
            Size::new(self.min_size, self.min_size),
            Size::default(),
        )?;

        Ok(faces
            .iter()
            .map(|r| [r.x, r.y, r.width, r.height])
            .collect::<Vec<_>>()
            .into_face_boxes())
    }
}

/// HighGUI window; `q` or `Esc` requests quit.
pub struct HighGuiDisplay {
    window_name: String,
}

impl HighGuiDisplay {
    pub fn new(window_name: &str) -> Result<Self> {
        highgui::named_window(window_name, highgui::WINDOW_AUTOSIZE)?;
        Ok(Self {
            window_name: window_name.to_string(),
        })
    }

    fn draw(mat: &mut Mat, overlay: &Overlay) -> Result<()> {
        match overlay {
            Overlay::Rectangle { rect, thickness } => {
                imgproc::rectangle(
                    mat,
                    Rect::new(rect.x, rect.y, rect.w, rect.h),
                    color(),
                    *thickness,
                    imgproc::LINE_8,
                    0,
                )?;
            }
            Overlay::Text {
                text,
                origin,
                scale,
            } => {
                imgproc::put_text(
                    mat,
                    text,
                    Point::new(origin.0, origin.1),
                    imgproc::FONT_HERSHEY_DUPLEX,
                    *scale,
                    color(),
                    1,
                    imgproc::LINE_8,
                    false,
                )?;
            }
        }
        Ok(())
    }
}

impl DisplaySink for HighGuiDisplay {
    fn present(&mut self, frame: &Frame, overlays: &[Overlay]) -> Result<DisplayControl> {
        let mut mat = frame_to_mat(frame)?;
        for overlay in overlays {
            Self::draw(&mut mat, overlay)?;
        }
        highgui::imshow(&self.window_name, &mat)?;

        let key = highgui::wait_key(1)?;
        if key == KEY_ESC || key & 0xFF == KEY_Q {
            return Ok(DisplayControl::Quit);
        }
        Ok(DisplayControl::Continue)
    }
}

impl Drop for HighGuiDisplay {
    fn drop(&mut self) {
        if let Err(e) = highgui::destroy_all_windows() {
            warn!("Failed to close windows: {}", e);
        }
    }
}
