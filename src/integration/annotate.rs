//! Overlay description for displaying tracked faces.
//!
//! Drawing itself is left to a [`DisplaySink`](super::DisplaySink); this
//! module only decides what goes where.

use crate::tracker::FaceBox;

/// Gap between a face box and its label, in pixels.
pub const TEXT_MARGIN: i32 = 5;

/// Stroke width of face rectangles.
pub const BOX_THICKNESS: i32 = 2;

/// Face height at which the label is drawn at scale 1.0.
pub const LABEL_SCALE_HEIGHT: f64 = 200.0;

/// Where the FPS counter is drawn.
pub const FPS_ORIGIN: (i32, i32) = (10, 30);

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Rectangle { rect: FaceBox, thickness: i32 },
    Text {
        text: String,
        /// Bottom-left corner of the text.
        origin: (i32, i32),
        scale: f64,
    },
}

/// Overlays for one frame: a rectangle and a label per face, then the FPS counter.
///
/// The label sits to the right of the box, just above its top edge, and
/// grows with the face height. Label coordinates saturate at the `i32` range.
pub fn annotate(faces: &[FaceBox], label: &str, fps: u32) -> Vec<Overlay> {
    let mut overlays = Vec::with_capacity(faces.len() * 2 + 1);
    for face in faces {
        overlays.push(Overlay::Rectangle {
            rect: *face,
            thickness: BOX_THICKNESS,
        });
        overlays.push(Overlay::Text {
            text: label.to_string(),
            origin: (
                face.x.saturating_add(face.w).saturating_add(TEXT_MARGIN),
                face.y.saturating_sub(TEXT_MARGIN),
            ),
            scale: f64::from(face.h) / LABEL_SCALE_HEIGHT,
        });
    }
    overlays.push(Overlay::Text {
        text: format!("FPS: {fps}"),
        origin: FPS_ORIGIN,
        scale: 1.0,
    });
    overlays
}
