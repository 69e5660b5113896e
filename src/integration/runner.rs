//! Single-threaded frame loop: acquire, process, annotate, present.

use log::{debug, info};

use crate::integration::{FaceDetector, FacePipeline, Frame, Overlay, annotate};
use crate::{Error, Result};

/// Produces frames on demand.
///
/// `Ok(None)` signals end-of-stream. An `Err` is terminal for the loop;
/// sources are expected to release their device in `Drop`.
pub trait FrameSource {
    fn read(&mut self) -> Result<Option<Frame>>;
}

/// What the display wants the loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayControl {
    Continue,
    Quit,
}

/// Presents annotated frames and relays the user's quit request.
pub trait DisplaySink {
    fn present(&mut self, frame: &Frame, overlays: &[Overlay]) -> Result<DisplayControl>;
}

/// Sink for runs without a window. Never asks to quit, so the loop only
/// ends at end-of-stream or on an error.
#[derive(Debug, Default)]
pub struct HeadlessSink {
    frames: u64,
}

impl DisplaySink for HeadlessSink {
    fn present(&mut self, _frame: &Frame, overlays: &[Overlay]) -> Result<DisplayControl> {
        self.frames += 1;
        let faces = overlays
            .iter()
            .filter(|o| matches!(o, Overlay::Rectangle { .. }))
            .count();
        debug!("frame {}: {} faces", self.frames, faces);
        Ok(DisplayControl::Continue)
    }
}

/// Why the loop stopped without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    EndOfStream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    /// Sum of tracked faces over all frames.
    pub faces: u64,
    pub stop: StopReason,
}

/// Drive `source` through `pipeline` into `sink` until quit, end-of-stream
/// or the first error.
///
/// Detector, read and display failures are not retried.
pub fn run<S, D, K>(
    source: &mut S,
    pipeline: &mut FacePipeline<D>,
    sink: &mut K,
    label: &str,
) -> Result<RunSummary>
where
    S: FrameSource + ?Sized,
    D: FaceDetector,
    D::Error: Into<Error>,
    K: DisplaySink + ?Sized,
{
    info!("Entering frame loop");
    let mut frames = 0u64;
    let mut faces = 0u64;

    let stop = loop {
        let Some(frame) = source.read()? else {
            info!("End of stream after {} frames", frames);
            break StopReason::EndOfStream;
        };

        let result = pipeline.process_frame(&frame).map_err(Into::<Error>::into)?;
        frames += 1;
        faces += result.faces.len() as u64;

        let overlays = annotate(&result.faces, label, result.fps);
        if sink.present(&frame, &overlays)? == DisplayControl::Quit {
            info!("Exit requested by user after {} frames", frames);
            break StopReason::Quit;
        }
    };

    Ok(RunSummary {
        frames,
        faces,
        stop,
    })
}
