//! Real-time face detection and tracking from a camera or video file.

use anyhow::{Context, Result};
use clap::Parser;
use facetrack_rs::integration::{CaptureSource, HaarCascadeDetector, HeadlessSink, HighGuiDisplay};
use facetrack_rs::{Config, DisplaySink, FacePipeline, FrameSource, run};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long)]
    camera: Option<i32>,

    /// Video file to process instead of a camera
    #[arg(short, long)]
    video: Option<PathBuf>,

    /// Haar cascade XML file
    #[arg(long)]
    cascade: Option<PathBuf>,

    /// Text drawn next to each face
    #[arg(short, long)]
    label: Option<String>,

    /// Run without a window. Only a video file ends on its own; Ctrl-C
    /// kills the process without releasing the camera
    #[arg(long)]
    headless: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Path to configuration file (TOML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,
}

impl Args {
    /// Apply command line overrides on top of `config`.
    fn apply(self, mut config: Config) -> Config {
        if let Some(index) = self.camera {
            config.camera.index = index;
        }
        if self.video.is_some() {
            config.camera.video = self.video;
        }
        if let Some(cascade) = self.cascade {
            config.detector.cascade_path = cascade;
        }
        if let Some(label) = self.label {
            config.display.label = label;
        }
        config.display.headless |= self.headless;
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Face tracker starting");

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Config::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => Config::default(),
    };
    let config = args.apply(config);
    config.validate().context("invalid configuration")?;

    let detector = HaarCascadeDetector::new(&config.detector)?;
    let mut pipeline = FacePipeline::new(detector, config.tracker_config());

    // Source and window are released when these boxes drop, on every path
    // that returns from main.
    let mut source: Box<dyn FrameSource> = match &config.camera.video {
        Some(path) => {
            let path = path.to_str().context("video path is not valid UTF-8")?;
            Box::new(CaptureSource::file(path)?)
        }
        None => Box::new(CaptureSource::camera(config.camera.index)?),
    };
    let mut sink: Box<dyn DisplaySink> = if config.display.headless {
        if config.camera.video.is_none() {
            warn!("Headless camera run has no quit key; Ctrl-C skips device release");
        }
        Box::new(HeadlessSink::default())
    } else {
        Box::new(HighGuiDisplay::new(&config.display.window_name)?)
    };

    let summary = run(
        source.as_mut(),
        &mut pipeline,
        sink.as_mut(),
        &config.display.label,
    )?;

    info!(
        "Stopped ({:?}) after {} frames, {} face observations",
        summary.stop, summary.frames, summary.faces
    );
    Ok(())
}
