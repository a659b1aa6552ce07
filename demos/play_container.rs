//! Decode a point-cloud container and play it on a console surface
//!
//! The console surface stands in for a real window: it prints per-frame
//! stats instead of drawing, and cancels itself after a frame cap so the
//! demo terminates without user input.

use anyhow::{bail, Context, Result};
use clap::Parser;
use cloudreel_core::{ColorSample, Point3f};
use cloudreel_playback::{PlaybackScheduler, RenderSurface};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(about = "Play a framed point-cloud container in the terminal")]
struct Args {
    /// Path to the container file
    container: PathBuf,

    /// Inter-frame delay in milliseconds
    #[arg(long, default_value_t = 250)]
    interval_ms: u64,

    /// Stop after this many frames have been shown
    #[arg(long, default_value_t = 20)]
    max_frames: usize,
}

/// Text stand-in for a windowed rendering surface.
struct ConsoleSurface {
    points: Vec<Point3f>,
    colors: Vec<ColorSample>,
    frames_shown: usize,
    max_frames: usize,
}

impl ConsoleSurface {
    fn new(max_frames: usize) -> Self {
        Self {
            points: Vec::new(),
            colors: Vec::new(),
            frames_shown: 0,
            max_frames,
        }
    }
}

impl RenderSurface for ConsoleSurface {
    fn clear(&mut self) {
        self.points.clear();
        self.colors.clear();
    }

    fn set_points(&mut self, points: &[Point3f]) {
        self.points.extend_from_slice(points);
    }

    fn set_colors(&mut self, colors: &[ColorSample]) {
        self.colors.extend_from_slice(colors);
    }

    fn reset_viewpoint(&mut self) {
        println!("-- viewpoint reset --");
    }

    fn poll_events(&mut self) -> bool {
        self.frames_shown < self.max_frames
    }

    fn render(&mut self) {
        self.frames_shown += 1;
        let reddest = self
            .colors
            .iter()
            .map(|c| c.r)
            .fold(0.0f32, f32::max);
        println!(
            "frame {:>3}: {:>6} points, max red {:.2}",
            self.frames_shown,
            self.points.len(),
            reddest
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let video = cloudreel_io::read_video(&args.container)
        .with_context(|| format!("reading {}", args.container.display()))?;

    if video.is_empty() {
        bail!("{} holds no frames", args.container.display());
    }
    println!(
        "decoded {} frames, {} points total",
        video.len(),
        video.point_count()
    );

    let mut surface = ConsoleSurface::new(args.max_frames);
    PlaybackScheduler::with_interval(Duration::from_millis(args.interval_ms))
        .run(&video, &mut surface);

    println!("done after {} frames", surface.frames_shown);
    Ok(())
}
