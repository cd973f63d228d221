use crate::{
    ffmpeg::{concat::ConcatManifest, TimelapseCommand},
    timelapse::{
        config::{ConfigError, RunConfig},
        discovery::find_video_files,
        layout::{Layout, VIDEOS_DIR},
        output::output_file_name,
        sequence::{sequence, VideoFile},
    },
};
use anyhow::{bail, Context, Result};
use comfy_table::Table;
use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(about = "Merge and speed up timelapse videos exported from a camera")]
pub struct MergeArgs {
    /// Camera name to match video files
    #[arg(long)]
    pub camera: String,
    /// Path to ffmpeg executable
    #[arg(long, default_value = "ffmpeg")]
    pub ffmpeg: PathBuf,
    /// Use NVIDIA GPU acceleration (h264_nvenc), libx264 otherwise
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = clap::ArgAction::Set
    )]
    pub gpu: bool,
    /// Speedup factor for the timelapse (10.0 = 10x speed)
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    pub speed: f64,
    /// Directory searched for video files
    #[arg(long, default_value = VIDEOS_DIR)]
    pub videos_dir: PathBuf,
    /// Only print the merge order
    #[arg(long)]
    pub dry_run: bool,
    /// Log ordering keys and the full ffmpeg command line
    #[arg(short, long)]
    pub verbose: bool,
}

impl MergeArgs {
    pub fn run_config(&self) -> Result<RunConfig, ConfigError> {
        RunConfig::new(&self.camera, self.ffmpeg.clone(), self.gpu, self.speed)
    }
}

fn print_plan(videos: &[VideoFile]) {
    let mut table = Table::new();
    table.set_header(vec!["#", "time", "from", "file"]);
    for (i, video) in videos.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            video.key.to_string(),
            video.key.source().to_string(),
            video.path.display().to_string(),
        ]);
    }
    println!("{}", table);
}

/// Discover, sequence, write the manifest, run ffmpeg. Returns the output path.
///
/// The manifest is removed on every path out of this function once it has been created.
pub fn merge(layout: &Layout, config: &RunConfig, dry_run: bool) -> Result<PathBuf> {
    let out = layout.output_path(&output_file_name(&config.camera, &layout.video_ext));

    let files = find_video_files(layout, &config.camera).context("finding video files")?;
    if files.is_empty() {
        bail!("no video files found for camera: {}", config.camera);
    }
    println!(
        "Found {} video file(s) for camera: {}",
        files.len(),
        config.camera
    );

    let videos = sequence(files);
    if dry_run {
        print_plan(&videos);
        return Ok(out);
    }

    let manifest = ConcatManifest::write(&layout.manifest_path(), &videos)
        .context("creating inputs file")?;
    println!(
        "Created {} with {} file(s)",
        layout.inputs_file,
        videos.len()
    );

    log::info!("speed {} -> {}", config.speed, out.display());
    TimelapseCommand::new(
        &config.ffmpeg,
        manifest.path(),
        &out,
        config.encoder,
        config.speed,
    )
    .execute()
    .context("running ffmpeg")?;

    println!("Successfully created: {}", out.display());
    Ok(out)
}
