use crate::timelapse::config::{Encoder, SpeedFactor};
use anyhow::{bail, Context, Result};
use std::{
    path::{Path, PathBuf},
    process::Command,
};

pub mod concat;

/// Concatenates the videos listed in a concat manifest and speeds them up.
#[derive(Debug)]
pub struct TimelapseCommand {
    ffmpeg: PathBuf,
    inputs: PathBuf,
    out: PathBuf,
    encoder: Encoder,
    speed: SpeedFactor,
}

impl TimelapseCommand {
    pub fn new(
        ffmpeg: &Path,
        inputs: &Path,
        out: &Path,
        encoder: Encoder,
        speed: SpeedFactor,
    ) -> Self {
        Self {
            ffmpeg: ffmpeg.to_path_buf(),
            inputs: inputs.to_path_buf(),
            out: out.to_path_buf(),
            encoder,
            speed,
        }
    }

    pub fn setpts_filter(&self) -> String {
        format!("[0:v]setpts={:.6}*PTS[v]", self.speed.pts_factor())
    }

    pub fn args(&self) -> Vec<String> {
        let (quality_flag, quality) = self.encoder.quality();
        vec![
            vec![
                "-f".to_string(),
                "concat".to_string(),
                "-safe".to_string(),
                "0".to_string(),
                "-i".to_string(),
                self.inputs.display().to_string(),
                "-filter_complex".to_string(),
                self.setpts_filter(),
                "-map".to_string(),
                "[v]".to_string(),
            ],
            vec![
                "-c:v".to_string(),
                self.encoder.as_ffmpeg_codec().to_string(),
                "-preset".to_string(),
                self.encoder.preset().to_string(),
                quality_flag.to_string(),
                quality.to_string(),
            ],
            vec![
                "-pix_fmt".to_string(),
                "yuv420p".to_string(),
                "-y".to_string(),
                self.out.display().to_string(),
            ],
        ]
        .concat()
    }

    /// Runs ffmpeg with inherited stdout/stderr and blocks until it exits.
    /// A partially written output file is left in place on failure.
    pub fn execute(&self) -> Result<()> {
        println!(
            "Running ffmpeg with {} from: {}",
            self.encoder.describe(),
            self.ffmpeg.display()
        );
        let args = self.args();
        log::debug!("{:#?}", args);
        let status = Command::new(&self.ffmpeg)
            .args(args)
            .status()
            .with_context(|| format!("launching {}", self.ffmpeg.display()))?;
        if !status.success() {
            bail!("{} exited with {}", self.ffmpeg.display(), status);
        }
        Ok(())
    }
}
