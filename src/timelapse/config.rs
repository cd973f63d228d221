use std::{fmt, path::PathBuf};
use thiserror::Error;

pub const MIN_SPEED_FACTOR: f64 = 0.1;
pub const MAX_SPEED_FACTOR: f64 = 1000.0;

/// Rejected user input. Raised before any filesystem or process activity.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("camera name must not be empty")]
    EmptyCamera,
    #[error(
        "speed factor must be between {min:.1} and {max:.1}, got {0}",
        min = MIN_SPEED_FACTOR,
        max = MAX_SPEED_FACTOR
    )]
    SpeedOutOfRange(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedFactor(f64);

impl SpeedFactor {
    pub fn new(speed: f64) -> Result<Self, ConfigError> {
        // NaN fails the range check too
        if (MIN_SPEED_FACTOR..=MAX_SPEED_FACTOR).contains(&speed) {
            Ok(Self(speed))
        } else {
            Err(ConfigError::SpeedOutOfRange(speed))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// multiplier applied to every presentation timestamp
    pub fn pts_factor(&self) -> f64 {
        1.0 / self.0
    }
}

impl fmt::Display for SpeedFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoder {
    Nvenc,
    X264,
}

impl Encoder {
    pub fn from_gpu_flag(gpu: bool) -> Self {
        if gpu {
            Encoder::Nvenc
        } else {
            Encoder::X264
        }
    }

    pub fn as_ffmpeg_codec(&self) -> &'static str {
        match self {
            Encoder::Nvenc => "h264_nvenc",
            Encoder::X264 => "libx264",
        }
    }

    pub fn preset(&self) -> &'static str {
        match self {
            Encoder::Nvenc => "p4",
            Encoder::X264 => "medium",
        }
    }

    /// (flag, value) of the constant quality setting
    pub fn quality(&self) -> (&'static str, &'static str) {
        match self {
            Encoder::Nvenc => ("-cq", "23"),
            Encoder::X264 => ("-crf", "23"),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Encoder::Nvenc => "GPU acceleration",
            Encoder::X264 => "software encoding",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub camera: String,
    pub ffmpeg: PathBuf,
    pub encoder: Encoder,
    pub speed: SpeedFactor,
}

impl RunConfig {
    pub fn new(camera: &str, ffmpeg: PathBuf, gpu: bool, speed: f64) -> Result<Self, ConfigError> {
        if camera.is_empty() {
            return Err(ConfigError::EmptyCamera);
        }
        Ok(Self {
            camera: camera.to_string(),
            ffmpeg,
            encoder: Encoder::from_gpu_flag(gpu),
            speed: SpeedFactor::new(speed)?,
        })
    }
}
