use std::path::{Path, PathBuf};

pub const VIDEOS_DIR: &str = "videos";
pub const VIDEO_EXT: &str = ".mp4";
pub const INPUTS_FILE: &str = "inputs.txt";

/// Where a run looks for its inputs and where it puts the manifest and the output.
#[derive(Debug, Clone)]
pub struct Layout {
    pub root: PathBuf,
    pub videos_dir: PathBuf,
    pub video_ext: String,
    pub inputs_file: String,
}

impl Layout {
    pub fn in_dir(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            videos_dir: PathBuf::from(VIDEOS_DIR),
            video_ext: VIDEO_EXT.to_string(),
            inputs_file: INPUTS_FILE.to_string(),
        }
    }

    pub fn with_videos_dir(mut self, videos_dir: PathBuf) -> Self {
        self.videos_dir = videos_dir;
        self
    }

    pub fn videos_path(&self) -> PathBuf {
        self.root.join(&self.videos_dir)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.inputs_file)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}
