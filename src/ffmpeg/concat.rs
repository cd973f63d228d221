use crate::timelapse::sequence::VideoFile;
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// One concat demuxer line: `file '<path>'` with forward slashes and `'` escaped as `'\''`.
pub fn manifest_line(path: &Path) -> String {
    let normalized = path.display().to_string().replace('\\', "/");
    format!("file '{}'", normalized.replace('\'', r"'\''"))
}

/// The concat list handed to ffmpeg. The file is removed when this value is dropped.
#[derive(Debug)]
pub struct ConcatManifest {
    path: PathBuf,
}

impl ConcatManifest {
    /// Writes `videos` in order to a freshly truncated file at `path`.
    /// On error the partially written file is removed.
    pub fn write(path: &Path, videos: &[VideoFile]) -> Result<Self> {
        let file = File::create(path)?;
        Self::write_to(path, BufWriter::new(file), videos)
    }

    /// Takes ownership of the already created file at `path` and writes the entries to `sink`.
    /// `sink` is flushed and closed before returning.
    pub fn write_to<W: Write>(path: &Path, mut sink: W, videos: &[VideoFile]) -> Result<Self> {
        let manifest = Self {
            path: path.to_path_buf(),
        };
        for video in videos.iter() {
            writeln!(sink, "{}", manifest_line(&video.path)).context("writing to inputs file")?;
        }
        sink.flush().context("closing inputs file")?;
        drop(sink);
        Ok(manifest)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ConcatManifest {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => log::debug!("removed {}", self.path.display()),
            Err(e) => log::warn!(
                "failed to remove temporary file {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}
