use super::layout::Layout;
use anyhow::Result;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Recursively collects the absolute paths of videos whose file name starts with `camera`.
///
/// The extension match ignores case, the prefix match does not. Walk errors
/// (including a missing videos directory) are returned as-is; an empty result is not an error.
pub fn find_video_files(layout: &Layout, camera: &str) -> Result<Vec<PathBuf>> {
    let ext = layout.video_ext.to_lowercase();
    let mut files = vec![];
    for entry in WalkDir::new(layout.videos_path()).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        if !file_name.to_lowercase().ends_with(&ext) || !file_name.starts_with(camera) {
            continue;
        }
        let path = std::path::absolute(entry.path())?;
        log::debug!("matched {}", path.display());
        files.push(path);
    }
    Ok(files)
}
