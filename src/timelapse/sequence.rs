use super::timestamp::{self, OrderingKey};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct VideoFile {
    pub path: PathBuf,
    pub key: OrderingKey,
}

impl VideoFile {
    pub fn new(path: PathBuf) -> Self {
        let key = timestamp::extract(&path);
        Self { path, key }
    }
}

/// Orders files chronologically. The sort is stable, so files sharing a key keep discovery order.
pub fn sequence(files: Vec<PathBuf>) -> Vec<VideoFile> {
    let mut videos = files.into_iter().map(VideoFile::new).collect::<Vec<_>>();
    videos.sort_by(|a, b| a.key.cmp(&b.key));
    for video in videos.iter() {
        log::debug!(
            "{} ({}) {}",
            video.key,
            video.key.source(),
            video.path.display()
        );
    }
    videos
}
