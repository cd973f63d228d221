const INVALID_CHARS: [char; 10] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|', ' '];

/// Replaces characters that are invalid in file names (on Windows) and spaces with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    name.replace(&INVALID_CHARS[..], "_").trim().to_string()
}

/// `<sanitized camera>_merged_timelapse<ext>`
pub fn output_file_name(camera: &str, video_ext: &str) -> String {
    format!("{}_merged_timelapse{}", sanitize_file_name(camera), video_ext)
}
