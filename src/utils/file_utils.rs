use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov"];

/// Pick a default input video from `dir` when none was given on the
/// command line. Candidates are sorted so the choice is deterministic.
pub fn discover_default_video(dir: &Path) -> Result<PathBuf> {
    let mut videos: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_lowercase();
            path.is_file() && VIDEO_EXTENSIONS.contains(&ext.as_str())
        })
        .collect();

    videos.sort();

    videos
        .into_iter()
        .next()
        .with_context(|| format!("No video files found in {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_discover_picks_first_video_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        File::create(dir.path().join("clip_b.mp4")).expect("create");
        File::create(dir.path().join("clip_a.mov")).expect("create");
        File::create(dir.path().join("notes.txt")).expect("create");

        let found = discover_default_video(dir.path()).expect("discover");
        assert_eq!(found.file_name().unwrap(), "clip_a.mov");
    }

    #[test]
    fn test_discover_ignores_non_video_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        File::create(dir.path().join("readme.md")).expect("create");
        File::create(dir.path().join("frame.png")).expect("create");

        assert!(discover_default_video(dir.path()).is_err());
    }

    #[test]
    fn test_discover_empty_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(discover_default_video(dir.path()).is_err());
    }

    #[test]
    fn test_discover_is_case_insensitive_on_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        File::create(dir.path().join("HOLIDAY.MP4")).expect("create");

        let found = discover_default_video(dir.path()).expect("discover");
        assert_eq!(found.file_name().unwrap(), "HOLIDAY.MP4");
    }
}
