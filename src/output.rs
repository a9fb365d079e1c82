use std::path::{Path, PathBuf};

use crate::metadata::LectureMetadata;

/// Owner of the on-disk layout:
/// `<root>/<course>/{json,videos}/NNN-<slug>.{json,mp4,vtt}`. Sequence
/// numbers are 1-based, zero-padded to three digits, and reflect download
/// order.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    course_dir: PathBuf,
}

impl OutputLayout {
    pub fn new(output_root: &Path, normalized_course: &str) -> Self {
        Self {
            course_dir: output_root.join(normalized_course),
        }
    }

    pub fn course_dir(&self) -> &Path {
        &self.course_dir
    }

    pub fn json_dir(&self) -> PathBuf {
        self.course_dir.join("json")
    }

    pub fn videos_dir(&self) -> PathBuf {
        self.course_dir.join("videos")
    }

    pub fn json_path(&self, seq: usize, record: &LectureMetadata) -> PathBuf {
        self.json_dir().join(format!("{}.json", stem(seq, record)))
    }

    pub fn video_path(&self, seq: usize, record: &LectureMetadata) -> PathBuf {
        self.videos_dir().join(format!("{}.mp4", stem(seq, record)))
    }

    pub fn subtitle_path(&self, seq: usize, record: &LectureMetadata) -> PathBuf {
        self.videos_dir().join(format!("{}.vtt", stem(seq, record)))
    }
}

fn stem(seq: usize, record: &LectureMetadata) -> String {
    format!("{:03}-{}", seq, record.file_stem())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record() -> LectureMetadata {
        LectureMetadata::from_value(json!({
            "date": "9/30/23",
            "title": "Heaps & Queues",
            "mediaPrefix": "//lcc.example.edu/media/",
            "sitekey": "site1",
            "recordingkey": "rk1",
            "info": { "products": [ { "movie_exported_name": "m1" } ] },
        }))
        .unwrap()
    }

    #[test]
    fn paths_follow_the_sequence_and_slug() {
        let layout = OutputLayout::new(Path::new("downloads"), "eecs281");
        let record = record();
        assert_eq!(
            layout.json_path(1, &record),
            PathBuf::from("downloads/eecs281/json/001-23_9_30_Heaps_Queues.json")
        );
        assert_eq!(
            layout.video_path(12, &record),
            PathBuf::from("downloads/eecs281/videos/012-23_9_30_Heaps_Queues.mp4")
        );
        assert_eq!(
            layout.subtitle_path(103, &record),
            PathBuf::from("downloads/eecs281/videos/103-23_9_30_Heaps_Queues.vtt")
        );
    }
}
