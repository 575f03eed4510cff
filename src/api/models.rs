use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A devotional audio track as stored in the backend's `mezmurs` table.
///
/// Everything except `id` and `title` is defaulted so that rows written by
/// older admin tooling (missing lyrics, no category) still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mezmur {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, alias = "audioUrl")]
    pub audio_url: String,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default, alias = "isDownloadable")]
    pub is_downloadable: bool,
    #[serde(default, alias = "categoryId")]
    pub category_id: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A browse category for the mezmur library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Format seconds as `m:ss` for transport time labels.
pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_renders_minutes_and_padded_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(61), "1:01");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn mezmur_deserializes_with_missing_optional_columns() {
        let row = r#"{
            "id": "m1",
            "title": "Tinsae",
            "artist": "Zemari Dawit",
            "audio_url": "https://cdn.example.org/mezmurs/tinsae.mp3"
        }"#;
        let mezmur: Mezmur = serde_json::from_str(row).expect("row should deserialize");
        assert_eq!(mezmur.id, "m1");
        assert_eq!(mezmur.lyrics, None);
        assert!(!mezmur.is_downloadable);
        assert_eq!(mezmur.category_id, None);
        assert_eq!(mezmur.created_at, None);
    }

    #[test]
    fn mezmur_accepts_camel_case_aliases() {
        let row = r#"{
            "id": "m2",
            "title": "Selam",
            "audioUrl": "https://cdn.example.org/mezmurs/selam.mp3",
            "isDownloadable": true,
            "categoryId": "c9"
        }"#;
        let mezmur: Mezmur = serde_json::from_str(row).expect("row should deserialize");
        assert_eq!(mezmur.audio_url, "https://cdn.example.org/mezmurs/selam.mp3");
        assert!(mezmur.is_downloadable);
        assert_eq!(mezmur.category_id.as_deref(), Some("c9"));
    }
}
