use serde::{Deserialize, Serialize};

use crate::components::player::WidgetPosition;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

/// Error type for database operations on native platforms
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct DbError(String);

#[cfg(not(target_arch = "wasm32"))]
impl DbError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl std::error::Error for DbError {}

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "mezmurhub.app_settings";
#[cfg(target_arch = "wasm32")]
const PLAYER_POSITION_KEY: &str = "mezmurhub.player_position";

/// App settings persisted across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub volume: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { volume: 0.8 }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_settings(settings: AppSettings) -> Result<(), DbError> {
    let conn = get_db_connection()?;

    let settings_json =
        serde_json::to_string(&settings).map_err(|e| DbError::new(e.to_string()))?;

    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES ('app_settings', ?1)",
        [&settings_json],
    )
    .map_err(|e| DbError::new(e.to_string()))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn save_settings(settings: AppSettings) -> Result<(), StorageError> {
    LocalStorage::set(SETTINGS_KEY, settings)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_settings() -> Result<AppSettings, DbError> {
    let conn = get_db_connection()?;

    let result: Result<String, rusqlite::Error> = conn.query_row(
        "SELECT value FROM settings WHERE key = 'app_settings'",
        [],
        |row: &rusqlite::Row| row.get(0),
    );

    match result {
        Ok(json) => serde_json::from_str(&json).map_err(|e| DbError::new(e.to_string())),
        Err(_) => Ok(AppSettings::default()),
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn load_settings() -> Result<AppSettings, StorageError> {
    match LocalStorage::get(SETTINGS_KEY) {
        Ok(settings) => Ok(settings),
        Err(_) => Ok(AppSettings::default()),
    }
}

// Position reads/writes are synchronous: the widget persists on the tail of
// a drag gesture, outside any async context.
#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn save_player_position(position: WidgetPosition) -> Result<(), DbError> {
    let conn = get_db_connection()?;

    let position_json =
        serde_json::to_string(&position).map_err(|e| DbError::new(e.to_string()))?;

    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES ('player_position', ?1)",
        [&position_json],
    )
    .map_err(|e| DbError::new(e.to_string()))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn save_player_position(position: WidgetPosition) -> Result<(), StorageError> {
    LocalStorage::set(PLAYER_POSITION_KEY, position)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_player_position() -> Result<Option<WidgetPosition>, DbError> {
    let conn = get_db_connection()?;

    let result: Result<String, rusqlite::Error> = conn.query_row(
        "SELECT value FROM settings WHERE key = 'player_position'",
        [],
        |row: &rusqlite::Row| row.get(0),
    );

    match result {
        Ok(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| DbError::new(e.to_string())),
        Err(_) => Ok(None),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_player_position() -> Result<Option<WidgetPosition>, StorageError> {
    match LocalStorage::get(PLAYER_POSITION_KEY) {
        Ok(position) => Ok(Some(position)),
        Err(_) => Ok(None),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn initialize_database() -> Result<(), DbError> {
    let conn = get_db_connection()?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| DbError::new(e.to_string()))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn initialize_database() -> Result<(), StorageError> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_db_connection() -> Result<rusqlite::Connection, DbError> {
    use std::path::PathBuf;

    let data_dir = data_dir().unwrap_or_else(|| PathBuf::from("."));
    let db_path = data_dir.join("mezmurhub.db");

    rusqlite::Connection::open(&db_path)
        .map_err(|e| DbError::new(format!("Failed to open database: {}", e)))
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> Option<std::path::PathBuf> {
    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            let data_dir = std::path::PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("org.mezmurhub.app");
            std::fs::create_dir_all(&data_dir).ok()?;
            Some(data_dir)
        } else {
            None
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(app_data) = std::env::var("APPDATA") {
            let data_dir = std::path::PathBuf::from(app_data).join("MezmurHub");
            std::fs::create_dir_all(&data_dir).ok()?;
            Some(data_dir)
        } else {
            None
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(home) = std::env::var("HOME") {
            let data_dir = std::path::PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("mezmurhub");
            std::fs::create_dir_all(&data_dir).ok()?;
            Some(data_dir)
        } else {
            None
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        if let Ok(home) = std::env::var("HOME") {
            let data_dir = std::path::PathBuf::from(home).join(".mezmurhub");
            std::fs::create_dir_all(&data_dir).ok()?;
            Some(data_dir)
        } else {
            let data_dir = std::path::PathBuf::from(".mezmurhub");
            std::fs::create_dir_all(&data_dir).ok()?;
            Some(data_dir)
        }
    }
}
