//! Locating, reading and writing configuration files.
//!
//! Files are read as JSON5, which also accepts plain JSON, and written back
//! as pretty-printed JSON. Lookup order:
//!
//! 1. Local: `./kanban.json5` or `./kanban.json`
//! 2. User: `<config_dir>/kanban/config.json5` or `<config_dir>/kanban/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Names looked up in the working directory.
const LOCAL_FILE_NAMES: &[&str] = &["kanban.json5", "kanban.json"];

/// Directory under the platform config dir.
const USER_CONFIG_DIR: &str = "kanban";

/// Names looked up in the user config directory.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file to load, if there is one.
///
/// # Examples
///
/// ```no_run
/// use kanban_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir().map(|d| d.join(USER_CONFIG_DIR));
    search_config_file(Path::new("."), user_dir.as_deref())
}

/// Searches `local_dir` and then `user_dir` for a configuration file.
///
/// Local files take precedence over user files, and `.json5` over `.json`
/// within each directory.
#[must_use]
pub fn search_config_file(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.is_file())
}

/// Reads and parses the file at `path`.
///
/// # Errors
///
/// [`ConfigError::ReadFile`] when the file cannot be read and
/// [`ConfigError::ParseJson5`] when its content does not parse.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes `value` to `path` as pretty JSON, creating parent directories.
///
/// # Errors
///
/// [`ConfigError::WriteFile`] when a directory or the file cannot be
/// written and [`ConfigError::SerializeJson`] when serialization fails.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, LogLevel};
    use tempfile::TempDir;

    #[test]
    fn reads_json5_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kanban.json5");
        std::fs::write(
            &path,
            r#"
            {
                // quieter than the default
                logging: { level: "warn" },
                input: { double_click_ms: 300, },
            }
            "#,
        )
        .unwrap();

        let config: Config = read_config_file(&path).unwrap();
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.input.double_click_ms, 300);
        assert!(config.input.mouse);
    }

    #[test]
    fn read_errors_are_classified() {
        let missing: Result<Config> = read_config_file("/nonexistent/kanban.json");
        assert!(matches!(missing, Err(ConfigError::ReadFile { .. })));

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kanban.json");
        std::fs::write(&path, "not valid json").unwrap();
        let invalid: Result<Config> = read_config_file(&path);
        assert!(matches!(invalid, Err(ConfigError::ParseJson5(_))));
    }

    #[test]
    fn written_file_is_plain_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dirs").join("config.json");

        write_config_file(&path, &Config::default()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["input"]["double_click_ms"], 400);
        assert_eq!(value["logging"]["level"], "info");
    }

    #[test]
    fn search_prefers_local_json5() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::write(local.path().join("kanban.json"), "{}").unwrap();
        std::fs::write(local.path().join("kanban.json5"), "{}").unwrap();
        std::fs::write(user.path().join("config.json5"), "{}").unwrap();

        let found = search_config_file(local.path(), Some(user.path())).unwrap();
        assert_eq!(found, local.path().join("kanban.json5"));
    }

    #[test]
    fn search_falls_back_to_user_dir() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::write(user.path().join("config.json"), "{}").unwrap();

        let found = search_config_file(local.path(), Some(user.path())).unwrap();
        assert_eq!(found, user.path().join("config.json"));
    }

    #[test]
    fn search_ignores_directories_and_finds_nothing() {
        let local = TempDir::new().unwrap();
        std::fs::create_dir(local.path().join("kanban.json5")).unwrap();
        assert!(search_config_file(local.path(), None).is_none());
    }
}
