use crate::models::settings::AppConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "attendance.db";

/// Resolves configuration and data locations for the application.
pub struct SettingsService {
    dirs: Option<ProjectDirs>,
}

impl SettingsService {
    pub fn new() -> Self {
        Self {
            dirs: ProjectDirs::from("com", "AttendEase", "AttendanceCalendar"),
        }
    }

    /// Default location of `config.toml`, if a home directory is known
    pub fn default_config_path(&self) -> Option<PathBuf> {
        self.dirs
            .as_ref()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// The explicit path when given, otherwise the default location.
    pub fn resolve_config_path(&self, path: Option<&Path>) -> Option<PathBuf> {
        path.map(Path::to_path_buf)
            .or_else(|| self.default_config_path())
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file yields defaults; a file that exists but does not parse
    /// is an error.
    pub fn load(&self, path: Option<&Path>) -> Result<AppConfig> {
        let path = match self.resolve_config_path(path) {
            Some(path) if path.exists() => path,
            _ => return Ok(AppConfig::default()),
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        AppConfig::from_toml(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Database location: the configured path, else the platform data dir,
    /// else the working directory. Parent directories are created.
    pub fn database_path(&self, config: &AppConfig) -> Result<PathBuf> {
        let path = match (&config.database_path, &self.dirs) {
            (Some(path), _) => path.clone(),
            (None, Some(dirs)) => dirs.data_dir().join(DATABASE_FILE),
            (None, None) => PathBuf::from(DATABASE_FILE),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory {}", parent.display())
            })?;
        }

        Ok(path)
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = SettingsService::new();

        let config = service.load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let config = SettingsService::new().load(Some(&path)).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let explicit = PathBuf::from("custom.toml");
        let service = SettingsService::new();

        assert_eq!(
            service.resolve_config_path(Some(&explicit)),
            Some(explicit.clone())
        );
        assert_eq!(
            service.resolve_config_path(None),
            service.default_config_path()
        );
        assert_eq!(SettingsService { dirs: None }.resolve_config_path(None), None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "log_level = [").unwrap();

        assert!(SettingsService::new().load(Some(&path)).is_err());
    }

    #[test]
    fn test_configured_database_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("prefs.db");
        let config = AppConfig {
            database_path: Some(db_path.clone()),
            ..Default::default()
        };

        let resolved = SettingsService::new().database_path(&config).unwrap();
        assert_eq!(resolved, db_path);
        assert!(dir.path().join("nested").is_dir(), "Parent should be created");
    }

    #[test]
    fn test_fallback_database_path_without_dirs() {
        let service = SettingsService { dirs: None };
        let resolved = service.database_path(&AppConfig::default()).unwrap();
        assert_eq!(resolved, PathBuf::from(DATABASE_FILE));
        assert_eq!(service.load(None).unwrap(), AppConfig::default());
    }
}
