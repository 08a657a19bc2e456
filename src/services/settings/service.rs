use crate::models::settings::Settings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "planner.db";

/// Loads and saves [`Settings`] from a TOML file.
pub struct SettingsService {
    config_path: PathBuf,
    data_dir: PathBuf,
}

impl SettingsService {
    pub fn new(config_path: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            data_dir: data_dir.into(),
        }
    }

    /// Service rooted in the platform config/data directories, falling back to
    /// the working directory when they cannot be resolved.
    pub fn from_project_dirs() -> Self {
        if let Some(dirs) = ProjectDirs::from("com", "EventPlanner", "EventPlanner") {
            Self::new(dirs.config_dir().join(CONFIG_FILE), dirs.data_dir())
        } else {
            log::warn!("Unable to resolve project directories; using current dir");
            Self::new(CONFIG_FILE, ".")
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Read the config file.
    ///
    /// A missing file yields defaults and writes them out; a malformed file
    /// is logged and also yields defaults.
    pub fn load(&self) -> Settings {
        if !self.config_path.exists() {
            let settings = Settings::default();
            if let Err(err) = self.save(&settings) {
                log::warn!("Failed to write default settings: {err:?}");
            }
            return settings;
        }

        match self.read() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!(
                    "Ignoring unreadable settings at {}: {err:?}",
                    self.config_path.display()
                );
                Settings::default()
            }
        }
    }

    fn read(&self) -> Result<Settings> {
        let text = fs::read_to_string(&self.config_path)
            .context(format!("Failed to read {}", self.config_path.display()))?;
        toml::from_str(&text).context("Failed to parse settings")
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let text = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.config_path, text)
            .context(format!("Failed to write {}", self.config_path.display()))
    }

    /// Database location: the configured override or the data directory.
    pub fn database_path(&self, settings: &Settings) -> PathBuf {
        settings
            .database_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join(DATABASE_FILE))
    }

    /// Ensure the data directory exists before the database is opened.
    pub fn ensure_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).context("Failed to create data directory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{ThemeMode, ViewMode};
    use pretty_assertions::assert_eq;

    fn service(dir: &tempfile::TempDir) -> SettingsService {
        SettingsService::new(dir.path().join("conf").join(CONFIG_FILE), dir.path())
    }

    #[test]
    fn test_load_missing_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let settings = service.load();
        assert_eq!(settings, Settings::default());
        assert!(service.config_path().exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let settings = Settings {
            theme: ThemeMode::Dark,
            start_view: ViewMode::Calendar,
            database_path: Some(dir.path().join("custom.db")),
        };
        service.save(&settings).unwrap();

        assert_eq!(service.load(), settings);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        fs::create_dir_all(service.config_path().parent().unwrap()).unwrap();
        fs::write(service.config_path(), "theme = [").unwrap();

        assert_eq!(service.load(), Settings::default());
    }

    #[test]
    fn test_database_path_default_and_override() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let mut settings = Settings::default();
        assert_eq!(service.database_path(&settings), dir.path().join(DATABASE_FILE));

        settings.database_path = Some(PathBuf::from("/tmp/elsewhere.db"));
        assert_eq!(
            service.database_path(&settings),
            PathBuf::from("/tmp/elsewhere.db")
        );
    }
}
