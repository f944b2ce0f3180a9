//! Configuration management
//!
//! TOML file at `~/.config/tally/config.toml` holding display defaults,
//! status badge classes and named view presets.
//! Priority for the page size: CLI argument > TALLY_PAGE_SIZE > config.toml

use super::Result;
use crate::error::{ConfigError, StorageError, TableError};
use crate::table::{ColumnSpec, DropdownAction, StatusStyles};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const PAGE_SIZE_ENV: &str = "TALLY_PAGE_SIZE";
pub const DEFAULT_PAGE_SIZE: usize = 10;
const CONFIG_FILE: &str = "config.toml";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_use_colors")]
    pub use_colors: bool,
    /// Badge class for statuses missing from `status_styles`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_class: Option<String>,
    #[serde(default = "default_status_styles")]
    pub status_styles: BTreeMap<String, String>,
    #[serde(default)]
    pub views: BTreeMap<String, ViewPreset>,
}

/// Named list layout, e.g. `[views.invoices]`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ViewPreset {
    /// Record array inside the envelope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    /// `key` or `key:Label`
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub search_fields: Vec<String>,
    /// `key` or `key:Label`
    #[serde(default)]
    pub actions: Vec<String>,
}

impl ViewPreset {
    pub fn column_specs(&self) -> std::result::Result<Vec<ColumnSpec>, TableError> {
        self.columns.iter().map(|spec| spec.parse()).collect()
    }

    pub fn dropdown_actions(&self) -> std::result::Result<Vec<DropdownAction>, TableError> {
        self.actions.iter().map(|spec| spec.parse()).collect()
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_use_colors() -> bool {
    true
}

fn default_status_styles() -> BTreeMap<String, String> {
    [
        ("Paid", "green"),
        ("Pending", "yellow"),
        ("Overdue", "red"),
        ("Draft", "gray"),
        ("Cancelled", "gray"),
    ]
    .into_iter()
    .map(|(status, class)| (status.to_string(), class.to_string()))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            use_colors: default_use_colors(),
            default_class: None,
            status_styles: default_status_styles(),
            views: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from file. A missing file yields the defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        if config.page_size == 0 {
            return Err(StorageError::ConfigParseError {
                message: "page_size must be greater than 0".to_string(),
            });
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(Self::path_in(&home_dir.join(".config").join("tally")))
    }

    /// Config file inside an explicit directory
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Page size with fallback to environment variable
    pub fn effective_page_size(&self) -> usize {
        page_size_override(std::env::var(PAGE_SIZE_ENV).ok()).unwrap_or(self.page_size)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> std::result::Result<(), ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size".to_string(),
                value: page_size.to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        self.page_size = page_size;
        Ok(())
    }

    pub fn status_styles(&self) -> StatusStyles {
        let styles: StatusStyles = self
            .status_styles
            .iter()
            .map(|(status, class)| (status.as_str(), class.as_str()))
            .collect();
        match &self.default_class {
            Some(class) => styles.with_fallback(class.as_str()),
            None => styles,
        }
    }

    pub fn view(&self, name: &str) -> Option<&ViewPreset> {
        self.views.get(name)
    }

    pub fn view_names(&self) -> Vec<String> {
        self.views.keys().cloned().collect()
    }
}

/// Parse the env override; unset, blank, zero or malformed values are ignored.
fn page_size_override(value: Option<String>) -> Option<usize> {
    let value = value?;
    match value.trim().parse::<usize>() {
        Ok(size) if size > 0 => Some(size),
        _ => {
            if !value.trim().is_empty() {
                log::warn!("ignoring invalid {}={:?}", PAGE_SIZE_ENV, value);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.page_size, 10);
        assert!(config.use_colors);
        assert_eq!(config.status_styles.get("Paid").map(String::as_str), Some("green"));
        assert_eq!(config.status_styles.get("Overdue").map(String::as_str), Some("red"));
        assert!(config.views.is_empty());
    }

    #[test]
    fn test_page_size_management() {
        let mut config = Config::default();
        config.set_page_size(25).expect("valid page size");
        assert_eq!(config.page_size, 25);
        assert!(config.set_page_size(0).is_err());
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_page_size_override_parsing() {
        assert_eq!(page_size_override(Some("50".to_string())), Some(50));
        assert_eq!(page_size_override(Some(" 7 ".to_string())), Some(7));
        assert_eq!(page_size_override(Some("0".to_string())), None);
        assert_eq!(page_size_override(Some("lots".to_string())), None);
        assert_eq!(page_size_override(None), None);
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set_page_size(20).expect("valid page size");
        config.default_class = Some("muted".to_string());
        config.views.insert(
            "invoices".to_string(),
            ViewPreset {
                entity: Some("invoices".to_string()),
                columns: vec!["vendor:Vendor".to_string(), "status".to_string()],
                search_fields: vec!["vendor".to_string()],
                actions: vec!["view".to_string()],
            },
        );

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");
        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");

        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let nonexistent_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load(Some(nonexistent_path)).expect("Failed to load default config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = Config::path_in(temp_dir.path());
        fs::write(
            &config_path,
            "page_size = 5\n\n[views.vendors]\ncolumns = [\"name\", \"city:City\"]\n",
        )
        .expect("Failed to write config");

        let config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(config.page_size, 5);
        assert!(config.use_colors);
        assert_eq!(config.status_styles.len(), 5);

        let view = config.view("vendors").expect("preset exists");
        let specs = view.column_specs().expect("valid columns");
        assert_eq!(specs[1].label, "City");
        assert_eq!(config.view_names(), vec!["vendors".to_string()]);
    }

    #[test]
    fn test_invalid_files_are_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = Config::path_in(temp_dir.path());

        fs::write(&config_path, "page_size = 0\n").expect("Failed to write config");
        assert!(matches!(
            Config::load(Some(config_path.clone())),
            Err(StorageError::ConfigParseError { .. })
        ));

        fs::write(&config_path, "page_size = [").expect("Failed to write config");
        assert!(Config::load(Some(config_path)).is_err());
    }

    #[test]
    fn test_status_styles_with_custom_fallback() {
        let mut config = Config::default();
        assert_eq!(config.status_styles().class_for("Void"), "neutral");
        config.default_class = Some("muted".to_string());
        let styles = config.status_styles();
        assert_eq!(styles.class_for("Paid"), "green");
        assert_eq!(styles.class_for("Void"), "muted");
    }
}
