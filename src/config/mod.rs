use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the JSON dataset files.
    pub data_dir: String,
    /// Fallback when the dataset carries no settings.json.
    #[serde(default = "default_shift_hours")]
    pub default_shift_hours: i64,
    #[serde(default = "default_min_lunch")]
    pub minimum_lunch_minutes: Option<i64>,
    /// Show the weekday next to dates in list output.
    #[serde(default)]
    pub show_weekday: bool,
}

fn default_shift_hours() -> i64 {
    8
}

fn default_min_lunch() -> Option<i64> {
    Some(60)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            default_shift_hours: default_shift_hours(),
            minimum_lunch_minutes: default_min_lunch(),
            show_weekday: false,
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".punchlog")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchlog.conf")
    }

    pub fn data_dir_default() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or fall back to defaults when absent or
    /// unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();
        fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_yaml::from_str(&content).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Initialize the configuration file and an empty dataset directory.
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let data_dir = match custom_data_dir {
            Some(dir) => {
                let p = PathBuf::from(&dir);
                if p.is_absolute() {
                    p
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::data_dir_default(),
        };

        fs::create_dir_all(&data_dir)?;

        if !is_test {
            let config = Config {
                data_dir: data_dir.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save()?;
        }

        Ok(data_dir)
    }

    /// Fields a `config --check` verifies are present in the file on disk.
    pub fn check_file() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        let content = fs::read_to_string(&path)
            .map_err(|_| AppError::Config(format!("cannot read {}", path.display())))?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

        let required = [
            "data_dir",
            "default_shift_hours",
            "minimum_lunch_minutes",
            "show_weekday",
        ];
        let missing: Vec<&'static str> = required
            .into_iter()
            .filter(|&k| value.get(k).is_none())
            .collect();
        Ok(missing)
    }
}
