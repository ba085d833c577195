use crate::core::dial::{Dial, DialPoint};
use crate::errors::{AppError, AppResult};
use crate::models::DEFAULT_LABEL;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_label")]
    pub default_label: String,
    /// "24h" or "12h"; how times are shown in the alarm list.
    #[serde(default = "default_clock_format")]
    pub clock_format: String,
    #[serde(default = "default_dial_center")]
    pub dial_center_x: f64,
    #[serde(default = "default_dial_center")]
    pub dial_center_y: f64,
    #[serde(default = "default_dial_radius")]
    pub dial_radius: f64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}
fn default_clock_format() -> String {
    "24h".to_string()
}
fn default_dial_center() -> f64 {
    150.0
}
fn default_dial_radius() -> f64 {
    120.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_label: default_label(),
            clock_format: default_clock_format(),
            dial_center_x: default_dial_center(),
            dial_center_y: default_dial_center(),
            dial_radius: default_dial_radius(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ralarm")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".ralarm")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ralarm.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("ralarm.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn uses_12h(&self) -> bool {
        self.clock_format.trim().eq_ignore_ascii_case("12h")
    }

    /// Dial geometry configured for the picker.
    pub fn dial(&self) -> Dial {
        Dial::new(
            DialPoint::new(self.dial_center_x, self.dial_center_y),
            self.dial_radius,
        )
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was set up.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Self::load()?
            };

            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
