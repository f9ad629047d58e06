// Config module - config.toml and theme.toml under the user config dir

mod theme;

pub use theme::Theme;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use directories::BaseDirs;

use crate::error::{AuthScreenError, Result};
use crate::testimonials::{self, Testimonial};
use crate::timers::{TimerIntervals, DEFAULT_CAROUSEL_INTERVAL, DEFAULT_CLOCK_INTERVAL};

const CONFIG_DIR: &str = "educlips-auth";
const MAIN_CONFIG_FILE: &str = "config.toml";
const THEME_FILE: &str = "theme.toml";
const LOG_FILE: &str = "educlips-auth.log";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub showcase: ShowcaseConfig,
    pub testimonials: Vec<Testimonial>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            showcase: ShowcaseConfig::default(),
            testimonials: testimonials::builtin(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl GeneralConfig {
    /// Configured log file, or `<data dir>/educlips-auth/educlips-auth.log`.
    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        BaseDirs::new()
            .map(|dirs| dirs.data_dir().join(CONFIG_DIR).join(LOG_FILE))
            .ok_or_else(|| AuthScreenError::Config("Could not determine data directory".to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub brand: String,
    pub version_label: String,
    pub clock_interval_ms: u64,
    pub carousel_interval_ms: u64,
    pub locale: Option<String>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            brand: "EduClipsAI".to_string(),
            version_label: "v1.0.3".to_string(),
            clock_interval_ms: DEFAULT_CLOCK_INTERVAL.as_millis() as u64,
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL.as_millis() as u64,
            locale: None,
        }
    }
}

impl ShowcaseConfig {
    pub fn intervals(&self) -> TimerIntervals {
        TimerIntervals::from_millis(self.clock_interval_ms, self.carousel_interval_ms)
    }
}

pub struct ConfigManager {
    config_dir: PathBuf,
    app_config: AppConfig,
    theme: Theme,
}

impl ConfigManager {
    /// Load from the platform config dir. Missing files mean defaults.
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self::from_dir(config_dir))
    }

    /// Load from an explicit directory (`--config`). The directory must exist.
    pub fn with_dir(config_dir: PathBuf) -> Result<Self> {
        if !config_dir.is_dir() {
            return Err(AuthScreenError::ConfigNotFound { path: config_dir });
        }
        Ok(Self::from_dir(config_dir))
    }

    /// Point at a directory without requiring it to exist yet.
    pub fn from_dir(config_dir: PathBuf) -> Self {
        let app_config = Self::load_app_config(&config_dir);
        let theme = Self::load_theme(&config_dir);

        Self {
            config_dir,
            app_config,
            theme,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.app_config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn get_config_dir() -> Result<PathBuf> {
        BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR))
            .ok_or_else(|| AuthScreenError::Config("Could not determine config directory".to_string()))
    }

    fn load_app_config(config_dir: &Path) -> AppConfig {
        let path = config_dir.join(MAIN_CONFIG_FILE);
        Self::load_toml_file(&path).unwrap_or_default()
    }

    fn load_theme(config_dir: &Path) -> Theme {
        let path = config_dir.join(THEME_FILE);
        Self::load_toml_file(&path).unwrap_or_default()
    }

    fn load_toml_file<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Option<T> {
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn ensure_config_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir)
                .map_err(|e| AuthScreenError::Config(format!("Failed to create config dir: {}", e)))?;
        }
        Ok(())
    }

    /// Write `config.toml` and `theme.toml` with default contents. Existing
    /// files are left alone. Returns the paths that were written.
    pub fn write_default_configs(&self) -> Result<Vec<PathBuf>> {
        self.ensure_config_dir()?;
        let mut written = Vec::new();

        let main_path = self.config_dir.join(MAIN_CONFIG_FILE);
        if !main_path.exists() {
            let content = toml::to_string_pretty(&AppConfig::default())
                .map_err(|e| AuthScreenError::Config(format!("Failed to serialize config: {}", e)))?;
            std::fs::write(&main_path, content)
                .map_err(|e| AuthScreenError::Config(format!("Failed to write config: {}", e)))?;
            written.push(main_path);
        }

        let theme_path = self.config_dir.join(THEME_FILE);
        if !theme_path.exists() {
            let content = toml::to_string_pretty(&Theme::default())
                .map_err(|e| AuthScreenError::Config(format!("Failed to serialize theme: {}", e)))?;
            std::fs::write(&theme_path, content)
                .map_err(|e| AuthScreenError::Config(format!("Failed to write theme: {}", e)))?;
            written.push(theme_path);
        }

        Ok(written)
    }
}
