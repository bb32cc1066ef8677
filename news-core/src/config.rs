use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::NAVER_NEWS_ENDPOINT;
use crate::error::ConfigError;
use crate::models::Variant;

/// Persisted settings. API credentials are deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub background_color: [u8; 3],
    pub panel_color: [u8; 3],
    pub accent_color: [u8; 3],
    pub text_color: [u8; 3],
    pub secondary_text_color: [u8; 3],
    pub border_color: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub font_size: f32,
    pub default_variant: Variant,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: NAVER_NEWS_ENDPOINT.to_string(),
            user_agent: "NewsBoard/0.1".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: [30, 30, 30],
            panel_color: [37, 37, 38],
            accent_color: [255, 75, 75],
            text_color: [214, 214, 214],
            secondary_text_color: [150, 150, 150],
            border_color: [60, 60, 60],
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            default_variant: Variant::Basic,
            window_width: 1000.0,
            window_height: 820.0,
        }
    }
}

impl AppConfig {
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("news-board").join("config.json"))
    }

    /// Loads the user's config, falling back to defaults (and writing them) if
    /// the file is missing or unreadable.
    pub fn load() -> Self {
        let path = match Self::config_file_path() {
            Ok(path) => path,
            Err(e) => {
                warn!(error = %e, "no config location, using defaults");
                return Self::default();
            }
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "could not load config, using defaults");
                let default_config = Self::default();
                if let Err(save_err) = default_config.save_to(&path) {
                    warn!(error = %save_err, "could not write default config");
                }
                default_config
            }
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(error = %e, path = %path.display(), "falling back to default config");
            Self::default()
        })
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // write-then-rename so a crash never leaves half a file
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(self)?)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl ThemeConfig {
    fn color(rgb: [u8; 3]) -> egui::Color32 {
        egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
    }

    pub fn background_color32(&self) -> egui::Color32 {
        Self::color(self.background_color)
    }

    pub fn panel_color32(&self) -> egui::Color32 {
        Self::color(self.panel_color)
    }

    pub fn accent_color32(&self) -> egui::Color32 {
        Self::color(self.accent_color)
    }

    pub fn text_color32(&self) -> egui::Color32 {
        Self::color(self.text_color)
    }

    pub fn secondary_text_color32(&self) -> egui::Color32 {
        Self::color(self.secondary_text_color)
    }

    pub fn border_color32(&self) -> egui::Color32 {
        Self::color(self.border_color)
    }
}
