use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::pages::PageKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub paging: PagingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level, used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Optional roster file replacing the built-in character roster
    #[serde(default)]
    pub roster_path: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            roster_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Draw the page navigation dots
    #[serde(default = "default_true")]
    pub show_nav_points: bool,
    /// Ordered page set shown in the scroll viewport
    #[serde(default = "default_pages")]
    pub pages: Vec<PageKind>,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_nav_points: default_true(),
            pages: default_pages(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve applied to smooth page scrolls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the animation window
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate page transitions instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one page transition
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while a transition is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingConfig {
    /// A transition settles once the live offset is closer than this many
    /// rows to its target. Values below 1 are treated as 1.
    #[serde(default = "default_settle_tolerance")]
    pub settle_tolerance: u16,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            settle_tolerance: default_settle_tolerance(),
        }
    }
}

/// Theme configuration
/// Accepts either a theme name or a table with `name` and optional `colors`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ThemeConfigRepr")]
pub struct ThemeConfig {
    pub name: String,
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeConfigRepr {
    Name(String),
    Table {
        #[serde(default = "default_theme_name")]
        name: String,
        #[serde(default)]
        colors: ThemeColorOverrides,
    },
}

impl From<ThemeConfigRepr> for ThemeConfig {
    fn from(repr: ThemeConfigRepr) -> Self {
        match repr {
            ThemeConfigRepr::Name(name) => Self {
                name,
                colors: ThemeColorOverrides::default(),
            },
            ThemeConfigRepr::Table { name, colors } => Self { name, colors },
        }
    }
}

/// Optional hex color overrides ("#rrggbb" or "rgb")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub bg0: Option<String>,
    pub bg1: Option<String>,
    pub fg0: Option<String>,
    pub accent: Option<String>,
    pub selection: Option<String>,
    pub highlight: Option<String>,
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("showcase")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_pages() -> Vec<PageKind> {
    vec![PageKind::Splash, PageKind::Characters, PageKind::Credits]
}

fn default_animation_duration() -> u64 {
    350
}

fn default_animation_fps() -> u32 {
    60
}

fn default_settle_tolerance() -> u16 {
    1
}

/// Expand tilde (~) in path to user's home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/showcase/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("showcase")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the TUI log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("showcase.log")
    }

    /// Get the roster file path, if one is configured
    pub fn roster_path(&self) -> Option<PathBuf> {
        self.general.roster_path.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.pages.len(), 3);
        assert_eq!(config.ui.scroll.easing, EasingType::Cubic);
        assert_eq!(config.paging.settle_tolerance, 1);
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
    }

    #[test]
    fn test_theme_as_plain_name() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_as_table_with_overrides() {
        let toml = r##"
[ui.theme]
name = "dracula"
colors = { accent = "#ff0000" }
"##;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_partial_scroll_section() {
        let toml = "[ui.scroll]\nsmooth_enabled = false\neasing = \"ease_out\"\n";
        let config = AppConfig::from_toml(toml).unwrap();
        assert!(!config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.scroll.easing, EasingType::EaseOut);
        assert_eq!(config.ui.scroll.animation_fps, 60);
    }

    #[test]
    fn test_pages_list() {
        let config = AppConfig::from_toml("[ui]\npages = [\"characters\"]\n").unwrap();
        assert_eq!(config.ui.pages, vec![PageKind::Characters]);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[ui\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.ui.pages, config.ui.pages);
        assert_eq!(parsed.ui.theme.name, config.ui.theme.name);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("showcase-config-does-not-exist.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.paging.settle_tolerance, 1);
    }
}
