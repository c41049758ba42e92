use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Tile source opened when none is given on the command line
    #[serde(default)]
    pub source: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            source: None,
        }
    }
}

/// Grid dimensions every page is packed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_columns")]
    pub columns: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Duration of a one-page transition in milliseconds
    #[serde(default = "default_base_duration")]
    pub base_duration_ms: u64,
    /// Elastic overtravel past the first/last page, as a fraction of one page
    #[serde(default = "default_bounce")]
    pub bounce: f64,
    /// Redraw rate while an animation is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            base_duration_ms: default_base_duration(),
            bounce: default_bounce(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl AnimationConfig {
    #[inline]
    pub fn base_duration(&self) -> Duration {
        Duration::from_millis(self.base_duration_ms)
    }

    #[inline]
    pub fn frame_interval(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Colors are hex strings ("#RRGGBB", "RRGGBB", "#RGB")
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default = "default_delimiter_stroke")]
    pub delimiter_stroke: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            background: default_background(),
            delimiter: default_delimiter(),
            title: default_title(),
            text: default_text(),
            accent: default_accent(),
            delimiter_stroke: default_delimiter_stroke(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("newsdeck")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_rows() -> usize {
    5
}

fn default_columns() -> usize {
    2
}

fn default_base_duration() -> u64 {
    300
}

fn default_bounce() -> f64 {
    0.3
}

fn default_animation_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    100
}

fn default_background() -> String {
    "#1d2021".to_string()
}

fn default_delimiter() -> String {
    "#504945".to_string()
}

fn default_title() -> String {
    "#ebdbb2".to_string()
}

fn default_text() -> String {
    "#a89984".to_string()
}

fn default_accent() -> String {
    "#d79921".to_string()
}

fn default_delimiter_stroke() -> f32 {
    1.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
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

impl DeckConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Reject values the packer and position engine cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        if self.grid.rows < 2 || self.grid.columns < 2 {
            return Err(crate::Error::Config(format!(
                "grid must be at least 2x2, got {}x{}",
                self.grid.rows, self.grid.columns
            )));
        }
        if !(0.0..=0.5).contains(&self.animation.bounce) {
            return Err(crate::Error::Config(format!(
                "animation.bounce must be within [0, 0.5], got {}",
                self.animation.bounce
            )));
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/newsdeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("newsdeck")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used by the interactive UI
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("newsdeck.log")
    }

    /// Default tile source (with tilde expansion)
    pub fn source(&self) -> Option<PathBuf> {
        self.general.source.as_deref().map(expand_tilde)
    }
}
