use crate::format::NumberLocale;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file that receives a copy of the log output.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Initial window size. If absent, a default size is used.
    #[serde(default = "default_window_size")]
    pub window_size: Option<(i32, i32)>,
    #[serde(default)]
    pub dark_mode: bool,
    /// Separators used for grouped numbers.
    #[serde(default)]
    pub locale: NumberLocale,
}

fn default_window_size() -> Option<(i32, i32)> {
    Some((1100, 760))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            window_size: default_window_size(),
            dark_mode: false,
            locale: NumberLocale::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// The configured locale, or the default one if it is unusable.
    pub fn number_locale(&self) -> NumberLocale {
        match self.locale.validate() {
            Ok(()) => self.locale,
            Err(e) => {
                tracing::warn!("invalid locale in settings: {e}; using default separators");
                NumberLocale::default()
            }
        }
    }

    pub fn window_size(&self) -> (f32, f32) {
        let (w, h) = self
            .window_size
            .or_else(default_window_size)
            .unwrap_or((1100, 760));
        (w.max(480) as f32, h.max(360) as f32)
    }
}
