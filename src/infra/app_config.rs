use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000/api/compare";

/// Where the initial theme comes from when nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemeSetting {
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service_url: String,
    /// No timeout unless configured.
    pub request_timeout_secs: Option<u64>,
    pub color_scheme: ColorSchemeSetting,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            request_timeout_secs: None,
            color_scheme: ColorSchemeSetting::System,
        }
    }
}

pub fn load_config() -> AppConfig {
    let mut config = read_config_file();
    if let Ok(url) = std::env::var("COMPARADOR_SERVICE_URL")
        && !url.trim().is_empty()
    {
        config.service_url = url.trim().to_string();
    }
    config
}

fn read_config_file() -> AppConfig {
    let path = config_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    parse_config(&contents).unwrap_or_else(|err| {
        log::warn!("Ignoring invalid config {}: {}", path.display(), err);
        AppConfig::default()
    })
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn render_config(config: &AppConfig) -> String {
    toml::to_string_pretty(config).unwrap_or_default()
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("COMPARADOR_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

pub fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("COMPARADOR_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("Comparador");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("Comparador");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(data) = dirs::data_dir() {
            return data.join("comparador");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("comparador");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".comparador")
}
