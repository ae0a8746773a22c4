//! Platform colour-scheme detection.
//!
//! Answers "does the user prefer dark mode?" once per process, from the
//! configured setting or, for `system`, from platform indicators.

use std::sync::OnceLock;

use super::app_config::ColorSchemeSetting;

pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemColorScheme {
    setting: ColorSchemeSetting,
}

impl SystemColorScheme {
    pub fn new(setting: ColorSchemeSetting) -> Self {
        Self { setting }
    }
}

impl ColorSchemeProbe for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        match self.setting {
            ColorSchemeSetting::Dark => true,
            ColorSchemeSetting::Light => false,
            ColorSchemeSetting::System => system_prefers_dark(),
        }
    }
}

/// Cached platform detection result.
static SYSTEM_DARK: OnceLock<bool> = OnceLock::new();

pub fn system_prefers_dark() -> bool {
    *SYSTEM_DARK.get_or_init(detect_dark_preference)
}

fn detect_dark_preference() -> bool {
    #[cfg(target_os = "macos")]
    {
        // Only set while the dark appearance is active.
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            && output.status.success()
        {
            return String::from_utf8_lossy(&output.stdout)
                .trim()
                .eq_ignore_ascii_case("dark");
        }
    }

    if let Ok(gtk_theme) = std::env::var("GTK_THEME")
        && gtk_theme.to_lowercase().contains("dark")
    {
        return true;
    }

    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| colorfgbg_is_dark(&value))
        .unwrap_or(false)
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); ANSI backgrounds 0-6
/// and 8 are dark.
pub fn colorfgbg_is_dark(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}
