/// Storage slot holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Marker applied to the document root while the dark theme is active.
pub const DARK_MARKER: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Literal written to theme storage. Light is the empty marker.
    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => DARK_MARKER,
        }
    }

    /// Any stored value other than the dark marker reads back as light.
    pub fn from_storage_value(value: &str) -> Self {
        if value.trim() == DARK_MARKER {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}
