//! Domain types shared by the render pipeline and the controller.

pub mod diff;
pub mod error;
pub mod theme;

pub use diff::{DiffLine, DiffMode, DiffRequest, DiffResult, DiffSummary, LineClass};
pub use error::{ClipboardError, DiffServiceError, PreferencesError};
pub use theme::{DARK_MARKER, THEME_STORAGE_KEY, Theme};
