use crate::domain::ClipboardError;

pub trait ClipboardSink {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// The OS clipboard. Opened per copy so a missing display server only fails
/// the copy that needed it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard {
    hold_until_taken: bool,
}

impl SystemClipboard {
    /// For short-lived processes. On X11 and Wayland the content is served by
    /// its owner, so each copy blocks until another client (usually a
    /// clipboard manager) has taken it over.
    pub fn holding() -> Self {
        Self {
            hold_until_taken: true,
        }
    }

    pub fn holds_until_taken(&self) -> bool {
        self.hold_until_taken
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        write_text(&mut clipboard, text, self.hold_until_taken)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

#[cfg(all(
    unix,
    not(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "android",
        target_os = "emscripten"
    ))
))]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: String,
    hold: bool,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold {
        log::info!("Holding clipboard content until another application takes it over");
        clipboard.set().wait().text(text)
    } else {
        clipboard.set_text(text)
    }
}

#[cfg(not(all(
    unix,
    not(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "android",
        target_os = "emscripten"
    ))
)))]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: String,
    _hold: bool,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
