use serde::{Deserialize, Deserializer, Serialize};
use std::num::NonZeroU32;

/// A comparison request, sent to the diff service verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffRequest {
    pub original: String,
    pub altered: String,
    /// Compare as key/value (properties, JSON) data instead of plain lines.
    #[serde(rename = "is_properties", default)]
    pub structured_mode: bool,
}

/// How the producer classified a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineClass {
    #[default]
    #[serde(alias = "equal")]
    Unchanged,
    #[serde(alias = "insert")]
    Added,
    #[serde(alias = "delete")]
    Removed,
    #[serde(alias = "modified")]
    Changed,
}

impl LineClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
        }
    }
}

impl std::fmt::Display for LineClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    /// Absent for structured diffs that are not line oriented.
    #[serde(
        rename = "line_num",
        default,
        deserialize_with = "deserialize_line_number"
    )]
    pub line_number: Option<NonZeroU32>,
    /// Raw producer text, not escaped.
    pub content: String,
    #[serde(rename = "type", default)]
    pub class: LineClass,
}

impl DiffLine {
    pub fn new(line_number: Option<u32>, content: impl Into<String>, class: LineClass) -> Self {
        Self {
            line_number: line_number.and_then(NonZeroU32::new),
            content: content.into(),
            class,
        }
    }
}

/// Line numbers start at 1; `null` means the line has none.
fn deserialize_line_number<'de, D>(deserializer: D) -> Result<Option<NonZeroU32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<u64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    u32::try_from(raw)
        .ok()
        .and_then(NonZeroU32::new)
        .map(Some)
        .ok_or_else(|| {
            serde::de::Error::custom(format!(
                "line_num must be a positive line number, got {raw}"
            ))
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffMode {
    /// Two line-aligned columns.
    #[default]
    LineText,
    /// A single block for key/value or JSON comparisons.
    Structured,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffSummary {
    #[serde(default)]
    pub removals: u64,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub changes: Option<u64>,
    #[serde(default)]
    pub total_lines_original: Option<u64>,
    #[serde(default)]
    pub total_lines_altered: Option<u64>,
}

/// One comparison outcome. Immutable once produced; a new one replaces the
/// previous in full.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffResult {
    pub mode: DiffMode,
    /// The producer's label for the comparison kind ("Texto", "JSON/Objeto", ...).
    pub diff_type: String,
    pub original_lines: Vec<DiffLine>,
    /// Empty in structured mode.
    pub altered_lines: Vec<DiffLine>,
    pub summary: DiffSummary,
}

impl DiffResult {
    pub fn is_line_text(&self) -> bool {
        self.mode == DiffMode::LineText
    }
}
