use crate::domain::LineClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Structured diffs: a single block in the original column.
    OneColumn,
    #[default]
    TwoColumn,
}

/// One rendered line, free of any surface specifics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineElementSpec {
    /// Stringified line number, empty when the producer gave none.
    pub line_number_text: String,
    /// Spaces replaced by U+00A0; never empty.
    pub display_content: String,
    /// Styling hint only.
    pub class: LineClass,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryText {
    pub diff_type_label: String,
    pub removals: u64,
    pub additions: u64,
    pub removals_text: String,
    pub additions_text: String,
    pub changes_visible: bool,
    pub changes_text: String,
    pub line_counts_visible: bool,
    pub original_count_text: String,
    pub altered_count_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderPlan {
    pub layout: Layout,
    pub original: Vec<LineElementSpec>,
    /// Always empty for [`Layout::OneColumn`].
    pub altered: Vec<LineElementSpec>,
    pub summary: SummaryText,
}
