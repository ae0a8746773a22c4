use crate::domain::{DiffLine, DiffMode, DiffResult, DiffSummary, LineClass};

/// "a\nb" against "a\nc" as the service reports it.
pub fn text_diff_result() -> DiffResult {
    DiffResult {
        mode: DiffMode::LineText,
        diff_type: "Texto".into(),
        original_lines: vec![
            DiffLine::new(Some(1), "a", LineClass::Unchanged),
            DiffLine::new(Some(2), "b", LineClass::Removed),
        ],
        altered_lines: vec![
            DiffLine::new(Some(1), "a", LineClass::Unchanged),
            DiffLine::new(Some(2), "c", LineClass::Added),
        ],
        summary: DiffSummary {
            removals: 1,
            additions: 1,
            changes: Some(0),
            total_lines_original: Some(2),
            total_lines_altered: Some(2),
        },
    }
}

/// Identical key/value inputs compared in structured mode.
pub fn structured_no_diff_result() -> DiffResult {
    DiffResult {
        mode: DiffMode::Structured,
        diff_type: "Properties".into(),
        original_lines: vec![DiffLine::new(
            None,
            "Nenhuma diferença encontrada.",
            LineClass::Unchanged,
        )],
        altered_lines: Vec::new(),
        summary: DiffSummary {
            removals: 0,
            additions: 0,
            changes: Some(0),
            total_lines_original: None,
            total_lines_altered: None,
        },
    }
}
