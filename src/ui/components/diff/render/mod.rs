//! Projection of a diff result into surface-agnostic line elements.
//!
//! Everything here is pure: the same [`DiffResult`] always yields the same
//! [`RenderPlan`], so callers may re-project freely on resize or theme change.

pub mod types;
pub mod utils;

pub use types::{Layout, LineElementSpec, RenderPlan, SummaryText};

use crate::domain::{DiffLine, DiffMode, DiffResult, DiffSummary, LineClass};

pub fn project(result: &DiffResult) -> RenderPlan {
    match result.mode {
        DiffMode::LineText => RenderPlan {
            layout: Layout::TwoColumn,
            original: result.original_lines.iter().map(line_element).collect(),
            altered: result.altered_lines.iter().map(line_element).collect(),
            summary: summary_text(result, true),
        },
        DiffMode::Structured => {
            let block = match result.original_lines.first() {
                Some(line) => line_element(line),
                None => line_element(&DiffLine::new(
                    None,
                    utils::NO_DIFFERENCES,
                    LineClass::Unchanged,
                )),
            };
            RenderPlan {
                layout: Layout::OneColumn,
                original: vec![block],
                altered: Vec::new(),
                summary: summary_text(result, false),
            }
        }
    }
}

pub fn line_element(line: &DiffLine) -> LineElementSpec {
    LineElementSpec {
        line_number_text: line
            .line_number
            .map(|n| n.to_string())
            .unwrap_or_default(),
        display_content: utils::display_content(&line.content),
        class: line.class,
    }
}

fn summary_text(result: &DiffResult, line_counts_visible: bool) -> SummaryText {
    let DiffSummary {
        removals,
        additions,
        changes,
        total_lines_original,
        total_lines_altered,
    } = result.summary;
    let changes = changes.unwrap_or(0);

    let (original_count_text, altered_count_text) = if line_counts_visible {
        (
            utils::line_count_text(
                total_lines_original.unwrap_or(result.original_lines.len() as u64),
            ),
            utils::line_count_text(
                total_lines_altered.unwrap_or(result.altered_lines.len() as u64),
            ),
        )
    } else {
        (String::new(), String::new())
    };

    SummaryText {
        diff_type_label: result.diff_type.clone(),
        removals,
        additions,
        removals_text: utils::removals_text(removals),
        additions_text: utils::additions_text(additions),
        changes_visible: changes > 0,
        changes_text: if changes > 0 {
            utils::changes_text(changes)
        } else {
            String::new()
        },
        line_counts_visible,
        original_count_text,
        altered_count_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DiffSummary;

    fn text_result(original: Vec<DiffLine>, altered: Vec<DiffLine>) -> DiffResult {
        DiffResult {
            mode: DiffMode::LineText,
            diff_type: "Texto".into(),
            original_lines: original,
            altered_lines: altered,
            summary: DiffSummary::default(),
        }
    }

    fn structured_result(original: Vec<DiffLine>, altered: Vec<DiffLine>) -> DiffResult {
        DiffResult {
            mode: DiffMode::Structured,
            diff_type: "JSON/Objeto".into(),
            original_lines: original,
            altered_lines: altered,
            summary: DiffSummary::default(),
        }
    }

    #[test]
    fn line_text_keeps_column_lengths() {
        let result = text_result(
            vec![
                DiffLine::new(Some(1), "a", LineClass::Unchanged),
                DiffLine::new(Some(2), "b", LineClass::Removed),
                DiffLine::new(Some(3), "c", LineClass::Removed),
            ],
            vec![DiffLine::new(Some(1), "a", LineClass::Unchanged)],
        );

        let plan = project(&result);
        assert_eq!(plan.layout, Layout::TwoColumn);
        assert_eq!(plan.original.len(), 3);
        assert_eq!(plan.altered.len(), 1);
    }

    #[test]
    fn line_text_preserves_order_and_duplicates() {
        let result = text_result(
            vec![
                DiffLine::new(Some(2), "x", LineClass::Added),
                DiffLine::new(Some(1), "x", LineClass::Added),
            ],
            vec![],
        );

        let plan = project(&result);
        let numbers: Vec<_> = plan
            .original
            .iter()
            .map(|l| l.line_number_text.as_str())
            .collect();
        assert_eq!(numbers, ["2", "1"]);
    }

    #[test]
    fn structured_never_renders_altered_lines() {
        let result = structured_result(
            vec![DiffLine::new(None, "changed root['a']", LineClass::Changed)],
            vec![
                DiffLine::new(Some(1), "stale", LineClass::Added),
                DiffLine::new(Some(2), "stale", LineClass::Added),
            ],
        );

        let plan = project(&result);
        assert_eq!(plan.layout, Layout::OneColumn);
        assert!(plan.altered.is_empty());
        assert_eq!(plan.original.len(), 1);
        assert_eq!(plan.original[0].class, LineClass::Changed);
    }

    #[test]
    fn structured_uses_only_first_original_line() {
        let result = structured_result(
            vec![
                DiffLine::new(None, "first", LineClass::Changed),
                DiffLine::new(None, "second", LineClass::Changed),
            ],
            vec![],
        );

        let plan = project(&result);
        assert_eq!(plan.original.len(), 1);
        assert_eq!(plan.original[0].display_content, "first");
    }

    #[test]
    fn structured_without_lines_shows_no_differences() {
        let plan = project(&structured_result(vec![], vec![]));
        assert_eq!(plan.original.len(), 1);
        assert_eq!(
            plan.original[0].display_content,
            display("Nenhuma diferença encontrada.")
        );
        assert_eq!(plan.original[0].line_number_text, "");
    }

    #[test]
    fn missing_line_number_renders_empty() {
        let plan = project(&text_result(
            vec![DiffLine::new(None, "x", LineClass::Unchanged)],
            vec![],
        ));
        assert_eq!(plan.original[0].line_number_text, "");
    }

    #[test]
    fn empty_lines_are_never_empty_after_projection() {
        let plan = project(&text_result(
            vec![DiffLine::new(Some(1), "", LineClass::Unchanged)],
            vec![DiffLine::new(Some(1), "", LineClass::Added)],
        ));
        assert_eq!(plan.original[0].display_content, "\u{a0}");
        assert_eq!(plan.altered[0].display_content, "\u{a0}");
    }

    #[test]
    fn changes_visible_only_when_positive() {
        for (changes, visible) in [(None, false), (Some(0), false), (Some(3), true)] {
            let mut result = structured_result(vec![], vec![]);
            result.summary.changes = changes;
            let plan = project(&result);
            assert_eq!(plan.summary.changes_visible, visible, "changes = {changes:?}");

            result.mode = DiffMode::LineText;
            let plan = project(&result);
            assert_eq!(plan.summary.changes_visible, visible, "changes = {changes:?}");
        }
    }

    #[test]
    fn changes_text_reads_count() {
        let mut result = structured_result(vec![], vec![]);
        result.summary.changes = Some(2);
        assert_eq!(project(&result).summary.changes_text, "2 changes");
    }

    #[test]
    fn line_counts_fall_back_to_column_length() {
        let result = text_result(
            vec![
                DiffLine::new(Some(1), "a", LineClass::Unchanged),
                DiffLine::new(Some(2), "b", LineClass::Unchanged),
            ],
            vec![DiffLine::new(Some(1), "a", LineClass::Unchanged)],
        );

        let summary = project(&result).summary;
        assert!(summary.line_counts_visible);
        assert_eq!(summary.original_count_text, "2 linhas");
        assert_eq!(summary.altered_count_text, "1 linhas");
    }

    #[test]
    fn line_counts_hidden_in_structured_mode() {
        let mut result = structured_result(vec![], vec![]);
        result.summary.total_lines_original = Some(5);
        let summary = project(&result).summary;
        assert!(!summary.line_counts_visible);
        assert!(summary.original_count_text.is_empty());
    }

    #[test]
    fn project_is_deterministic() {
        let mut result = text_result(
            vec![DiffLine::new(Some(1), "a  b", LineClass::Changed)],
            vec![DiffLine::new(Some(1), "a b", LineClass::Changed)],
        );
        result.summary = DiffSummary {
            removals: 1,
            additions: 1,
            changes: Some(1),
            total_lines_original: Some(1),
            total_lines_altered: Some(1),
        };

        assert_eq!(project(&result), project(&result));
    }

    fn display(text: &str) -> String {
        utils::display_content(text)
    }
}
