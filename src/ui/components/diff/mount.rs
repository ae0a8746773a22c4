//! Mounting adapter: writes render plans, placeholders and failures into a
//! [`Surface`].

use super::render::{Layout, LineElementSpec, RenderPlan, utils};
use crate::domain::LineClass;
use crate::ui::components::surface::{Column, Surface};

pub const PLACEHOLDER_TEXT: &str = "Comparando...";

/// Prefix of the single line shown when a comparison fails.
pub const FAILURE_PREFIX: &str = "Ocorreu um erro: ";

pub fn mount_plan(surface: &mut dyn Surface, plan: RenderPlan) {
    let RenderPlan {
        layout,
        original,
        altered,
        summary,
    } = plan;

    surface.set_layout(layout);
    surface.replace_column(Column::Original, original);
    // One-column plans carry no altered lines; replacing still wipes the
    // previous two-column render.
    surface.replace_column(Column::Altered, altered);
    surface.set_summary(Some(summary));
}

pub fn mount_placeholder(surface: &mut dyn Surface) {
    surface.set_summary(None);
    surface.set_layout(Layout::TwoColumn);
    let placeholder = || vec![message_line(PLACEHOLDER_TEXT, LineClass::Unchanged)];
    surface.replace_column(Column::Original, placeholder());
    surface.replace_column(Column::Altered, placeholder());
}

pub fn mount_failure(surface: &mut dyn Surface, error: &str) {
    surface.set_summary(None);
    surface.set_layout(Layout::TwoColumn);
    surface.replace_column(
        Column::Original,
        vec![message_line(&format!("{FAILURE_PREFIX}{error}"), LineClass::Removed)],
    );
    surface.replace_column(Column::Altered, Vec::new());
}

pub fn mount_empty(surface: &mut dyn Surface) {
    surface.set_summary(None);
    surface.replace_column(Column::Original, Vec::new());
    surface.replace_column(Column::Altered, Vec::new());
}

fn message_line(text: &str, class: LineClass) -> LineElementSpec {
    LineElementSpec {
        line_number_text: String::new(),
        display_content: utils::display_content(text),
        class,
    }
}
