//! In-memory HTML document root.
//!
//! Holds whatever the controller mounted and serializes it to a standalone
//! page. All producer text goes through [`escape_html`] on the way out.

use std::fmt::Write as _;

use super::diff::render::utils::escape_html;
use super::diff::render::{Layout, LineElementSpec, SummaryText};
use super::surface::{Column, Notice, NoticeKind, Surface};
use super::theme;

pub const PAGE_TITLE: &str = "Comparador Universal";

#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    layout: Layout,
    original: Vec<LineElementSpec>,
    altered: Vec<LineElementSpec>,
    summary: Option<SummaryText>,
    compare_enabled: bool,
    root_markers: Vec<String>,
    notices: Vec<Notice>,
}

impl HtmlDocument {
    pub fn new() -> Self {
        Self {
            compare_enabled: true,
            ..Default::default()
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn column(&self, column: Column) -> &[LineElementSpec] {
        match column {
            Column::Original => &self.original,
            Column::Altered => &self.altered,
        }
    }

    pub fn summary(&self) -> Option<&SummaryText> {
        self.summary.as_ref()
    }

    pub fn compare_enabled(&self) -> bool {
        self.compare_enabled
    }

    pub fn has_root_marker(&self, marker: &str) -> bool {
        self.root_markers.iter().any(|m| m == marker)
    }

    /// Notices shown since the last call, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let root_class = self.root_markers.join(" ");
        let _ = writeln!(html, "<!DOCTYPE html>");
        let _ = writeln!(html, "<html lang=\"pt-BR\" class=\"{}\">", escape_html(&root_class));
        let _ = writeln!(html, "<head>");
        let _ = writeln!(html, "<meta charset=\"utf-8\">");
        let _ = writeln!(html, "<title>{PAGE_TITLE}</title>");
        let _ = writeln!(html, "<style>\n{}</style>", theme::stylesheet());
        let _ = writeln!(html, "</head>");
        let _ = writeln!(html, "<body>");
        let _ = writeln!(html, "<h1>{PAGE_TITLE}</h1>");

        if let Some(summary) = &self.summary {
            render_summary(&mut html, summary);
        }

        let columns_class = match self.layout {
            Layout::TwoColumn => "columns",
            Layout::OneColumn => "columns one-column",
        };
        let _ = writeln!(html, "<div class=\"{columns_class}\">");
        render_column(&mut html, "original", &self.original);
        if self.layout == Layout::TwoColumn {
            render_column(&mut html, "altered", &self.altered);
        }
        let _ = writeln!(html, "</div>");

        for notice in &self.notices {
            let class = match notice.kind {
                NoticeKind::Success => "notice success",
                NoticeKind::Failure => "notice failure",
            };
            let _ = writeln!(
                html,
                "<div class=\"{class}\">{}</div>",
                escape_html(&notice.message)
            );
        }

        let _ = writeln!(html, "</body>");
        let _ = writeln!(html, "</html>");
        html
    }
}

impl Surface for HtmlDocument {
    fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    fn replace_column(&mut self, column: Column, lines: Vec<LineElementSpec>) {
        match column {
            Column::Original => self.original = lines,
            Column::Altered => self.altered = lines,
        }
    }

    fn set_summary(&mut self, summary: Option<SummaryText>) {
        self.summary = summary;
    }

    fn set_compare_enabled(&mut self, enabled: bool) {
        self.compare_enabled = enabled;
    }

    fn set_root_marker(&mut self, marker: &str, present: bool) {
        self.root_markers.retain(|m| m != marker);
        if present {
            self.root_markers.push(marker.to_string());
        }
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

fn render_summary(html: &mut String, summary: &SummaryText) {
    let _ = writeln!(html, "<div class=\"summary\">");
    if !summary.diff_type_label.is_empty() {
        let _ = writeln!(
            html,
            "<span class=\"diff-type\">{}</span>",
            escape_html(&summary.diff_type_label)
        );
    }
    let _ = writeln!(html, "<span class=\"removals\">{}</span>", summary.removals_text);
    let _ = writeln!(html, "<span class=\"additions\">{}</span>", summary.additions_text);
    if summary.changes_visible {
        let _ = writeln!(html, "<span class=\"changes\">{}</span>", summary.changes_text);
    }
    if summary.line_counts_visible {
        let _ = writeln!(
            html,
            "<span class=\"line-count original\">{}</span>",
            summary.original_count_text
        );
        let _ = writeln!(
            html,
            "<span class=\"line-count altered\">{}</span>",
            summary.altered_count_text
        );
    }
    let _ = writeln!(html, "</div>");
}

fn render_column(html: &mut String, name: &str, lines: &[LineElementSpec]) {
    let _ = writeln!(html, "<div class=\"column {name}\">");
    for line in lines {
        let _ = writeln!(
            html,
            "<div class=\"line {}\"><span class=\"line-num\">{}</span><span class=\"line-content\">{}</span></div>",
            line.class,
            escape_html(&line.line_number_text),
            escape_html(&line.display_content)
        );
    }
    let _ = writeln!(html, "</div>");
}
