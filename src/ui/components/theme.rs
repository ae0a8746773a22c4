//! Colour palettes for the rendered page.
use crate::domain::DARK_MARKER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub struct PageTheme {
    pub page_bg: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub accent: Rgb,
    pub diff_added_bg: Rgb,
    pub diff_added_text: Rgb,
    pub diff_removed_bg: Rgb,
    pub diff_removed_text: Rgb,
    pub diff_changed_bg: Rgb,
    pub diff_changed_text: Rgb,
    pub diff_line_num: Rgb,
    pub code_bg: Rgb,
    pub code_border: Rgb,
    pub gutter_bg: Rgb,
}

impl PageTheme {
    pub fn light() -> Self {
        Self {
            page_bg: Rgb(250, 250, 252),
            text_primary: Rgb(36, 41, 47),
            text_secondary: Rgb(87, 96, 106),
            accent: Rgb(9, 105, 218),
            diff_added_bg: Rgb(218, 251, 225),
            diff_added_text: Rgb(26, 127, 55),
            diff_removed_bg: Rgb(255, 235, 233),
            diff_removed_text: Rgb(207, 34, 46),
            diff_changed_bg: Rgb(255, 248, 197),
            diff_changed_text: Rgb(154, 103, 0),
            diff_line_num: Rgb(140, 149, 159),
            code_bg: Rgb(255, 255, 255),
            code_border: Rgb(208, 215, 222),
            gutter_bg: Rgb(246, 248, 250),
        }
    }

    pub fn dark() -> Self {
        Self {
            page_bg: Rgb(20, 20, 25),
            text_primary: Rgb(200, 200, 210),
            text_secondary: Rgb(150, 150, 160),
            accent: Rgb(88, 166, 255),
            diff_added_bg: Rgb(34, 55, 34),
            diff_added_text: Rgb(87, 171, 90),
            diff_removed_bg: Rgb(64, 31, 31),
            diff_removed_text: Rgb(248, 81, 73),
            diff_changed_bg: Rgb(61, 52, 20),
            diff_changed_text: Rgb(210, 153, 34),
            diff_line_num: Rgb(100, 100, 110),
            code_bg: Rgb(25, 25, 30),
            code_border: Rgb(60, 60, 70),
            gutter_bg: Rgb(20, 20, 25),
        }
    }

    fn variables(&self) -> String {
        format!(
            "--page-bg:{};--text-primary:{};--text-secondary:{};--accent:{};\
             --added-bg:{};--added-text:{};--removed-bg:{};--removed-text:{};\
             --changed-bg:{};--changed-text:{};--line-num:{};--code-bg:{};\
             --code-border:{};--gutter-bg:{};",
            self.page_bg,
            self.text_primary,
            self.text_secondary,
            self.accent,
            self.diff_added_bg,
            self.diff_added_text,
            self.diff_removed_bg,
            self.diff_removed_text,
            self.diff_changed_bg,
            self.diff_changed_text,
            self.diff_line_num,
            self.code_bg,
            self.code_border,
            self.gutter_bg,
        )
    }
}

/// Stylesheet for both themes; the dark palette applies while the root
/// carries the dark marker.
pub fn stylesheet() -> String {
    format!(
        ":root{{{light}}}\n:root.{marker}{{{dark}}}\n{rules}",
        light = PageTheme::light().variables(),
        dark = PageTheme::dark().variables(),
        marker = DARK_MARKER,
        rules = BASE_RULES,
    )
}

const BASE_RULES: &str = "body{background:var(--page-bg);color:var(--text-primary);font-family:sans-serif;margin:0;padding:1rem}
.summary{color:var(--text-secondary);display:flex;gap:1rem;margin-bottom:.5rem}
.summary .diff-type{color:var(--accent)}
.columns{display:grid;grid-template-columns:1fr 1fr;gap:1rem}
.columns.one-column{grid-template-columns:1fr}
.column{background:var(--code-bg);border:1px solid var(--code-border);font-family:monospace;overflow-x:auto}
.line{display:flex;white-space:pre}
.line-num{background:var(--gutter-bg);color:var(--line-num);min-width:3em;padding-right:.5em;text-align:right;user-select:none}
.line-content{padding-left:.5em}
.line.added{background:var(--added-bg);color:var(--added-text)}
.line.removed{background:var(--removed-bg);color:var(--removed-text)}
.line.changed{background:var(--changed-bg);color:var(--changed-text)}
.notice{margin-top:.5rem}
.notice.failure{color:var(--removed-text)}
";
