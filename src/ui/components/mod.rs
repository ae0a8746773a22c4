pub mod diff;
pub mod html;
pub mod surface;
pub mod theme;

pub use diff::{Layout, LineElementSpec, RenderPlan, SummaryText, project};
pub use html::HtmlDocument;
pub use surface::{Column, Notice, NoticeKind, Surface};
