//! Side-by-side diff display.
//!
//! `render` turns a diff result into line elements; `mount` writes them into a
//! surface.

pub mod mount;
pub mod render;

pub use render::{Layout, LineElementSpec, RenderPlan, SummaryText, project};
