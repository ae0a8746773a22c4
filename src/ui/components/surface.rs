//! The rendering surface the controller mounts into.
//!
//! A surface is the document root of the comparison page: two columns of
//! lines, a summary region, the compare trigger and a place for one-shot
//! notices. Implementations only store what they are given; every decision
//! about what to show is made before these methods are called.

use super::diff::render::{Layout, LineElementSpec, SummaryText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Original,
    Altered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A one-shot message for the user, shown once and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }
}

pub trait Surface {
    fn set_layout(&mut self, layout: Layout);

    /// Replaces the whole column. An empty vector leaves it unpopulated.
    fn replace_column(&mut self, column: Column, lines: Vec<LineElementSpec>);

    /// `None` hides the summary region.
    fn set_summary(&mut self, summary: Option<SummaryText>);

    fn set_compare_enabled(&mut self, enabled: bool);

    fn set_root_marker(&mut self, marker: &str, present: bool);

    fn notify(&mut self, notice: &Notice);
}
