pub mod catalog;
pub mod detail;
pub mod navigator;

pub use catalog::{CatalogPhase, CatalogViewState};
pub use detail::{DetailPhase, DetailViewState, NavToken, UserAction};
pub use navigator::Route;

/// Severity of a transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient, user-visible notification for an asynchronous outcome
///
/// The terminal rendition of a toast: queued by the view state, drained and
/// printed by the front end, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}
