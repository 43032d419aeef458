//! Admin dashboard state: the concurrent data load and the property editor.

mod dashboard;
mod editor;

pub use dashboard::DashboardData;
pub use editor::{PropertyEditor, SubmitOutcome};

/// Dismissible banner shown after an admin action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "Success",
            NoticeLevel::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    /// Query string that carries the notice across a redirect.
    pub fn to_query(&self) -> String {
        let level = match self.level {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        };
        format!("notice={}&level={}", urlencoding::encode(&self.message), level)
    }

    pub fn from_query(message: Option<&str>, level: Option<&str>) -> Option<Self> {
        let message = message.map(str::trim).filter(|m| !m.is_empty())?;
        Some(match level {
            Some("error") => Notice::error(message),
            _ => Notice::success(message),
        })
    }
}
