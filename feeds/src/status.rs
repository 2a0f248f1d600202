//! The single status slot shared by both resource kinds.
//!
//! Last write wins: every completed operation overwrites whatever was there,
//! regardless of which kind or which operation produced it.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusMessage {
    #[default]
    None,
    Error(String),
    Success(String),
}

impl StatusMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Message text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Error(text) | Self::Success(text) => Some(text),
        }
    }
}
