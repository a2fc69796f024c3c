//! Overlay (modal) state for one detail view instance.

/// Which expanded text, if any, the detail page currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open {
        content: String,
        title: String,
    },
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Shows `content` under `title`, replacing anything already open.
    ///
    /// Blank content is ignored and the state stays unchanged. Returns whether
    /// the state changed to the requested content.
    pub fn open(&mut self, content: &str, title: impl Into<String>) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        *self = Self::Open {
            content: content.to_string(),
            title: title.into(),
        };
        true
    }

    /// Returns to `Closed`. Always succeeds.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Open { content, .. } => Some(content.as_str()),
            Self::Closed => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Open { title, .. } => Some(title.as_str()),
            Self::Closed => None,
        }
    }
}
