/// Structured feedback from operations that can produce multiple messages.
///
/// This replaces direct `eprintln!` calls, allowing callers to decide how
/// to present feedback (CLI prints to stderr, library consumers can log
/// or ignore). Conditions that abort a locale are errors on the sync
/// result instead, never feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Informational message (progress, status updates).
    Info(String),
    /// Warning - operation continued but something noteworthy occurred.
    Warning(String),
}

impl Feedback {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self::Warning(msg.into())
    }

    /// Returns true if this is a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning(_))
    }

    /// Get the message text.
    pub fn message(&self) -> &str {
        match self {
            Self::Info(msg) | Self::Warning(msg) => msg,
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info(msg) => write!(f, "{msg}"),
            Self::Warning(msg) => write!(f, "warning: {msg}"),
        }
    }
}
