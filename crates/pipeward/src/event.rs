use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReconcileError;

/// Pipeline lifecycle events that can route to an SNS topic.
///
/// The control plane spells these first-letter-capitalized; user input is
/// accepted case-insensitively and mapped onto the enum at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Progressing,
    Completed,
    Warning,
    Error,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Progressing,
        EventKind::Completed,
        EventKind::Warning,
        EventKind::Error,
    ];

    /// Wire-format name, as the control plane expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Progressing => "Progressing",
            EventKind::Completed => "Completed",
            EventKind::Warning => "Warning",
            EventKind::Error => "Error",
        }
    }
}

impl FromStr for EventKind {
    type Err = ReconcileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "progressing" => Ok(EventKind::Progressing),
            "completed" => Ok(EventKind::Completed),
            "warning" => Ok(EventKind::Warning),
            "error" => Ok(EventKind::Error),
            _ => Err(ReconcileError::InvalidEventKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SNS topic ARN per event kind. Empty string means no topic assigned.
///
/// All four kinds are always present — there is no partial value, so
/// comparing two `Notifications` compares the full routing table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notifications {
    pub progressing: String,
    pub completed: String,
    pub warning: String,
    pub error: String,
}

impl Notifications {
    /// Build from user-side (key, topic) pairs.
    ///
    /// Keys are matched case-insensitively; an unrecognized key is an error.
    /// Kinds not mentioned default to "". Later pairs overwrite earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ReconcileError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut notifications = Notifications::default();
        for (key, topic) in pairs {
            let kind: EventKind = key.as_ref().parse()?;
            notifications.set(kind, topic.into());
        }
        Ok(notifications)
    }

    pub fn topic(&self, kind: EventKind) -> &str {
        match kind {
            EventKind::Progressing => &self.progressing,
            EventKind::Completed => &self.completed,
            EventKind::Warning => &self.warning,
            EventKind::Error => &self.error,
        }
    }

    pub fn set(&mut self, kind: EventKind, topic: String) {
        match kind {
            EventKind::Progressing => self.progressing = topic,
            EventKind::Completed => self.completed = topic,
            EventKind::Warning => self.warning = topic,
            EventKind::Error => self.error = topic,
        }
    }
}
