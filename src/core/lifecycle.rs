//! Logger lifecycle states

use std::fmt;

/// `NotStarted -> Running -> Stopping -> Stopped`
///
/// `stop` on a logger that never started goes `NotStarted -> Stopping -> Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    NotStarted,
    Running,
    Stopping,
    Stopped,
}

impl LifecycleState {
    /// Whether logging calls may still enqueue entries.
    ///
    /// Entries queued before `start` are written once the writer runs.
    #[inline]
    pub fn accepts_entries(&self) -> bool {
        matches!(self, LifecycleState::NotStarted | LifecycleState::Running)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::NotStarted => write!(f, "NotStarted"),
            LifecycleState::Running => write!(f, "Running"),
            LifecycleState::Stopping => write!(f, "Stopping"),
            LifecycleState::Stopped => write!(f, "Stopped"),
        }
    }
}
