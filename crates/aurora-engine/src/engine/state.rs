//! Render loop lifecycle

use serde::{Deserialize, Serialize};

/// Lifecycle of the render loop.
///
/// `Unstarted -> Running -> Stopped`. `Stopped` is terminal and may be
/// entered from either other state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopState {
    /// Not yet drawing: not started, or waiting for a surface with a size
    #[default]
    Unstarted,
    /// Drawing one frame per tick
    Running,
    /// Torn down; nothing is scheduled or listened to
    Stopped,
}

impl LoopState {
    /// Whether further ticks may still do work
    #[inline]
    pub fn is_live(self) -> bool {
        self != LoopState::Stopped
    }

    pub fn id(self) -> &'static str {
        match self {
            LoopState::Unstarted => "unstarted",
            LoopState::Running => "running",
            LoopState::Stopped => "stopped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_state_default() {
        assert_eq!(LoopState::default(), LoopState::Unstarted);
    }

    #[test]
    fn test_loop_state_is_live() {
        assert!(LoopState::Unstarted.is_live());
        assert!(LoopState::Running.is_live());
        assert!(!LoopState::Stopped.is_live());
    }

    #[test]
    fn test_loop_state_serialize() {
        assert_eq!(serde_json::to_string(&LoopState::Running).unwrap(), "\"running\"");
        for state in [LoopState::Unstarted, LoopState::Running, LoopState::Stopped] {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.id()));
        }
    }
}
