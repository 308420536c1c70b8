//! Discrete user commands and the run-state machine

use serde::{Deserialize, Serialize};

/// Direction of a parameter adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Up,
    Down,
}

impl Step {
    /// +1.0 or -1.0
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Step::Up => 1.0,
            Step::Down => -1.0,
        }
    }
}

/// Every action the control loop understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    AdjustMass(Step),
    AdjustAngle(Step),
    AdjustFriction(Step),
    /// Return the block to the top at rest
    Reset,
    TogglePause,
    /// End the control loop
    Quit,
}

impl Command {
    /// Short label for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::AdjustMass(Step::Up) => "mass+",
            Command::AdjustMass(Step::Down) => "mass-",
            Command::AdjustAngle(Step::Up) => "angle+",
            Command::AdjustAngle(Step::Down) => "angle-",
            Command::AdjustFriction(Step::Up) => "friction+",
            Command::AdjustFriction(Step::Down) => "friction-",
            Command::Reset => "reset",
            Command::TogglePause => "pause",
            Command::Quit => "quit",
        }
    }
}

/// Whether the physics advances each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    /// The other state
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }

    #[inline]
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }

    /// Label for the pause button: the action it would take
    pub fn button_label(self) -> &'static str {
        match self {
            RunState::Running => "Pause",
            RunState::Paused => "Play",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_state_toggle() {
        let state = RunState::default();
        assert_eq!(state, RunState::Running);
        assert_eq!(state.toggled(), RunState::Paused);
        assert_eq!(state.toggled().toggled(), RunState::Running);
        assert!(!state.toggled().is_running());
    }

    #[test]
    fn test_button_label_reflects_state() {
        assert_eq!(RunState::Running.button_label(), "Pause");
        assert_eq!(RunState::Paused.button_label(), "Play");
    }

    #[test]
    fn test_command_serde_shape() {
        let json = serde_json::to_string(&Command::AdjustAngle(Step::Down)).unwrap();
        assert_eq!(json, r#"{"AdjustAngle":"Down"}"#);
        let back: Command = serde_json::from_str(r#""TogglePause""#).unwrap();
        assert_eq!(back, Command::TogglePause);
    }
}
