//! Raw input events and their translation into commands

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::buttons::ButtonLayout;
use crate::sim::{Command, Step};

/// Keys the simulator reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Space,
    Escape,
    Char(char),
}

/// A discrete event reported by the frontend since the last poll
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer press at canvas pixel coordinates
    PointerDown { x: f32, y: f32 },
    Key(Key),
    /// Window or tab closed
    CloseRequested,
}

impl InputEvent {
    pub fn pointer(pos: Vec2) -> Self {
        InputEvent::PointerDown { x: pos.x, y: pos.y }
    }
}

/// Keyboard shortcut table (lowercase decreases, uppercase increases)
pub fn key_command(key: Key) -> Option<Command> {
    let command = match key {
        Key::Space => Command::TogglePause,
        Key::Escape => Command::Quit,
        Key::Char(c) => match c {
            'p' | 'P' => Command::TogglePause,
            'r' | 'R' => Command::Reset,
            'q' | 'Q' => Command::Quit,
            'm' => Command::AdjustMass(Step::Down),
            'M' => Command::AdjustMass(Step::Up),
            'a' => Command::AdjustAngle(Step::Down),
            'A' => Command::AdjustAngle(Step::Up),
            'f' => Command::AdjustFriction(Step::Down),
            'F' => Command::AdjustFriction(Step::Up),
            _ => return None,
        },
    };
    Some(command)
}

/// Map one event to a command; clicks outside every button are ignored
pub fn translate(event: &InputEvent, layout: &ButtonLayout) -> Option<Command> {
    match *event {
        InputEvent::PointerDown { x, y } => layout.hit_test(Vec2::new(x, y)),
        InputEvent::Key(key) => key_command(key),
        InputEvent::CloseRequested => Some(Command::Quit),
    }
}

/// Translate a batch, preserving arrival order
pub fn translate_all(events: &[InputEvent], layout: &ButtonLayout) -> Vec<Command> {
    events
        .iter()
        .filter_map(|e| translate(e, layout))
        .collect()
}
