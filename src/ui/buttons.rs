//! Fixed clickable regions
//!
//! Eight static rectangles map 1:1 onto commands. Hit-testing is plain
//! point-in-rectangle containment, half-open: the left and top edges
//! are inside, the right and bottom edges are not.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::CANVAS_WIDTH;
use crate::sim::{Command, RunState, Step};

/// Axis-aligned rectangle in canvas pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Half-open containment test: `[x, x + w) × [y, y + h)`
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.w
            && point.y >= self.y
            && point.y < self.y + self.h
    }

    /// Rectangle of `size` centered on `center`
    pub fn centered(center: Vec2, size: f32) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }
}

/// What a button shows on its face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLabel {
    Plus,
    Minus,
    Reset,
    /// "Pause" or "Play" depending on run state
    PauseToggle,
}

impl ButtonLabel {
    pub fn text(&self, run_state: RunState) -> &'static str {
        match self {
            ButtonLabel::Plus => "+",
            ButtonLabel::Minus => "-",
            ButtonLabel::Reset => "Reset",
            ButtonLabel::PauseToggle => run_state.button_label(),
        }
    }
}

/// A clickable region bound to one command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub command: Command,
    pub label: ButtonLabel,
}

/// The full set of on-screen controls
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonLayout {
    buttons: Vec<Button>,
}

impl Default for ButtonLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl ButtonLayout {
    /// Parameter ± pairs down the left edge, reset/pause on the right
    pub fn standard() -> Self {
        let pair = |y: f32, cmd: fn(Step) -> Command| {
            [
                Button {
                    rect: Rect::new(50.0, y, 40.0, 40.0),
                    command: cmd(Step::Up),
                    label: ButtonLabel::Plus,
                },
                Button {
                    rect: Rect::new(100.0, y, 40.0, 40.0),
                    command: cmd(Step::Down),
                    label: ButtonLabel::Minus,
                },
            ]
        };

        let mut buttons = Vec::with_capacity(8);
        buttons.extend(pair(50.0, Command::AdjustMass));
        buttons.extend(pair(100.0, Command::AdjustAngle));
        buttons.extend(pair(150.0, Command::AdjustFriction));
        buttons.push(Button {
            rect: Rect::new(CANVAS_WIDTH - 150.0, 50.0, 100.0, 40.0),
            command: Command::Reset,
            label: ButtonLabel::Reset,
        });
        buttons.push(Button {
            rect: Rect::new(CANVAS_WIDTH - 150.0, 100.0, 100.0, 40.0),
            command: Command::TogglePause,
            label: ButtonLabel::PauseToggle,
        });

        Self { buttons }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// First button containing `point`
    pub fn hit_test(&self, point: Vec2) -> Option<Command> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains(point))
            .map(|b| b.command)
    }

    /// Rectangle bound to a command, if any
    pub fn rect_for(&self, command: Command) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|b| b.command == command)
            .map(|b| b.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_half_open() {
        let r = Rect::new(50.0, 50.0, 40.0, 40.0);
        assert!(r.contains(Vec2::new(50.0, 50.0)));
        assert!(r.contains(Vec2::new(89.9, 89.9)));
        assert!(!r.contains(Vec2::new(90.0, 70.0)));
        assert!(!r.contains(Vec2::new(70.0, 90.0)));
        assert!(r.contains(r.center()));
        assert!(!r.contains(Vec2::new(49.9, 70.0)));
        assert!(!r.contains(Vec2::new(70.0, 90.1)));
    }

    #[test]
    fn test_standard_layout_maps_every_command() {
        let layout = ButtonLayout::standard();
        assert_eq!(layout.buttons().len(), 8);
        for button in layout.buttons() {
            assert_eq!(layout.hit_test(button.rect.center()), Some(button.command));
        }
        assert_eq!(
            layout.hit_test(Vec2::new(70.0, 70.0)),
            Some(Command::AdjustMass(Step::Up))
        );
        assert_eq!(
            layout.hit_test(Vec2::new(120.0, 170.0)),
            Some(Command::AdjustFriction(Step::Down))
        );
        assert_eq!(layout.hit_test(Vec2::new(700.0, 120.0)), Some(Command::TogglePause));
        // Bottom edge of reset belongs to nothing; pause starts 10 px lower
        assert_eq!(layout.hit_test(Vec2::new(700.0, 90.0)), None);
        assert_eq!(layout.hit_test(Vec2::new(700.0, 100.0)), Some(Command::TogglePause));
    }

    #[test]
    fn test_miss_returns_none() {
        let layout = ButtonLayout::standard();
        assert_eq!(layout.hit_test(Vec2::new(400.0, 300.0)), None);
        // Gap between the + and - columns
        assert_eq!(layout.hit_test(Vec2::new(95.0, 70.0)), None);
    }

    #[test]
    fn test_rect_for_and_labels() {
        let layout = ButtonLayout::standard();
        let reset = layout.rect_for(Command::Reset).unwrap();
        assert_eq!(reset, Rect::new(650.0, 50.0, 100.0, 40.0));
        assert!(layout.rect_for(Command::Quit).is_none());
        assert_eq!(ButtonLabel::PauseToggle.text(RunState::Paused), "Play");
        assert_eq!(ButtonLabel::Minus.text(RunState::Running), "-");
    }
}
