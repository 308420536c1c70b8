//! Drawing primitives the scene is expressed in
//!
//! Coordinates are canvas pixels with the origin at the top-left and y
//! growing downward.

use glam::Vec2;

use super::vertex::Color;
use crate::ui::Rect;

/// Text sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Normal,
    Large,
}

impl TextStyle {
    /// Font size in pixels
    pub fn size_px(self) -> f32 {
        match self {
            TextStyle::Normal => 18.0,
            TextStyle::Large => 28.0,
        }
    }
}

/// Something the scene can be drawn onto
pub trait Canvas {
    /// Clear to a solid color (start of frame)
    fn clear(&mut self, color: Color);

    /// Straight line of the given width
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Filled convex polygon
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Text with its top-left corner at `pos`
    fn text(&mut self, text: &str, pos: Vec2, style: TextStyle, color: Color);

    /// Line with a triangular head at `to`
    fn arrow(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let delta = to - from;
        let len = delta.length();
        if len < f32::EPSILON {
            return;
        }
        let dir = delta / len;
        let head_len = (width * 4.0).min(len);
        let head_half = width * 2.5;
        let base = to - dir * head_len;
        let perp = dir.perp();

        self.line(from, base, width, color);
        self.fill_polygon(&[to, base + perp * head_half, base - perp * head_half], color);
    }
}
