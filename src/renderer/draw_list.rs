//! Frame recording
//!
//! `DrawList` implements `Canvas` by tessellating geometry into a triangle
//! list for the GPU and keeping text runs aside for the overlay.

use glam::Vec2;

use super::canvas::{Canvas, TextStyle};
use super::shapes;
use super::vertex::{Color, Vertex, colors};
use crate::ui::Rect;

/// A text run queued for the overlay
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub style: TextStyle,
    pub color: Color,
}

/// One recorded frame
#[derive(Debug, Clone)]
pub struct DrawList {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextItem>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            vertices: Vec::new(),
            texts: Vec::new(),
        }
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if any text run contains `needle`
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.text.contains(needle))
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
        self.texts.clear();
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.vertices.extend(shapes::thick_line(from, to, width, color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.vertices.extend(shapes::rect(rect, color));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.vertices.extend(shapes::convex_polygon(points, color));
    }

    fn text(&mut self, text: &str, pos: Vec2, style: TextStyle, color: Color) {
        self.texts.push(TextItem {
            text: text.to_string(),
            pos,
            style,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_frame() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), colors::BLOCK);
        list.text("hi", Vec2::ZERO, TextStyle::Normal, colors::TEXT);
        list.clear(colors::INCLINE);
        assert!(list.vertices.is_empty());
        assert!(list.texts.is_empty());
        assert_eq!(list.clear_color, colors::INCLINE);
    }

    #[test]
    fn test_arrow_emits_shaft_and_head() {
        let mut list = DrawList::new();
        list.arrow(Vec2::ZERO, Vec2::new(50.0, 0.0), 2.0, colors::NORMAL_FORCE);
        // quad (6) + head triangle (3)
        assert_eq!(list.vertices.len(), 9);

        let mut list = DrawList::new();
        list.arrow(Vec2::ONE, Vec2::ONE, 2.0, colors::NORMAL_FORCE);
        assert!(list.vertices.is_empty());
    }
}
