//! Rendering module
//!
//! `scene` describes a frame in terms of `Canvas` primitives; `DrawList`
//! records it as triangles plus text. On the web the triangles go through a
//! WebGPU pipeline and the text through a 2D overlay canvas.

pub mod canvas;
pub mod draw_list;
pub mod scene;
pub mod shapes;
pub mod vertex;

#[cfg(target_arch = "wasm32")]
pub mod overlay;
#[cfg(target_arch = "wasm32")]
pub mod pipeline;

pub use canvas::{Canvas, TextStyle};
pub use draw_list::{DrawList, TextItem};
pub use scene::{SceneOptions, draw_scene};
pub use vertex::{Color, Vertex, colors};

#[cfg(target_arch = "wasm32")]
pub use overlay::TextOverlay;
#[cfg(target_arch = "wasm32")]
pub use pipeline::RenderState;

/// Map canvas pixels onto clip space: x 0..w → -1..1, y 0..h → 1..-1
#[inline]
pub fn canvas_to_ndc(logical_size: (f32, f32), x: f32, y: f32) -> (f32, f32) {
    let (w, h) = logical_size;
    (x / w * 2.0 - 1.0, 1.0 - y / h * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_to_ndc_corners() {
        let size = (800.0, 600.0);
        assert_eq!(canvas_to_ndc(size, 0.0, 0.0), (-1.0, 1.0));
        assert_eq!(canvas_to_ndc(size, 800.0, 600.0), (1.0, -1.0));
        assert_eq!(canvas_to_ndc(size, 400.0, 300.0), (0.0, 0.0));
    }
}
