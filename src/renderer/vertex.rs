//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scene elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [1.0, 1.0, 1.0, 1.0];
    pub const INCLINE: Color = [0.0, 0.0, 0.0, 1.0];
    pub const BLOCK: Color = [1.0, 0.0, 0.0, 1.0];
    pub const NORMAL_FORCE: Color = [0.0, 0.0, 1.0, 1.0];
    pub const PARALLEL_FORCE: Color = [0.0, 0.7, 0.0, 1.0];
    pub const FRICTION_FORCE: Color = [1.0, 0.55, 0.0, 1.0];
    pub const BUTTON: Color = [0.78, 0.78, 0.78, 1.0];
    pub const TEXT: Color = [0.0, 0.0, 0.0, 1.0];
    pub const PAUSED_BANNER: Color = [0.8, 0.1, 0.1, 1.0];

    /// CSS `rgba(...)` string for the 2D text overlay
    pub fn to_css(color: Color) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (color[0] * 255.0).round() as u8,
            (color[1] * 255.0).round() as u8,
            (color[2] * 255.0).round() as u8,
            color[3]
        )
    }
}
