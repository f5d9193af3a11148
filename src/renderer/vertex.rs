//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Convert 8-bit RGBA into the float color the vertices carry
pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::rgba8;

    pub const BACKGROUND: [f32; 4] = rgba8(15, 15, 25, 255);
    pub const PLAYER: [f32; 4] = rgba8(60, 220, 120, 255);
    pub const OBSTACLE: [f32; 4] = rgba8(230, 60, 80, 255);

    /// Full-screen tints per phase
    pub const MENU_TINT: [f32; 4] = rgba8(0, 0, 0, 120);
    pub const PAUSE_TINT: [f32; 4] = rgba8(0, 0, 0, 120);
    pub const GAME_OVER_TINT: [f32; 4] = rgba8(120, 0, 0, 160);
}
