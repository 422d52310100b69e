//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Screen-space vertex with position and color
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

    /// Size of one vertex in a GPU buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 24);
        let v = [Vertex::new(1.0, 2.0, [0.5, 0.5, 0.5, 1.0])];
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
    }
}
