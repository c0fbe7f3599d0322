#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

pub const TRIANGLE_VERTICES: &[Vertex] = &[
    Vertex::new(-0.5, -0.5),
    Vertex::new(0.0, 0.5),
    Vertex::new(0.5, -0.5),
];

pub const QUAD_VERTICES: &[Vertex] = &[
    Vertex::new(-0.5, -0.5),
    Vertex::new(0.5, -0.5),
    Vertex::new(0.5, 0.5),
    Vertex::new(-0.5, 0.5),
];

pub const QUAD_INDICES: &[u32] = &[0, 1, 2, 2, 3, 0];

/// Static vertex data for one draw call, with optional indices.
#[derive(Copy, Clone, Debug)]
pub struct Geometry {
    pub vertices: &'static [Vertex],
    pub indices: Option<&'static [u32]>,
}

impl Geometry {
    pub const TRIANGLE: Geometry = Geometry {
        vertices: TRIANGLE_VERTICES,
        indices: None,
    };

    pub const QUAD: Geometry = Geometry {
        vertices: QUAD_VERTICES,
        indices: Some(QUAD_INDICES),
    };

    /// Number of vertices (or indices, when indexed) the draw call consumes.
    pub fn draw_count(&self) -> u32 {
        match self.indices {
            Some(indices) => indices.len() as u32,
            None => self.vertices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_two_packed_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 2 * std::mem::size_of::<f32>());
        assert_eq!(Vertex::layout().array_stride, 8);
    }

    #[test]
    fn buffer_bytes_match_literal_arrays() {
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(TRIANGLE_VERTICES).len(), 6 * 4);
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(QUAD_VERTICES).len(), 8 * 4);
        assert_eq!(bytemuck::cast_slice::<u32, u8>(QUAD_INDICES).len(), 6 * 4);
    }

    #[test]
    fn quad_indices_stay_in_range() {
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
    }

    #[test]
    fn draw_counts() {
        assert_eq!(Geometry::TRIANGLE.draw_count(), 3);
        assert_eq!(Geometry::QUAD.draw_count(), 6);
    }
}
