/// Nombre d'indices par quad (deux triangles).
pub const INDICES_PER_QUAD: usize = 6;

/// Construit la liste d'indices de `capacity` quads.
///
/// Quad `i` : `{4i, 4i+1, 4i+2, 4i, 4i+2, 4i+3}`.
pub fn build_quad_indices(capacity: usize) -> Vec<u32> {
    (0..capacity as u32)
        .flat_map(|quad| {
            let v = quad * 4;
            [v, v + 1, v + 2, v, v + 2, v + 3]
        })
        .collect()
}

/// Index buffer statique : construit une fois pour la capacité du pool,
/// jamais modifié ensuite.
#[derive(Debug, Clone)]
pub struct QuadIndexBuffer {
    indices: Box<[u32]>,
}

impl QuadIndexBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            indices: build_quad_indices(capacity).into_boxed_slice(),
        }
    }

    /// Nombre de quads adressables.
    pub fn quad_capacity(&self) -> usize {
        self.indices.len() / INDICES_PER_QUAD
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
