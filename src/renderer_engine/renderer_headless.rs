use anyhow::bail;
use log::{debug, info};

use crate::physic_engine::ParticleRecord;
use crate::renderer_engine::index_buffer::{QuadIndexBuffer, INDICES_PER_QUAD};
use crate::renderer_engine::particle_renderer::ParticleGraphicsRenderer;
use crate::renderer_engine::types::ShaderParams;
use crate::utils::human_bytes;

/// Dernier draw reçu par le renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub index_count: usize,
    pub params: ShaderParams,
}

impl DrawCall {
    pub fn quad_count(&self) -> usize {
        self.index_count / INDICES_PER_QUAD
    }
}

/// Renderer sans GPU : les "buffers" sont de simples tableaux en mémoire.
///
/// Il applique la même discipline qu'un vrai backend (map exclusif, pas de draw
/// pendant un map, draw borné par la capacité) et garde une trace du dernier
/// draw, ce qui en fait le collaborateur de rendu du binaire de démo et des tests.
#[derive(Debug)]
pub struct HeadlessRenderer {
    particle_buffer: Vec<ParticleRecord>,
    index_buffer: QuadIndexBuffer,

    mapped: bool,
    written: usize,

    last_draw: Option<DrawCall>,
    draw_calls: u64,
}

impl HeadlessRenderer {
    pub fn new(capacity: usize) -> Self {
        let renderer = Self {
            particle_buffer: vec![ParticleRecord::default(); capacity],
            index_buffer: QuadIndexBuffer::new(capacity),
            mapped: false,
            written: 0,
            last_draw: None,
            draw_calls: 0,
        };
        debug!(
            "HeadlessRenderer buffers: particles {}, indices {}",
            human_bytes(capacity * ParticleRecord::STRIDE),
            human_bytes(renderer.index_buffer.as_bytes().len())
        );
        renderer
    }

    /// Contenu valide du buffer de particules (dernier upload).
    pub fn uploaded(&self) -> &[ParticleRecord] {
        &self.particle_buffer[..self.written]
    }

    pub fn index_buffer(&self) -> &QuadIndexBuffer {
        &self.index_buffer
    }

    pub fn last_draw(&self) -> Option<&DrawCall> {
        self.last_draw.as_ref()
    }

    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    pub fn is_mapped(&self) -> bool {
        self.mapped
    }
}

impl ParticleGraphicsRenderer for HeadlessRenderer {
    fn recreate_buffers(&mut self, capacity: usize) -> anyhow::Result<()> {
        if self.mapped {
            bail!("cannot recreate buffers while the particle buffer is mapped");
        }
        self.particle_buffer = vec![ParticleRecord::default(); capacity];
        self.index_buffer = QuadIndexBuffer::new(capacity);
        self.written = 0;
        info!(
            "HeadlessRenderer buffers recreated for {} particles ({})",
            capacity,
            human_bytes(capacity * ParticleRecord::STRIDE)
        );
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.particle_buffer.len()
    }

    fn map_particle_buffer(&mut self) -> anyhow::Result<&mut [ParticleRecord]> {
        if self.mapped {
            bail!("particle buffer is already mapped");
        }
        self.mapped = true;
        // Sémantique "write discard" : l'ancien contenu n'est plus valide
        self.written = 0;
        Ok(self.particle_buffer.as_mut_slice())
    }

    fn unmap_particle_buffer(&mut self, written: usize) {
        self.mapped = false;
        self.written = written.min(self.particle_buffer.len());
    }

    fn draw_indexed(&mut self, index_count: usize, params: &ShaderParams) -> anyhow::Result<()> {
        if self.mapped {
            bail!("draw issued while the particle buffer is still mapped");
        }
        if index_count > self.index_buffer.as_slice().len() {
            bail!(
                "draw of {} indices exceeds index buffer size {}",
                index_count,
                self.index_buffer.as_slice().len()
            );
        }
        self.last_draw = Some(DrawCall {
            index_count,
            params: *params,
        });
        self.draw_calls += 1;
        Ok(())
    }

    fn close(&mut self) {
        self.particle_buffer.clear();
        self.index_buffer = QuadIndexBuffer::new(0);
        self.mapped = false;
        self.written = 0;
        debug!("HeadlessRenderer closed.");
    }
}
