pub mod particle_renderer;
pub use self::particle_renderer::ParticleGraphicsRenderer;

pub mod renderer_headless;
pub use self::renderer_headless::{DrawCall, HeadlessRenderer};

pub mod index_buffer;
pub use self::index_buffer::{build_quad_indices, QuadIndexBuffer};

pub mod types;
pub use self::types::{ParticleAttribute, ShaderParams};
