// Physic engine : pool circulaire + émetteur
pub mod physic_engine;
pub use physic_engine::{ParticleEmitter, ParticlePool, ParticleSystem};

// Renderer engine : frontière avec le backend GPU
pub mod renderer_engine;
pub use renderer_engine::ParticleGraphicsRenderer;

// Utilities
pub mod utils;
