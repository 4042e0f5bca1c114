pub mod r#trait;
pub use r#trait::ParticleEmitter;

pub mod types;
pub use self::types::{AdvanceReport, AliveRanges, Vec3};

pub mod particle;
pub use self::particle::{ParticleRecord, TimedParticle};

pub mod particles_pool;
pub use self::particles_pool::ParticlePool;

pub mod config;
pub use self::config::{EmitterConfig, EmitterConfigBuilder, ParticleFeatures};

pub mod error;
pub use self::error::EmitterError;

pub mod emitter;
pub use self::emitter::ParticleSystem;
