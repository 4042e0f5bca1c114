// Démo headless : un émetteur piloté à pas fixe, rendu dans un renderer CPU.
use anyhow::Result;
use log::{debug, info};

use particle_emitter::physic_engine::{
    AdvanceReport, EmitterConfig, ParticleRecord, ParticleSystem,
};
use particle_emitter::renderer_engine::HeadlessRenderer;
use particle_emitter::utils::{human_bytes, show_rust_core_dependencies};
use particle_emitter::{ParticleEmitter, ParticleGraphicsRenderer};

const DEFAULT_CONFIG_PATH: &str = "assets/config/emitter.toml";
const FRAME_DT: f32 = 1.0 / 60.0;
const SIMULATED_SECONDS: f32 = 10.0;

/// Main entry point for the headless emitter demo.
fn main() -> Result<()> {
    env_logger::init();

    info!("✨ Starting particle emitter demo...");

    show_rust_core_dependencies();

    // priorité à l'argument CLI
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = EmitterConfig::from_file(&config_path).unwrap_or_default();
    info!("Emitter config loaded ({}):\n{:#?}", config_path, config);

    let mut emitter = ParticleSystem::new(&config)?;
    let mut renderer = HeadlessRenderer::new(config.max_particles);
    info!(
        "Particle buffer: {} particles, {}",
        config.max_particles,
        human_bytes(config.max_particles * ParticleRecord::STRIDE)
    );

    let frames = (SIMULATED_SECONDS / FRAME_DT) as u32;
    let mut totals = AdvanceReport::default();
    let mut now = 0.0f32;

    for frame in 0..frames {
        now += FRAME_DT;

        let report = emitter.advance(FRAME_DT, now);
        totals.retired += report.retired;
        totals.emitted += report.emitted;
        totals.dropped += report.dropped;

        let quads = emitter.draw(&mut renderer, now)?;
        debug!("frame {:>4}: {:>6} quads", frame, quads);

        if frame % 60 == 59 {
            info!(
                "t={:>5.2}s alive={:>6} emitted={} retired={} dropped={}",
                now,
                emitter.alive_count(),
                totals.emitted,
                totals.retired,
                totals.dropped
            );
        }
    }

    emitter.close();
    renderer.close();

    info!("Done: {} draw calls issued.", renderer.draw_calls());
    Ok(())
}
