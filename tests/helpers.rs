use particle_emitter::physic_engine::{EmitterConfig, ParticlePool, ParticleRecord, ParticleSystem};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Enregistrement minimal né à `t`, avec un marqueur dans `start_pos[0]`
/// pour retrouver son slot d'origine après export.
#[allow(dead_code)]
pub fn record(t: f32, tag: f32) -> ParticleRecord {
    ParticleRecord::minimal(t, [tag, 0.0, 0.0])
}

/// Vérifie l'invariant des indices du pool circulaire.
#[allow(dead_code)]
pub fn assert_ring_invariant(pool: &ParticlePool<ParticleRecord>) {
    let n = pool.capacity();
    assert!(pool.alive_count() <= n, "alive_count > capacity");
    if n > 0 {
        assert!(pool.first_alive_index() < n);
        assert!(pool.first_dead_index() < n);
        assert_eq!(
            pool.first_dead_index(),
            (pool.first_alive_index() + pool.alive_count()) % n,
            "first_dead != first_alive + alive_count (mod N)"
        );
    }
    assert_eq!(pool.export_alive_ranges().len(), pool.alive_count());
}

/// Pool N=5 dans l'état first_alive=3, first_dead=1, alive_count=3.
///
/// Slots 0..5 émis à t=0..4 (tags 0..4), les trois plus anciens retirés,
/// puis un nouveau slot 0 émis à t=10 (tag 10).
#[allow(dead_code)]
pub fn wrapped_pool() -> ParticlePool<ParticleRecord> {
    let mut pool = ParticlePool::new(5);
    for i in 0..5 {
        assert!(pool.emit(record(i as f32, i as f32)));
    }
    // Durée de vie 2s à t=4 : seuls t=0,1,2 sont expirés
    assert_eq!(pool.age_all(4.0, 2.0), 3);
    assert!(pool.emit(record(10.0, 10.0)));
    pool
}

/// Émetteur reproductible (graine fixe).
#[allow(dead_code)]
pub fn seeded_system(config: &EmitterConfig) -> ParticleSystem {
    ParticleSystem::with_rng(config, StdRng::seed_from_u64(42)).expect("valid config")
}
