use particle_emitter::physic_engine::{
    EmitterConfig, EmitterError, ParticleEmitter, ParticleFeatures, ParticleSystem, Vec3,
};
mod helpers;
use helpers::seeded_system;

fn config_with_rate(particles_per_second: f32) -> EmitterConfig {
    EmitterConfig {
        particles_per_second,
        ..EmitterConfig::default()
    }
}

// ==================================
// 1. Construction
// ==================================

#[test]
fn test_new_system_is_empty() {
    let config = EmitterConfig::default();
    let system = ParticleSystem::new(&config).expect("default config is valid");
    assert_eq!(system.alive_count(), 0);
    assert_eq!(system.max_particles(), config.max_particles);
    assert_eq!(system.time_since_last_emit(), 0.0);
    assert!(system.export_alive_ranges().is_empty());
}

#[test]
fn test_invalid_configurations_are_rejected() {
    let mut config = EmitterConfig::default();
    config.max_particles = 0;
    assert_eq!(
        ParticleSystem::new(&config).unwrap_err(),
        EmitterError::InvalidCapacity(0)
    );

    assert_eq!(
        ParticleSystem::new(&config_with_rate(0.0)).unwrap_err(),
        EmitterError::InvalidEmissionRate(0.0)
    );
    assert_eq!(
        ParticleSystem::new(&config_with_rate(-10.0)).unwrap_err(),
        EmitterError::InvalidEmissionRate(-10.0)
    );

    let mut config = EmitterConfig::default();
    config.max_lifetime = 0.0;
    assert_eq!(
        ParticleSystem::new(&config).unwrap_err(),
        EmitterError::InvalidLifetime(0.0)
    );
}

// ==================================
// 2. Cadence d'émission
// ==================================

#[test]
fn test_cadence_catch_up_in_one_frame() {
    // 10 particules/s → période 0.1s ; 0.35s d'un coup → 3 particules
    let mut system = seeded_system(&config_with_rate(10.0));
    let report = system.advance(0.35, 1.0);

    assert_eq!(report.emitted, 3);
    assert_eq!(report.dropped, 0);
    assert_eq!(system.alive_count(), 3);
    assert!((system.time_since_last_emit() - 0.05).abs() < 1e-5);
}

#[test]
fn test_exact_period_does_not_emit() {
    // Comparaison stricte : un accumulateur égal à la période n'émet pas
    let mut system = seeded_system(&config_with_rate(4.0));
    let report = system.advance(1.0, 1.0);
    assert_eq!(report.emitted, 3);
    assert_eq!(system.time_since_last_emit(), 0.25);

    let report = system.advance(0.0, 1.0);
    assert_eq!(report.attempts(), 0);
}

#[test]
fn test_average_rate_is_preserved_over_variable_frames() {
    let mut system = seeded_system(&EmitterConfig {
        max_particles: 10_000,
        particles_per_second: 50.0,
        max_lifetime: 1000.0,
        ..EmitterConfig::default()
    });

    let frames = [0.016, 0.033, 0.1, 0.004, 0.25, 0.016, 0.5, 0.081];
    let mut now = 0.0;
    let mut emitted = 0;
    for _ in 0..10 {
        for dt in frames {
            now += dt;
            emitted += system.advance(dt, now).emitted;
        }
    }

    // 10 × 1.0s à 50/s
    assert!((49 * 10..=50 * 10).contains(&emitted), "emitted = {}", emitted);
}

#[test]
fn test_birth_time_is_frame_time() {
    let mut system = seeded_system(&config_with_rate(4.0));
    system.advance(0.5, 7.0);
    let births: Vec<f32> = system.pool().iter_alive().map(|p| p.birth_time).collect();
    assert_eq!(births, vec![7.0]);
}

// ==================================
// 3. Vieillissement et backpressure
// ==================================

#[test]
fn test_particles_expire_after_lifetime() {
    let mut system = seeded_system(&EmitterConfig {
        particles_per_second: 4.0,
        max_lifetime: 1.0,
        ..EmitterConfig::default()
    });

    let report = system.advance(0.5, 0.5);
    assert_eq!(report.emitted, 1);

    let report = system.advance(0.0, 1.49);
    assert_eq!(report.retired, 0);

    let report = system.advance(0.0, 1.5);
    assert_eq!(report.retired, 1);
    assert_eq!(system.alive_count(), 0);
}

#[test]
fn test_full_pool_drops_emissions() {
    let mut system = seeded_system(&EmitterConfig {
        max_particles: 5,
        particles_per_second: 4.0,
        max_lifetime: 100.0,
        ..EmitterConfig::default()
    });

    // 3.0s à 0.25s de période → 11 tentatives (comparaison stricte)
    let report = system.advance(3.0, 3.0);
    assert_eq!(report.emitted, 5);
    assert_eq!(report.dropped, 6);
    assert_eq!(system.alive_count(), 5);
    assert!(system.pool().is_full());
}

#[test]
fn test_long_stall_counts_every_period_without_hanging() {
    // 1000/s pendant 10s : 0.001f32 est un peu au-dessus de 1ms → 9999 périodes
    let mut system = seeded_system(&EmitterConfig {
        max_particles: 16,
        particles_per_second: 1000.0,
        max_lifetime: 1000.0,
        ..EmitterConfig::default()
    });
    let report = system.advance(10.0, 10.0);
    assert_eq!(report.emitted, 16);
    assert_eq!(report.attempts(), 9999);
    assert!(system.time_since_last_emit() <= system.seconds_per_particle());

    // 100 000/s pendant 300s : l'accumulateur f32 dépasse de loin la période
    let mut system = seeded_system(&EmitterConfig {
        max_particles: 16,
        particles_per_second: 100_000.0,
        max_lifetime: 1000.0,
        ..EmitterConfig::default()
    });
    let report = system.advance(300.0, 300.0);
    assert_eq!(report.emitted, 16);
    assert_eq!(report.dropped, 30_000_000 - 16);
    assert!(system.time_since_last_emit() >= 0.0);
    assert!(system.time_since_last_emit() <= system.seconds_per_particle());
    assert!(system.pool().is_full());

    // Les frames suivantes reprennent la cadence normale
    let report = system.advance(0.0, 300.0);
    assert_eq!(report.attempts(), 0);
}

#[test]
fn test_capacity_one_drops_second_emission() {
    let mut system = seeded_system(&EmitterConfig {
        max_particles: 1,
        particles_per_second: 4.0,
        ..EmitterConfig::default()
    });

    let report = system.advance(0.6, 0.6);
    assert_eq!(report.attempts(), 2);
    assert_eq!(report.emitted, 1);
    assert_eq!(system.alive_count(), 1);
}

// ==================================
// 4. Synthèse des particules
// ==================================

#[test]
fn test_minimal_features_leave_motion_fields_zero() {
    let mut system = seeded_system(&EmitterConfig {
        features: ParticleFeatures::Minimal,
        particles_per_second: 10.0,
        rotation_start: [1.0, 2.0],
        rotation_end: [3.0, 4.0],
        ..EmitterConfig::default()
    });
    system.advance(1.0, 1.0);

    assert!(system.alive_count() > 0);
    for p in system.pool().iter_alive() {
        assert_eq!(p.start_pos, [0.0, 1.0, 0.0]);
        assert_eq!(p.start_vel, [0.0; 3]);
        assert_eq!(p.start_rotation, 0.0);
        assert_eq!(p.end_rotation, 0.0);
    }
}

#[test]
fn test_extended_features_sample_configured_ranges() {
    let mut system = seeded_system(&EmitterConfig {
        features: ParticleFeatures::Extended,
        particles_per_second: 100.0,
        start_velocity: [0.0, 2.0, 0.0],
        vel_jitter: [0.5, 0.0, 0.5],
        rotation_start: [-1.0, 1.0],
        rotation_end: [5.0, 6.0],
        ..EmitterConfig::default()
    });
    system.advance(1.0, 1.0);

    assert!(system.alive_count() > 90);
    for p in system.pool().iter_alive() {
        assert!((-0.5..=0.5).contains(&p.start_vel[0]));
        assert_eq!(p.start_vel[1], 2.0);
        assert!((-0.5..=0.5).contains(&p.start_vel[2]));
        assert!((-1.0..=1.0).contains(&p.start_rotation));
        assert!((5.0..=6.0).contains(&p.end_rotation));
    }
}

#[test]
fn test_same_seed_same_particles() {
    let config = EmitterConfig {
        pos_jitter: [1.0, 1.0, 1.0],
        vel_jitter: [1.0, 1.0, 1.0],
        rotation_start: [0.0, 6.28],
        seed: Some(1234),
        ..EmitterConfig::default()
    };
    let mut a = ParticleSystem::new(&config).unwrap();
    let mut b = ParticleSystem::new(&config).unwrap();

    a.advance(0.5, 0.5);
    b.advance(0.5, 0.5);

    assert_eq!(a.pool().slots(), b.pool().slots());
}

#[test]
fn test_moving_the_emitter_only_affects_new_particles() {
    let mut system = seeded_system(&config_with_rate(4.0));
    system.advance(0.5, 0.5);

    system.set_emitter_origin(Vec3::new(5.0, 0.0, 0.0));
    system.advance(0.25, 0.75);

    let positions: Vec<[f32; 3]> = system.pool().iter_alive().map(|p| p.start_pos).collect();
    assert_eq!(positions, vec![[0.0, 1.0, 0.0], [5.0, 0.0, 0.0]]);
    assert_eq!(system.emitter_origin(), Vec3::new(5.0, 0.0, 0.0));
}

// ==================================
// 5. Capacité et rechargement
// ==================================

#[test]
fn test_set_max_particles_rebuilds_pool() {
    let mut system = seeded_system(&config_with_rate(10.0));
    system.advance(1.0, 1.0);
    assert!(system.alive_count() > 0);

    assert_eq!(system.set_max_particles(3), Ok(true));
    assert_eq!(system.max_particles(), 3);
    assert_eq!(system.pool().capacity(), 3);
    assert_eq!(system.config().max_particles, 3);
    assert_eq!(system.alive_count(), 0);

    // Même capacité : rien à faire
    assert_eq!(system.set_max_particles(3), Ok(false));
    // Capacité nulle refusée, pool intact
    assert_eq!(
        system.set_max_particles(0),
        Err(EmitterError::InvalidCapacity(0))
    );
    assert_eq!(system.max_particles(), 3);

    system.advance(1.0, 2.0);
    assert_eq!(system.alive_count(), 3);
}

#[test]
fn test_reload_config_without_capacity_change() {
    let mut system = seeded_system(&config_with_rate(10.0));
    system.advance(0.35, 1.0);

    let new_config = EmitterConfig {
        particles_per_second: 4.0,
        ..system.config().clone()
    };
    assert_eq!(system.reload_config(&new_config), Ok(false));
    assert_eq!(system.seconds_per_particle(), 0.25);
    assert_eq!(system.alive_count(), 3);
}

#[test]
fn test_reload_config_with_capacity_change_and_rejection() {
    let mut system = seeded_system(&config_with_rate(10.0));

    let bigger = EmitterConfig {
        max_particles: 4096,
        ..system.config().clone()
    };
    assert_eq!(system.reload_config(&bigger), Ok(true));
    assert_eq!(system.max_particles(), 4096);

    let invalid = EmitterConfig {
        max_lifetime: -2.0,
        ..bigger.clone()
    };
    assert!(system.reload_config(&invalid).is_err());
    assert_eq!(system.config(), &bigger);
}

// ==================================
// 6. Trait ParticleEmitter
// ==================================

#[test]
fn test_drive_through_trait_object() {
    let mut system = seeded_system(&config_with_rate(10.0));
    let emitter: &mut dyn ParticleEmitter = &mut system;

    let report = emitter.advance(0.35, 1.0);
    assert_eq!(report.emitted, 3);
    assert_eq!(emitter.alive_count(), 3);
    assert_eq!(emitter.get_config().particles_per_second, 10.0);

    emitter.close();
    assert_eq!(emitter.alive_count(), 0);
}
