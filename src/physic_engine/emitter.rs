use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::physic_engine::{
    config::{EmitterConfig, ParticleFeatures},
    error::{EmitterError, Result},
    particle::ParticleRecord,
    particles_pool::ParticlePool,
    types::{AdvanceReport, AliveRanges, Vec3},
    ParticleEmitter,
};
use crate::renderer_engine::{index_buffer::INDICES_PER_QUAD, ParticleGraphicsRenderer, ShaderParams};

/// Émetteur de particules : cadence d'émission, synthèse des particules et export.
///
/// Compose un `ParticlePool<ParticleRecord>` avec une horloge fournie par l'hôte
/// et un générateur aléatoire possédé (graine reproductible pour les tests).
#[derive(Debug)]
pub struct ParticleSystem<R = StdRng> {
    pool: ParticlePool<ParticleRecord>,
    config: EmitterConfig,

    seconds_per_particle: f32,
    time_since_last_emit: f32,

    /// Position courante de l'émetteur (fournie par le graphe de scène)
    emitter_origin: Vec3,
    rng: R,
}

impl ParticleSystem<StdRng> {
    /// Crée un émetteur ; le générateur est initialisé avec `config.seed` si présent.
    pub fn new(config: &EmitterConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> ParticleSystem<R> {
    /// Crée un émetteur avec un générateur fourni par l'appelant.
    ///
    /// Échoue si la capacité, le débit ou la durée de vie ne sont pas strictement positifs.
    pub fn with_rng(config: &EmitterConfig, rng: R) -> Result<Self> {
        config.validate()?;

        debug!(
            "ParticleSystem: {} particles max, {} particles/s, lifetime {}s, {:?}",
            config.max_particles, config.particles_per_second, config.max_lifetime, config.features
        );

        Ok(Self {
            pool: ParticlePool::new(config.max_particles),
            config: config.clone(),
            seconds_per_particle: config.seconds_per_particle(),
            time_since_last_emit: 0.0,
            emitter_origin: Vec3::from_array(config.emitter_origin),
            rng,
        })
    }

    /// Mise à jour d'une frame : vieillissement puis émission.
    ///
    /// Si `dt` couvre plusieurs périodes, plusieurs particules sont émises dans la
    /// même frame (rattrapage), ce qui conserve le débit moyen.
    /// Les émissions sur un pool plein sont perdues et comptées dans `dropped` ;
    /// elles ne sont pas rejouées une par une, le coût ne dépend donc pas de `dt`.
    pub fn advance(&mut self, dt: f32, now: f32) -> AdvanceReport {
        let mut report = AdvanceReport::default();

        if self.pool.alive_count() > 0 {
            report.retired = self.pool.age_all(now, self.config.max_lifetime);
        }

        if !dt.is_finite() {
            debug!("ParticleSystem::advance: ignoring non-finite dt {}", dt);
            return report;
        }

        self.time_since_last_emit += dt;

        // Périodes entières écoulées, calculées en f64 : une soustraction répétée
        // en f32 ne fait plus décroître un accumulateur trop grand devant la période.
        let acc = f64::from(self.time_since_last_emit);
        let period = f64::from(self.seconds_per_particle);
        if acc > period {
            let mut periods = (acc / period).floor();
            // Comparaison stricte : un reste égal à la période attend la frame suivante
            if periods * period >= acc {
                periods -= 1.0;
            }

            let attempts = periods as usize;
            let free_slots = self.pool.capacity() - self.pool.alive_count();
            let to_emit = attempts.min(free_slots);
            for _ in 0..to_emit {
                let record = self.spawn_record(now);
                self.pool.emit(record);
            }
            report.emitted = to_emit;
            report.dropped = attempts - to_emit;

            self.time_since_last_emit = (acc - periods * period).max(0.0).min(period) as f32;
        }

        if report.dropped > 0 {
            trace!(
                "Particle pool full ({}): {} emission(s) dropped",
                self.pool.capacity(),
                report.dropped
            );
        }

        report
    }

    /// Tire l'état initial d'une nouvelle particule.
    fn spawn_record(&mut self, now: f32) -> ParticleRecord {
        let cfg = &self.config;
        let rng = &mut self.rng;

        let start_pos =
            self.emitter_origin + random_signed_vec3(rng) * Vec3::from_array(cfg.pos_jitter);

        match cfg.features {
            ParticleFeatures::Minimal => ParticleRecord::minimal(now, start_pos.to_array()),
            ParticleFeatures::Extended => {
                let start_vel = Vec3::from_array(cfg.start_velocity)
                    + random_signed_vec3(rng) * Vec3::from_array(cfg.vel_jitter);
                let start_rotation = rand_range(rng, cfg.rotation_start[0], cfg.rotation_start[1]);
                let end_rotation = rand_range(rng, cfg.rotation_end[0], cfg.rotation_end[1]);

                ParticleRecord::extended(
                    now,
                    start_pos.to_array(),
                    start_vel.to_array(),
                    start_rotation,
                    end_rotation,
                )
            }
        }
    }

    pub fn export_alive_ranges(&self) -> AliveRanges {
        self.pool.export_alive_ranges()
    }

    /// Copie dense des vivants dans `dst` (voir `ParticlePool::copy_alive_into`).
    pub fn copy_alive_into(&self, dst: &mut [ParticleRecord]) -> usize {
        self.pool.copy_alive_into(dst)
    }

    /// Uniformes du draw pour l'instant `now`.
    pub fn shader_params(&self, now: f32) -> ShaderParams {
        ShaderParams::from_config(&self.config, now)
    }

    /// Upload des vivants puis draw indexé de `alive_count` quads.
    ///
    /// Séquence : map → copie(s) dans l'ordre des slots → unmap → draw.
    /// Aucun draw n'est émis quand rien n'est vivant.
    pub fn draw<G>(&self, renderer: &mut G, now: f32) -> anyhow::Result<usize>
    where
        G: ParticleGraphicsRenderer + ?Sized,
    {
        if renderer.capacity() < self.pool.capacity() {
            renderer.recreate_buffers(self.pool.capacity())?;
        }

        let ranges = self.pool.export_alive_ranges();
        if ranges.is_split() {
            trace!("Alive arc wraps around the pool: two-part upload {:?}", ranges);
        }

        let written = {
            let mapped = renderer.map_particle_buffer()?;
            self.pool.copy_alive_into(mapped)
        };
        renderer.unmap_particle_buffer(written);

        if written == 0 {
            return Ok(0);
        }

        renderer.draw_indexed(written * INDICES_PER_QUAD, &self.shader_params(now))?;
        Ok(written)
    }

    pub fn max_particles(&self) -> usize {
        self.pool.capacity()
    }

    /// Change la capacité en reconstruisant le pool (les particules en vol sont perdues).
    ///
    /// Retourne `Ok(false)` si la capacité est inchangée.
    pub fn set_max_particles(&mut self, max_particles: usize) -> Result<bool> {
        if max_particles == 0 {
            return Err(EmitterError::InvalidCapacity(max_particles));
        }
        if max_particles == self.pool.capacity() {
            return Ok(false);
        }

        info!(
            "Rebuilding particle pool due to max_particles change: {} -> {}",
            self.pool.capacity(),
            max_particles
        );
        self.pool = ParticlePool::new(max_particles);
        self.config.max_particles = max_particles;
        Ok(true)
    }

    /// Applique une nouvelle configuration.
    ///
    /// Le pool n'est reconstruit que si `max_particles` change ; le temps
    /// d'émission accumulé est conservé. Retourne `true` en cas de reconstruction.
    pub fn reload_config(&mut self, new_config: &EmitterConfig) -> Result<bool> {
        new_config.validate()?;

        let rebuilt = self.set_max_particles(new_config.max_particles)?;
        self.config = new_config.clone();
        self.seconds_per_particle = new_config.seconds_per_particle();
        self.emitter_origin = Vec3::from_array(new_config.emitter_origin);
        Ok(rebuilt)
    }

    pub fn emitter_origin(&self) -> Vec3 {
        self.emitter_origin
    }

    /// Déplace l'émetteur ; les particules déjà émises gardent leur position de départ.
    pub fn set_emitter_origin(&mut self, origin: Vec3) {
        self.emitter_origin = origin;
    }

    pub fn alive_count(&self) -> usize {
        self.pool.alive_count()
    }

    pub fn pool(&self) -> &ParticlePool<ParticleRecord> {
        &self.pool
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn seconds_per_particle(&self) -> f32 {
        self.seconds_per_particle
    }

    pub fn time_since_last_emit(&self) -> f32 {
        self.time_since_last_emit
    }
}

// ==================================
// Trait ParticleEmitter
// ==================================
impl<R: Rng> ParticleEmitter for ParticleSystem<R> {
    fn advance(&mut self, dt: f32, now: f32) -> AdvanceReport {
        self.advance(dt, now)
    }

    fn alive_count(&self) -> usize {
        self.pool.alive_count()
    }

    fn draw(&self, renderer: &mut dyn ParticleGraphicsRenderer, now: f32) -> anyhow::Result<usize> {
        self.draw(renderer, now)
    }

    fn reload_config(&mut self, config: &EmitterConfig) -> Result<bool> {
        self.reload_config(config)
    }

    fn get_config(&self) -> &EmitterConfig {
        &self.config
    }

    fn close(&mut self) {
        self.pool.clear();
        self.time_since_last_emit = 0.0;
        debug!("ParticleSystem closed and reset.");
    }
}

// ---------------------------
// Fonctions utilitaires
// ---------------------------

/// Tirage uniforme entre `min` et `max` (accepte `min > max` et `min == max`).
fn rand_range(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    let t: f32 = rng.random();
    min + t * (max - min)
}

/// Vecteur dont chaque composante est tirée dans [-1, 1).
fn random_signed_vec3(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rand_range(rng, -1.0, 1.0),
        rand_range(rng, -1.0, 1.0),
        rand_range(rng, -1.0, 1.0),
    )
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait ParticleSystemTestHelpers {
    /// Arme l'accumulateur pour qu'une particule sorte au prochain `advance`, même avec `dt == 0`.
    fn force_next_emit(&mut self);
}

#[cfg(any(test, feature = "test_helpers"))]
impl<R: Rng> ParticleSystemTestHelpers for ParticleSystem<R> {
    fn force_next_emit(&mut self) {
        self.time_since_last_emit = self.seconds_per_particle * 1.5;
    }
}
