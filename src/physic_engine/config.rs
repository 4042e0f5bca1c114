use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::physic_engine::error::EmitterError;

/// Jeu de champs enregistrés par particule.
///
/// Les deux variantes partagent exactement la même logique de pool :
/// seule la synthèse des particules change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleFeatures {
    /// Instant de naissance + position de départ
    Minimal,
    /// + vitesse initiale et rotations de début/fin
    #[default]
    Extended,
}

/// Paramètres d'un émetteur.
///
/// Tous les champs sont optionnels dans le fichier TOML : les valeurs absentes
/// reprennent celles de `Default`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Builder)]
#[builder(pattern = "owned", default, build_fn(error = "anyhow::Error"))]
#[serde(default)]
pub struct EmitterConfig {
    pub max_particles: usize,
    pub particles_per_second: f32,
    pub max_lifetime: f32,
    pub features: ParticleFeatures,

    pub emitter_origin: [f32; 3],

    // Uniformes d'animation (évaluées côté shader)
    pub start_size: f32,
    pub end_size: f32,
    pub start_color: [f32; 4],
    pub end_color: [f32; 4],
    pub acceleration: [f32; 3],

    // Distributions de spawn
    pub pos_jitter: [f32; 3],
    pub start_velocity: [f32; 3],
    pub vel_jitter: [f32; 3],
    /// (min, max) de la rotation initiale, en radians
    pub rotation_start: [f32; 2],
    /// (min, max) de la rotation finale, en radians
    pub rotation_end: [f32; 2],

    /// Graine du générateur ; `None` = graine tirée du générateur du thread
    #[builder(setter(strip_option))]
    pub seed: Option<u64>,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            max_particles: 1000,
            particles_per_second: 100.0,
            max_lifetime: 5.0,
            features: ParticleFeatures::Extended,
            emitter_origin: [0.0, 1.0, 0.0],
            start_size: 1.0,
            end_size: 2.0,
            start_color: [1.0; 4],
            end_color: [1.0; 4],
            acceleration: [0.0; 3],
            pos_jitter: [0.0; 3],
            start_velocity: [0.0, 1.0, 0.0],
            vel_jitter: [0.0; 3],
            rotation_start: [0.0; 2],
            rotation_end: [0.0; 2],
            seed: None,
        }
    }
}

impl EmitterConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Vérifie les préconditions de construction d'un émetteur.
    pub fn validate(&self) -> Result<(), EmitterError> {
        if self.max_particles == 0 {
            return Err(EmitterError::InvalidCapacity(self.max_particles));
        }
        if !(self.particles_per_second.is_finite() && self.particles_per_second > 0.0) {
            return Err(EmitterError::InvalidEmissionRate(self.particles_per_second));
        }
        if !(self.max_lifetime.is_finite() && self.max_lifetime > 0.0) {
            return Err(EmitterError::InvalidLifetime(self.max_lifetime));
        }
        Ok(())
    }

    /// Période d'émission dérivée du débit.
    #[inline]
    pub fn seconds_per_particle(&self) -> f32 {
        1.0 / self.particles_per_second
    }
}
