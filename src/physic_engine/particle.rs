use bytemuck::{Pod, Zeroable};

/// Donnée minimale dont le pool a besoin pour vieillir une particule.
///
/// Le `ParticlePool` est générique sur la forme de l'enregistrement :
/// il suffit de connaître l'instant de naissance pour retirer les particules expirées.
pub trait TimedParticle {
    /// Instant d'émission (secondes, horloge absolue de la simulation).
    fn birth_time(&self) -> f32;

    /// Âge de la particule à l'instant `now`.
    #[inline]
    fn age(&self, now: f32) -> f32 {
        now - self.birth_time()
    }
}

/// Enregistrement d'une particule tel qu'il est envoyé au GPU.
///
/// Écrit une seule fois à l'émission, puis uniquement lu pendant le vieillissement.
/// Toute l'animation (taille, couleur, rotation, accélération) est évaluée côté shader
/// à partir de ces données de naissance.
///
/// # Layout mémoire GPU
///
/// | Champ            | Type       | Offset |
/// |------------------|------------|--------|
/// | `birth_time`     | `f32`      | 0      |
/// | `start_pos`      | `[f32; 3]` | 4      |
/// | `start_vel`      | `[f32; 3]` | 16     |
/// | `start_rotation` | `f32`      | 28     |
/// | `end_rotation`   | `f32`      | 32     |
/// | `_padding`       | `[f32; 3]` | 36     |
///
/// **Stride total** : `12 × f32 = 48 octets` (multiple de 16 pour un structured buffer).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleRecord {
    pub birth_time: f32,
    pub start_pos: [f32; 3],

    // Champs du jeu de fonctionnalités étendu (laissés à zéro sinon)
    pub start_vel: [f32; 3],
    pub start_rotation: f32,
    pub end_rotation: f32,

    _padding: [f32; 3],
}

impl ParticleRecord {
    /// Enregistrement du jeu minimal : instant de naissance et position de départ.
    pub fn minimal(birth_time: f32, start_pos: [f32; 3]) -> Self {
        Self {
            birth_time,
            start_pos,
            ..Self::default()
        }
    }

    /// Enregistrement complet (vitesse et rotations incluses).
    pub fn extended(
        birth_time: f32,
        start_pos: [f32; 3],
        start_vel: [f32; 3],
        start_rotation: f32,
        end_rotation: f32,
    ) -> Self {
        Self {
            birth_time,
            start_pos,
            start_vel,
            start_rotation,
            end_rotation,
            _padding: [0.0; 3],
        }
    }
}

impl TimedParticle for ParticleRecord {
    #[inline(always)]
    fn birth_time(&self) -> f32 {
        self.birth_time
    }
}
