use bytemuck::{Pod, Zeroable};
use memoffset::offset_of;

use crate::physic_engine::{EmitterConfig, ParticleRecord};

/// Bloc d'uniformes envoyé une fois par draw.
///
/// Ces paramètres sont constants pour un émetteur (sauf `current_time`) :
/// le vertex shader en déduit taille, couleur et position de chaque particule
/// à partir de son âge.
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ start_color (vec4)                           │  0
/// │ end_color   (vec4)                           │ 16
/// │ acceleration (vec3)        │ current_time    │ 32
/// │ start_size │ end_size │ lifetime │ padding   │ 48
/// └──────────────────────────────────────────────┘
/// Taille totale : 64 octets
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ShaderParams {
    pub start_color: [f32; 4],
    pub end_color: [f32; 4],
    pub acceleration: [f32; 3],
    pub current_time: f32,
    pub start_size: f32,
    pub end_size: f32,
    pub lifetime: f32,
    _padding: f32,
}

impl ShaderParams {
    pub fn from_config(config: &EmitterConfig, current_time: f32) -> Self {
        Self {
            start_color: config.start_color,
            end_color: config.end_color,
            acceleration: config.acceleration,
            current_time,
            start_size: config.start_size,
            end_size: config.end_size,
            lifetime: config.max_lifetime,
            _padding: 0.0,
        }
    }
}

/// Description d'un champ de `ParticleRecord` dans le structured buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleAttribute {
    pub name: &'static str,
    /// Décalage en octets depuis le début de l'enregistrement
    pub offset: usize,
    /// Nombre de `f32`
    pub components: usize,
}

impl ParticleRecord {
    /// Stride d'un enregistrement dans le buffer GPU.
    pub const STRIDE: usize = std::mem::size_of::<ParticleRecord>();

    /// Layout des champs, pour la déclaration du buffer côté backend.
    pub fn attribute_layout() -> [ParticleAttribute; 5] {
        [
            ParticleAttribute {
                name: "birth_time",
                offset: offset_of!(ParticleRecord, birth_time),
                components: 1,
            },
            ParticleAttribute {
                name: "start_pos",
                offset: offset_of!(ParticleRecord, start_pos),
                components: 3,
            },
            ParticleAttribute {
                name: "start_vel",
                offset: offset_of!(ParticleRecord, start_vel),
                components: 3,
            },
            ParticleAttribute {
                name: "start_rotation",
                offset: offset_of!(ParticleRecord, start_rotation),
                components: 1,
            },
            ParticleAttribute {
                name: "end_rotation",
                offset: offset_of!(ParticleRecord, end_rotation),
                components: 1,
            },
        ]
    }
}
