use thiserror::Error;

/// Configuration d'émetteur refusée à la construction (ou au rechargement).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmitterError {
    /// Capacité nulle : le pool ne pourrait jamais rien contenir
    #[error("Invalid capacity: max_particles must be > 0, got {0}")]
    InvalidCapacity(usize),

    /// Débit nul, négatif ou non fini : la période d'émission serait indéfinie
    #[error("Invalid emission rate: particles_per_second must be > 0, got {0}")]
    InvalidEmissionRate(f32),

    /// Durée de vie nulle, négative ou non finie
    #[error("Invalid lifetime: max_lifetime must be > 0, got {0}")]
    InvalidLifetime(f32),
}

pub type Result<T> = std::result::Result<T, EmitterError>;
