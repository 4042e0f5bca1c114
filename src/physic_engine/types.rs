use std::ops::Range;

pub use glam::Vec3;

// ------------------------
// AliveRanges
// ------------------------

/// Plage(s) de slots vivants à copier, dans l'ordre des slots.
///
/// - aucun vivant : `primary` vide, `wrapped == None`
/// - arc contigu (ou pool plein) : une seule plage
/// - arc qui boucle : `primary = [0, first_dead)` puis `wrapped = [first_alive, N)`
///
/// La destination est toujours dense à partir de 0 : `primary` y est copiée en premier,
/// `wrapped` juste derrière.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliveRanges {
    pub primary: Range<usize>,
    pub wrapped: Option<Range<usize>>,
}

impl AliveRanges {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(range: Range<usize>) -> Self {
        Self {
            primary: range,
            wrapped: None,
        }
    }

    pub fn split(primary: Range<usize>, wrapped: Range<usize>) -> Self {
        Self {
            primary,
            wrapped: Some(wrapped),
        }
    }

    /// Nombre total de slots couverts (= nombre de particules vivantes).
    pub fn len(&self) -> usize {
        self.primary.len() + self.wrapped.as_ref().map_or(0, |r| r.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_split(&self) -> bool {
        self.wrapped.is_some()
    }

    /// Itère sur les plages non vides, dans l'ordre de copie.
    pub fn iter(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        std::iter::once(self.primary.clone())
            .chain(self.wrapped.iter().cloned())
            .filter(|r| !r.is_empty())
    }
}

// ------------------------
// AdvanceReport
// ------------------------

/// Bilan d'un appel à `advance` : ce que la frame a retiré, émis ou perdu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdvanceReport {
    pub retired: usize,
    pub emitted: usize,
    /// Émissions ignorées parce que le pool était plein.
    pub dropped: usize,
}

impl AdvanceReport {
    /// Nombre de tentatives d'émission pendant la frame.
    pub fn attempts(&self) -> usize {
        self.emitted + self.dropped
    }
}
