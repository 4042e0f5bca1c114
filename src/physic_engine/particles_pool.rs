#[cfg(debug_assertions)]
use log::debug;

use crate::physic_engine::particle::TimedParticle;
use crate::physic_engine::types::AliveRanges;

/// Pool circulaire de particules à capacité fixe.
///
/// # Rôle
/// Le `ParticlePool` maintient un tableau contigu de `capacity` slots et trois indices :
/// - `first_alive_index` : la particule vivante la plus ancienne,
/// - `first_dead_index` : le prochain slot à recycler,
/// - `alive_count` : la longueur de l'arc vivant.
///
/// Invariant : `first_dead_index == (first_alive_index + alive_count) % capacity`.
///
/// L'émission écrit toujours en `first_dead_index` et ne réordonne jamais rien :
/// les vivants sont donc triés par date de naissance (FIFO), et le vieillissement
/// n'a besoin de regarder que la tête de l'arc.
///
/// Seuls `retire_oldest_if_expired`/`age_all`/`clear` déplacent `first_alive_index`,
/// seuls `emit`/`clear` déplacent `first_dead_index`.
#[derive(Debug, Clone)]
pub struct ParticlePool<P> {
    /// Stockage de tous les slots (vivants et morts)
    particles: Box<[P]>,

    alive_count: usize,
    first_alive_index: usize,
    first_dead_index: usize,
}

impl<P> ParticlePool<P>
where
    P: TimedParticle + Copy + Default,
{
    /// Crée un pool vide de `capacity` slots.
    ///
    /// Une capacité nulle est acceptée : le pool reste alors vide pour toujours
    /// (toute émission échoue, l'export est vide).
    pub fn new(capacity: usize) -> Self {
        let particles = vec![P::default(); capacity].into_boxed_slice();

        #[cfg(debug_assertions)]
        debug!(
            "ParticlePool initialized with {} slots ({} bytes)",
            capacity,
            capacity * std::mem::size_of::<P>()
        );

        Self {
            particles,
            alive_count: 0,
            first_alive_index: 0,
            first_dead_index: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive_count
    }

    #[inline]
    pub fn first_alive_index(&self) -> usize {
        self.first_alive_index
    }

    #[inline]
    pub fn first_dead_index(&self) -> usize {
        self.first_dead_index
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alive_count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.alive_count == self.capacity()
    }

    /// Vue en lecture seule sur tout le tableau (slots morts compris).
    pub fn slots(&self) -> &[P] {
        &self.particles
    }

    /// Retire la particule la plus ancienne si son âge a atteint `max_lifetime`.
    ///
    /// Ne regarde que le slot `first_alive_index`.
    /// Complexité : **O(1)**.
    pub fn retire_oldest_if_expired(&mut self, now: f32, max_lifetime: f32) -> bool {
        if self.alive_count == 0 {
            return false;
        }

        if self.particles[self.first_alive_index].age(now) < max_lifetime {
            return false;
        }

        self.first_alive_index = (self.first_alive_index + 1) % self.capacity();
        self.alive_count -= 1;
        true
    }

    /// Retire toutes les particules expirées, en partant de la tête de l'arc.
    ///
    /// Les naissances étant ordonnées, on s'arrête au premier survivant :
    /// le résultat est le même qu'un parcours complet de l'arc vivant.
    /// Retourne le nombre de particules retirées.
    pub fn age_all(&mut self, now: f32, max_lifetime: f32) -> usize {
        let mut retired = 0;
        while self.retire_oldest_if_expired(now, max_lifetime) {
            retired += 1;
        }
        retired
    }

    /// Écrit `record` dans le plus ancien slot mort.
    ///
    /// Retourne `false` sans rien modifier si le pool est plein : l'émission est
    /// simplement perdue (pas de file d'attente).
    /// Complexité : **O(1)**.
    pub fn emit(&mut self, record: P) -> bool {
        if self.is_full() {
            return false;
        }

        self.particles[self.first_dead_index] = record;
        self.first_dead_index = (self.first_dead_index + 1) % self.capacity();
        self.alive_count += 1;
        true
    }

    /// Décrit les slots vivants sous forme d'une ou deux plages contiguës.
    pub fn export_alive_ranges(&self) -> AliveRanges {
        let capacity = self.capacity();

        if self.alive_count == 0 {
            AliveRanges::empty()
        } else if self.alive_count == capacity {
            // Tout est vivant, peu importe où pointent les indices
            AliveRanges::single(0..capacity)
        } else if self.first_alive_index < self.first_dead_index {
            AliveRanges::single(self.first_alive_index..self.first_dead_index)
        } else if self.first_dead_index == 0 {
            // L'arc s'arrête pile sur le dernier slot : rien à copier depuis le début
            AliveRanges::single(self.first_alive_index..capacity)
        } else {
            // L'arc boucle : [0, first_dead) puis [first_alive, N)
            AliveRanges::split(0..self.first_dead_index, self.first_alive_index..capacity)
        }
    }

    /// Copie les vivants, dans l'ordre des slots, au début de `dst`.
    ///
    /// Cas bouclé : deux copies, `[0, first_dead)` vers `dst[0..first_dead]`
    /// puis `[first_alive, N)` juste derrière.
    /// Si `dst` est trop court, seul le préfixe qui tient est copié.
    /// Retourne le nombre d'enregistrements écrits.
    pub fn copy_alive_into(&self, dst: &mut [P]) -> usize {
        let mut written = 0;
        for range in self.export_alive_ranges().iter() {
            let room = dst.len() - written;
            if room == 0 {
                break;
            }
            let n = range.len().min(room);
            dst[written..written + n]
                .copy_from_slice(&self.particles[range.start..range.start + n]);
            written += n;
        }
        written
    }

    /// Itère sur les vivants du plus ancien au plus récent.
    pub fn iter_alive(&self) -> impl Iterator<Item = &P> + '_ {
        let capacity = self.capacity();
        (0..self.alive_count)
            .map(move |i| &self.particles[(self.first_alive_index + i) % capacity])
    }

    /// Oublie toutes les particules en vol et remet les indices à zéro.
    pub fn clear(&mut self) {
        self.alive_count = 0;
        self.first_alive_index = 0;
        self.first_dead_index = 0;
    }
}
