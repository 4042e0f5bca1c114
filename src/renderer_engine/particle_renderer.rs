use crate::physic_engine::ParticleRecord;
use crate::renderer_engine::types::ShaderParams;

/// Frontière avec le backend de rendu.
///
/// Le cœur ne fait que produire des données (plages, enregistrements, uniformes) ;
/// le backend possède les ressources GPU, leur mapping et les appels de draw.
///
/// Discipline d'accès au buffer exporté, dans une frame :
/// 1. `map_particle_buffer` (accès exclusif en écriture),
/// 2. copie(s) dans l'ordre des slots,
/// 3. `unmap_particle_buffer`,
/// 4. `draw_indexed`.
///
/// Le slice rendu par `map_particle_buffer` emprunte `self` en `&mut` :
/// il est impossible de dessiner tant qu'il est vivant.
pub trait ParticleGraphicsRenderer {
    /// Recrée le buffer de particules et l'index buffer pour une nouvelle capacité.
    fn recreate_buffers(&mut self, capacity: usize) -> anyhow::Result<()>;

    /// Capacité (en particules) des buffers actuels.
    fn capacity(&self) -> usize;

    /// Donne un accès exclusif en écriture au buffer de particules.
    fn map_particle_buffer(&mut self) -> anyhow::Result<&mut [ParticleRecord]>;

    /// Rend le buffer au GPU ; `written` = nombre d'enregistrements valides en tête.
    fn unmap_particle_buffer(&mut self, written: usize);

    /// Dessine `index_count` indices de la liste de quads statique.
    fn draw_indexed(&mut self, index_count: usize, params: &ShaderParams) -> anyhow::Result<()>;

    /// Libère les ressources.
    fn close(&mut self) {}
}
