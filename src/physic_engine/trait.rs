use crate::physic_engine::config::EmitterConfig;
use crate::physic_engine::error::Result;
use crate::physic_engine::types::AdvanceReport;
use crate::renderer_engine::ParticleGraphicsRenderer;

/// Interface commune des émetteurs pilotés par l'hôte, une fois par frame.
///
/// L'hôte appelle `advance` puis `draw`, strictement dans cet ordre et sur le
/// même thread.
pub trait ParticleEmitter {
    /// Vieillit les particules puis émet selon la cadence configurée.
    ///
    /// `dt` : durée de la frame, `now` : horloge absolue (secondes).
    fn advance(&mut self, dt: f32, now: f32) -> AdvanceReport;

    /// Nombre de particules actuellement vivantes.
    fn alive_count(&self) -> usize;

    /// Exporte les vivants vers le renderer et lance le draw.
    /// Retourne le nombre de quads dessinés.
    fn draw(&self, renderer: &mut dyn ParticleGraphicsRenderer, now: f32) -> anyhow::Result<usize>;

    /// Applique une nouvelle configuration ; retourne `true` si le pool a été reconstruit.
    fn reload_config(&mut self, config: &EmitterConfig) -> Result<bool>;

    fn get_config(&self) -> &EmitterConfig;

    /// Vide l'émetteur. Par défaut, ne fait rien.
    fn close(&mut self) {}
}
