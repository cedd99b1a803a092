// crates/anoni-core/src/errors.rs
use thiserror::Error;

use crate::domain::SongId;

/// Error genérico del núcleo de Anoni.
///
/// Las capas superiores (CLI, etc.) deberían mapear este error
/// a mensajes de usuario o logs. El motor de consultas nunca lo produce:
/// sólo los servicios que tocan el almacenamiento.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("repository error: {0}")]
  Repository(String),

  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("song not found: {0}")]
  NotFound(SongId),
}
