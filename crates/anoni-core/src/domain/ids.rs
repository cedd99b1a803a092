use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador opaco de una canción.
///
/// Es estable durante toda la vida del registro y sirve como clave de
/// igualdad y de enlace directo. Los ids nuevos son UUID v4, pero se aceptan
/// tal cual los ids heredados (`"1"`, marcas de tiempo, etc.).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(String);

impl SongId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    SongId(Uuid::new_v4().to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Default for SongId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<String> for SongId {
  fn from(s: String) -> Self {
    SongId(s)
  }
}

impl From<&str> for SongId {
  fn from(s: &str) -> Self {
    SongId(s.to_owned())
  }
}

impl From<Uuid> for SongId {
  fn from(u: Uuid) -> Self {
    SongId(u.to_string())
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fresh_ids_are_unique_uuids() {
    let a = SongId::new();
    let b = SongId::new();

    assert_ne!(a, b);
    assert!(Uuid::parse_str(a.as_str()).is_ok());
  }

  #[test]
  fn legacy_ids_are_kept_verbatim() {
    let id = SongId::from("1715000000000");
    assert_eq!(id.to_string(), "1715000000000");
  }
}
