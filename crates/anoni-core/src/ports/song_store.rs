use crate::domain::Song;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("storage error: {0}")]
  Storage(String),
  #[error("corrupt entry {key}: {reason}")]
  Corrupt { key: String, reason: String },
}

/// Port de persistencia del catálogo.
///
/// La colección se guarda y se carga entera, como un único blob. El orden
/// es el de inserción: las canciones nuevas se añaden al final, de modo que
/// `SortMode::Recent` las muestra primero.
pub trait SongStore {
  /// Colección completa ya normalizada. Un almacén vacío devuelve `vec![]`.
  fn load_songs(&self) -> Result<Vec<Song>, StoreError>;
  fn save_songs(&self, songs: &[Song]) -> Result<(), StoreError>;
}

impl<T: SongStore + ?Sized> SongStore for &T {
  fn load_songs(&self) -> Result<Vec<Song>, StoreError> {
    (**self).load_songs()
  }

  fn save_songs(&self, songs: &[Song]) -> Result<(), StoreError> {
    (**self).save_songs(songs)
  }
}
