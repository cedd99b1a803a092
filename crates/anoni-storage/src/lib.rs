pub mod config;
pub mod kv;
pub mod models;
pub mod schema;

use std::collections::HashSet;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use anoni_config::{CONFIG_BACKEND, TomlConfigBackend};
use anoni_core::domain::{SiteSettings, Song};
use anoni_core::ports::{SettingsStore, SongStore, StoreError};

pub use config::StorageConfig;
pub use kv::KvStore;

/// Clave del catálogo de canciones.
pub const SONGS_KEY: &str = "songs";
/// Clave de la configuración de marca.
pub const SETTINGS_KEY: &str = "settings";

/// Adaptador de persistencia del catálogo sobre [`KvStore`].
///
/// Guarda cada colección como un blob JSON bajo su clave. La normalización
/// de registros (contadores ausentes, ids repetidos, entradas ilegibles) se
/// hace aquí al cargar, no en los consumidores.
#[derive(Clone)]
pub struct LibraryStore {
  kv: KvStore,
}

impl LibraryStore {
  pub fn new(kv: KvStore) -> Self {
    Self { kv }
  }

  pub fn open(database_url: &str, journal_mode: Option<&str>) -> Result<Self, StoreError> {
    Ok(Self::new(KvStore::open(database_url, journal_mode)?))
  }

  /// Abre la base indicada en la sección `[storage]` de la configuración.
  pub fn new_from_config() -> Result<Self, StoreError> {
    Self::from_backend(&CONFIG_BACKEND)
  }

  pub fn from_backend(backend: &TomlConfigBackend) -> Result<Self, StoreError> {
    let cfg = StorageConfig::load_from(backend).map_err(|e| StoreError::Storage(e.to_string()))?;
    let path = cfg.database_path(backend.paths());
    if let Some(dir) = path.parent() {
      std::fs::create_dir_all(dir).map_err(|e| StoreError::Storage(e.to_string()))?;
    }
    Self::open(&path.to_string_lossy(), cfg.journal_mode.as_deref())
  }

  pub fn kv(&self) -> &KvStore {
    &self.kv
  }

  fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
    let Some(raw) = self.kv.get(key)? else {
      return Ok(None);
    };
    serde_json::from_str(&raw)
      .map(Some)
      .map_err(|e| StoreError::Corrupt { key: key.to_string(), reason: e.to_string() })
  }

  fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|e| StoreError::Storage(e.to_string()))?;
    self.kv.put(key, &raw)
  }
}

/// Convierte los registros crudos en canciones, descartando los ilegibles y
/// los ids repetidos (gana la primera aparición).
fn normalize_songs(raw: Vec<serde_json::Value>) -> Vec<Song> {
  let mut seen = HashSet::new();
  let mut songs = Vec::with_capacity(raw.len());

  for (index, record) in raw.into_iter().enumerate() {
    match serde_json::from_value::<Song>(record) {
      Ok(song) if seen.insert(song.id.clone()) => songs.push(song),
      Ok(song) => warn!(index, id = %song.id, "dropping duplicate song id"),
      Err(e) => warn!(index, error = %e, "dropping unreadable song record"),
    }
  }

  songs
}

impl SongStore for LibraryStore {
  fn load_songs(&self) -> Result<Vec<Song>, StoreError> {
    let raw: Vec<serde_json::Value> = self.load_json(SONGS_KEY)?.unwrap_or_default();
    Ok(normalize_songs(raw))
  }

  fn save_songs(&self, songs: &[Song]) -> Result<(), StoreError> {
    self.save_json(SONGS_KEY, songs)
  }
}

impl SettingsStore for LibraryStore {
  fn load_settings(&self) -> Result<Option<SiteSettings>, StoreError> {
    self.load_json(SETTINGS_KEY)
  }

  fn save_settings(&self, settings: &SiteSettings) -> Result<(), StoreError> {
    self.save_json(SETTINGS_KEY, settings)
  }
}
