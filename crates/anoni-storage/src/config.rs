use anoni_config::{AnoniPaths, CONFIG_BACKEND, ConfigBackend, ConfigError, TomlConfigBackend};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const SECTION: &str = "storage";
const DEFAULT_DB_FILE: &str = "anoni.db";

/// Sección `[storage]` del fichero de configuración.
///
/// ```toml
/// [storage]
/// db_path = "catalogo.db"   # relativa al directorio de datos
/// journal_mode = "WAL"
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
  /// Fichero SQLite. Una ruta relativa cuelga de `AnoniPaths::data_dir`.
  pub db_path: PathBuf,
  /// Valor del pragma `journal_mode`; sin valor se deja el de SQLite.
  pub journal_mode: Option<String>,
}

impl Default for StorageConfig {
  fn default() -> Self {
    StorageConfig { db_path: PathBuf::from(DEFAULT_DB_FILE), journal_mode: Some("WAL".to_string()) }
  }
}

impl StorageConfig {
  /// Lee `[storage]` del fichero global y lo reescribe completo.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: StorageConfig = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  /// Ruta final de la base, resuelta contra el directorio de datos.
  pub fn database_path(&self, paths: &AnoniPaths) -> PathBuf {
    if self.db_path.is_absolute() { self.db_path.clone() } else { paths.data_dir.join(&self.db_path) }
  }
}
