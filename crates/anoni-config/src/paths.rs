use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Directorios de Anoni: configuración (`anoni.toml`) y datos (base SQLite).
#[derive(Debug, Clone)]
pub struct AnoniPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
}

impl AnoniPaths {
  /// `ANONI_BASE_DIR` tiene prioridad (modo portable); si no, los
  /// directorios estándar del sistema.
  pub fn new() -> Result<Self, ConfigError> {
    let paths = if let Ok(env_base) = std::env::var("ANONI_BASE_DIR") {
      Self::at(env_base)
    } else {
      let proj_dirs = ProjectDirs::from("com", "anoni", "anoni").ok_or(ConfigError::Directories)?;
      Self {
        base_dir: proj_dirs.config_dir().to_path_buf(),
        config_dir: proj_dirs.config_dir().to_path_buf(),
        data_dir: proj_dirs.data_dir().to_path_buf(),
      }
    };

    std::fs::create_dir_all(&paths.config_dir)?;
    std::fs::create_dir_all(&paths.data_dir)?;

    Ok(paths)
  }

  /// Estructura portable bajo `base`, sin tocar el disco.
  pub fn at(base: impl AsRef<Path>) -> Self {
    let base = base.as_ref().to_path_buf();
    Self { config_dir: base.join("config"), data_dir: base.join("data"), base_dir: base }
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("anoni.toml")
  }
}
