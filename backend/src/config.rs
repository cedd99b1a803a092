use anoni_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, TomlConfigBackend};
use anoni_core::CatalogConfig;

const SECTION: &str = "catalog";

/// Loading of the `[catalog]` section.
///
/// `CatalogConfig` lives in the core crate, which knows nothing about the
/// config file, so the file binding is attached here.
pub trait CatalogConfigExt: Sized {
  fn load() -> Result<Self, ConfigError>;
  fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError>;
}

impl CatalogConfigExt for CatalogConfig {
  /// Reads `[catalog]` from the global config file, filling in defaults, and
  /// writes the completed section back so users can discover every knob.
  fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: CatalogConfig = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }
}
