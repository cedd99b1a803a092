use crate::paths::{AnoniPaths, ConfigError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

// toml_edit para escribir preservando comentarios
use toml_edit::{DocumentMut, Item};

/// Lectura/escritura de secciones `[nombre]` del fichero de configuración.
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: AnoniPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: AnoniPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &AnoniPaths {
    &self.paths
  }

  /// Como [`ConfigBackend::load_section`], pero un fichero o una sección
  /// inexistente dan `T::default()`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let Some(content) = anoni_fs::read_to_string_opt(&path)? else {
      debug!(path = %path.display(), section, "config file missing, using defaults");
      return Ok(T::default());
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    decode_section(section, table)
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = std::fs::read_to_string(&path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Documento actual, o uno vacío si el fichero no existe.
    let mut doc: DocumentMut = match anoni_fs::read_to_string_opt(&path)? {
      Some(content) => {
        content.parse::<DocumentMut>().map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?
      }
      None => DocumentMut::new(),
    };

    // 2) La sección serializada con `toml` (serde) queda como tabla sin cabecera:
    //      "foo = 1\nbar = 2\n"
    let section_str =
      toml::to_string(value).map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_doc = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?;
    let section_item = Item::Table(section_doc.as_table().clone());

    // 3) Reemplazar sólo esa sección; el resto del documento conserva comentarios.
    doc[section] = section_item;

    anoni_fs::atomic_write_str(&path, &doc.to_string())?;
    debug!(path = %path.display(), section, "config section saved");

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Limits {
    featured: u32,
    #[serde(default)]
    tags: Vec<String>,
  }

  fn backend(dir: &std::path::Path) -> TomlConfigBackend {
    TomlConfigBackend::new(AnoniPaths::at(dir))
  }

  #[test]
  fn missing_file_or_section_gives_default() {
    let tmp = tempdir().unwrap();
    let backend = backend(tmp.path());

    let limits: Limits = backend.load_section_with_default("limits").unwrap();
    assert_eq!(limits, Limits::default());

    backend.save_section("other", &Limits { featured: 1, tags: vec![] }).unwrap();
    let limits: Limits = backend.load_section_with_default("limits").unwrap();
    assert_eq!(limits, Limits::default());
  }

  #[test]
  fn strict_load_requires_the_section() {
    let tmp = tempdir().unwrap();
    let backend = backend(tmp.path());

    assert!(matches!(backend.load_section::<Limits>("limits"), Err(ConfigError::Io(_))));

    backend.save_section("other", &Limits::default()).unwrap();
    assert!(matches!(backend.load_section::<Limits>("limits"), Err(ConfigError::Other(_))));
  }

  #[test]
  fn save_then_load_section() {
    let tmp = tempdir().unwrap();
    let backend = backend(tmp.path());
    let value = Limits { featured: 6, tags: vec!["Ambient".into()] };

    backend.save_section("limits", &value).unwrap();

    assert_eq!(backend.load_section::<Limits>("limits").unwrap(), value);
  }

  #[test]
  fn saving_keeps_comments_and_other_sections() {
    let tmp = tempdir().unwrap();
    let backend = backend(tmp.path());
    let path = backend.paths().config_file();
    anoni_fs::atomic_write_str(&path, "# mantener\n[storage]\ndb_path = \"x.db\" # ruta\n").unwrap();

    backend.save_section("limits", &Limits { featured: 3, tags: vec![] }).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("# mantener"));
    assert!(written.contains("# ruta"));
    assert!(written.contains("[limits]"));
    assert!(written.contains("featured = 3"));
  }

  #[test]
  fn malformed_section_reports_decode_error() {
    let tmp = tempdir().unwrap();
    let backend = backend(tmp.path());
    anoni_fs::atomic_write_str(&backend.paths().config_file(), "[limits]\nfeatured = \"many\"\n").unwrap();

    let err = backend.load_section_with_default::<Limits>("limits").unwrap_err();
    assert!(err.to_string().contains("[limits]"));
  }
}
