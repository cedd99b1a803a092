use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::trace;

/// Escribe `contents` en `path` sin dejar nunca un fichero a medias.
///
/// Se escribe primero a un `.tmp` hermano, se sincroniza y se renombra
/// encima del destino. Crea el directorio padre si no existe.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }

  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  trace!(path = %path.display(), bytes = contents.len(), "atomic write");
  Ok(())
}

/// Lee un fichero de texto; `None` si no existe.
pub fn read_to_string_opt(path: &Path) -> io::Result<Option<String>> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(Some(content)),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e),
  }
}
