pub mod admin_service;
pub mod catalog_service;

pub use admin_service::{AdminService, RankEntry};
pub use catalog_service::CatalogService;

use crate::domain::{Song, SongId};
use crate::errors::CoreError;
use crate::ports::{SongStore, StoreError};

fn repo_err(e: StoreError) -> CoreError {
  CoreError::Repository(e.to_string())
}

/// Carga la colección, aplica `f` a la canción `id` y la vuelve a guardar.
fn mutate_song<S, F>(store: &S, id: &SongId, f: F) -> Result<Song, CoreError>
where
  S: SongStore,
  F: FnOnce(&mut Song) -> Result<(), CoreError>,
{
  let mut songs = store.load_songs().map_err(repo_err)?;
  let song = songs.iter_mut().find(|s| &s.id == id).ok_or_else(|| CoreError::NotFound(id.clone()))?;

  f(song)?;
  let updated = song.clone();

  store.save_songs(&songs).map_err(repo_err)?;
  Ok(updated)
}
