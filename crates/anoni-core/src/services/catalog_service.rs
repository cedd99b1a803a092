use tracing::debug;

use crate::config::CatalogConfig;
use crate::domain::{Song, SongId};
use crate::errors::CoreError;
use crate::ports::SongStore;
use crate::query::{self, Direction, SortMode};
use crate::services::{mutate_song, repo_err};

/// Servicio de la galería pública: consultas y eventos de escucha.
///
/// Cada consulta carga una instantánea fresca del almacén y la pasa por el
/// motor de consultas; no se guarda nada entre llamadas.
pub struct CatalogService<S>
where
  S: SongStore,
{
  store: S,
  config: CatalogConfig,
}

impl<S> CatalogService<S>
where
  S: SongStore,
{
  pub fn new(store: S, config: CatalogConfig) -> Self {
    Self { store, config }
  }

  pub fn config(&self) -> &CatalogConfig {
    &self.config
  }

  // -------- QUERY (read) --------

  pub fn browse(&self, search: &str, sort: SortMode) -> Result<Vec<Song>, CoreError> {
    let songs = self.store.load_songs().map_err(repo_err)?;
    let view: Vec<Song> = query::filter_and_sort(&songs, search, sort).into_iter().cloned().collect();
    debug!(search, %sort, total = songs.len(), matched = view.len(), "browse");
    Ok(view)
  }

  pub fn featured(&self) -> Result<Vec<Song>, CoreError> {
    let songs = self.store.load_songs().map_err(repo_err)?;
    Ok(query::select_featured(&songs, self.config.featured_limit).into_iter().cloned().collect())
  }

  pub fn song(&self, id: &SongId) -> Result<Song, CoreError> {
    let songs = self.store.load_songs().map_err(repo_err)?;
    songs.into_iter().find(|s| &s.id == id).ok_or_else(|| CoreError::NotFound(id.clone()))
  }

  /// Siguiente canción de la cola (orden del catálogo, con vuelta).
  pub fn next(&self, current: &SongId) -> Result<Song, CoreError> {
    self.step(current, Direction::Next)
  }

  pub fn previous(&self, current: &SongId) -> Result<Song, CoreError> {
    self.step(current, Direction::Previous)
  }

  fn step(&self, current: &SongId, direction: Direction) -> Result<Song, CoreError> {
    let songs = self.store.load_songs().map_err(repo_err)?;
    query::adjacent(&songs, current, direction).cloned().ok_or_else(|| CoreError::NotFound(current.clone()))
  }

  pub fn genres(&self) -> &[String] {
    &self.config.genres
  }

  // -------- COMMAND (write) --------

  pub fn record_play(&self, id: &SongId) -> Result<Song, CoreError> {
    debug!(%id, "play");
    mutate_song(&self.store, id, |song| {
      song.record_play();
      Ok(())
    })
  }

  pub fn record_download(&self, id: &SongId) -> Result<Song, CoreError> {
    debug!(%id, "download");
    mutate_song(&self.store, id, |song| {
      song.record_download();
      Ok(())
    })
  }

  pub fn like(&self, id: &SongId) -> Result<Song, CoreError> {
    mutate_song(&self.store, id, |song| {
      song.like();
      Ok(())
    })
  }

  pub fn unlike(&self, id: &SongId) -> Result<Song, CoreError> {
    mutate_song(&self.store, id, |song| {
      song.unlike();
      Ok(())
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::query::fixtures::song;
  use crate::services::memory::MemoryStore;

  fn service(store: &MemoryStore) -> CatalogService<&MemoryStore> {
    CatalogService::new(store, CatalogConfig::default())
  }

  fn ids(songs: &[Song]) -> Vec<&str> {
    songs.iter().map(|s| s.id.as_str()).collect()
  }

  #[test]
  fn browse_runs_the_query_engine_over_the_store() {
    let store = MemoryStore::with_songs(vec![song("1", "Zigue", 50, 0, 0), song("2", "Jungle", 80, 0, 0)]);
    let catalog = service(&store);

    assert_eq!(ids(&catalog.browse("", SortMode::Recent).unwrap()), ["2", "1"]);
    assert_eq!(ids(&catalog.browse("zig", SortMode::MostPlayed).unwrap()), ["1"]);
  }

  #[test]
  fn featured_uses_configured_limit() {
    let songs = (0..10).map(|i| song(&i.to_string(), "S", i, 0, 0)).collect();
    let store = MemoryStore::with_songs(songs);
    let catalog = CatalogService::new(&store, CatalogConfig { featured_limit: 3, ..Default::default() });

    assert_eq!(ids(&catalog.featured().unwrap()), ["9", "8", "7"]);
  }

  #[test]
  fn counters_are_persisted() {
    let store = MemoryStore::with_songs(vec![song("1", "Zigue", 0, 0, 0)]);
    let catalog = service(&store);
    let id = SongId::from("1");

    catalog.record_play(&id).unwrap();
    catalog.record_play(&id).unwrap();
    catalog.record_download(&id).unwrap();
    let liked = catalog.like(&id).unwrap();

    assert_eq!((liked.plays, liked.downloads, liked.likes), (2, 1, 1));
    assert_eq!(store.songs.borrow()[0].plays, 2);
    assert_eq!(store.saves.get(), 4);
  }

  #[test]
  fn unlike_clamps_at_zero() {
    let store = MemoryStore::with_songs(vec![song("1", "Zigue", 0, 0, 0)]);
    let song = service(&store).unlike(&"1".into()).unwrap();
    assert_eq!(song.likes, 0);
  }

  #[test]
  fn unknown_song_is_not_found() {
    let store = MemoryStore::with_songs(vec![song("1", "Zigue", 0, 0, 0)]);
    let catalog = service(&store);

    assert!(matches!(catalog.record_play(&"nope".into()), Err(CoreError::NotFound(_))));
    assert!(matches!(catalog.song(&"nope".into()), Err(CoreError::NotFound(_))));
    assert_eq!(store.saves.get(), 0);
  }

  #[test]
  fn next_and_previous_wrap() {
    let store = MemoryStore::with_songs(vec![song("a", "A", 0, 0, 0), song("b", "B", 0, 0, 0)]);
    let catalog = service(&store);

    assert_eq!(catalog.next(&"b".into()).unwrap().id.as_str(), "a");
    assert_eq!(catalog.previous(&"b".into()).unwrap().id.as_str(), "a");
  }

  #[test]
  fn storage_failures_surface_as_repository_errors() {
    let store = MemoryStore::default();
    store.fail.set(true);

    assert!(matches!(service(&store).browse("", SortMode::Recent), Err(CoreError::Repository(_))));
  }
}
