use serde::Serialize;
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::domain::{SiteSettings, Song, SongDraft, SongId, SongPatch};
use crate::errors::CoreError;
use crate::ports::{SettingsStore, SongStore};
use crate::query::{self, CatalogTotals};
use crate::services::{mutate_song, repo_err};

/// Fila del ranking de popularidad tal y como la pinta el panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
  pub song: Song,
  pub score: u64,
  /// Ancho relativo de la barra, en `[0.0, 1.0]`.
  pub progress: f64,
}

/// Servicio del panel de administración: altas, ediciones, bajas, ranking y
/// configuración de marca.
pub struct AdminService<S, T>
where
  S: SongStore,
  T: SettingsStore,
{
  songs: S,
  settings: T,
  config: CatalogConfig,
}

impl<S, T> AdminService<S, T>
where
  S: SongStore,
  T: SettingsStore,
{
  pub fn new(songs: S, settings: T, config: CatalogConfig) -> Self {
    Self { songs, settings, config }
  }

  // -------- SONGS --------

  /// Valida el borrador, le asigna un id nuevo y lo añade al final.
  pub fn add_song(&self, draft: SongDraft) -> Result<Song, CoreError> {
    let song = draft.into_song()?;
    let mut songs = self.songs.load_songs().map_err(repo_err)?;
    songs.push(song.clone());
    self.songs.save_songs(&songs).map_err(repo_err)?;

    info!(id = %song.id, title = %song.title, "song added");
    Ok(song)
  }

  pub fn update_song(&self, id: &SongId, patch: SongPatch) -> Result<Song, CoreError> {
    if patch.is_empty() {
      return Err(CoreError::InvalidInput("nothing to update".into()));
    }
    let song = mutate_song(&self.songs, id, |song| patch.apply(song))?;
    info!(%id, "song updated");
    Ok(song)
  }

  /// Elimina la canción y la devuelve.
  pub fn remove_song(&self, id: &SongId) -> Result<Song, CoreError> {
    let mut songs = self.songs.load_songs().map_err(repo_err)?;
    let index = songs.iter().position(|s| &s.id == id).ok_or_else(|| CoreError::NotFound(id.clone()))?;
    let removed = songs.remove(index);
    self.songs.save_songs(&songs).map_err(repo_err)?;

    info!(%id, title = %removed.title, "song removed");
    Ok(removed)
  }

  /// Pone a cero escuchas, descargas y "me gusta".
  pub fn reset_stats(&self, id: &SongId) -> Result<Song, CoreError> {
    let song = mutate_song(&self.songs, id, |song| {
      song.reset_stats();
      Ok(())
    })?;
    info!(%id, "stats reset");
    Ok(song)
  }

  pub fn set_featured(&self, id: &SongId, featured: bool) -> Result<Song, CoreError> {
    mutate_song(&self.songs, id, |song| {
      song.is_featured = featured;
      Ok(())
    })
  }

  /// Añade las canciones cuyo id todavía no existe. Devuelve cuántas entraron.
  pub fn import(&self, incoming: Vec<Song>) -> Result<usize, CoreError> {
    let mut songs = self.songs.load_songs().map_err(repo_err)?;
    let before = songs.len();

    for song in incoming {
      if songs.iter().any(|s| s.id == song.id) {
        debug!(id = %song.id, "skipping existing song");
        continue;
      }
      songs.push(song);
    }

    let added = songs.len() - before;
    if added > 0 {
      self.songs.save_songs(&songs).map_err(repo_err)?;
    }
    info!(added, "import finished");
    Ok(added)
  }

  // -------- ANALYTICS --------

  /// Ranking de interacción con los pesos configurados. `None` usa
  /// `ranking_limit`.
  pub fn ranking(&self, limit: Option<usize>) -> Result<Vec<RankEntry>, CoreError> {
    let songs = self.songs.load_songs().map_err(repo_err)?;
    let mut ranking = query::rank_by_engagement(&songs, &self.config.weights);
    ranking.truncate(limit.unwrap_or(self.config.ranking_limit));

    Ok(
      ranking
        .with_progress()
        .map(|(entry, progress)| RankEntry { song: entry.song.clone(), score: entry.score, progress })
        .collect(),
    )
  }

  pub fn totals(&self) -> Result<CatalogTotals, CoreError> {
    let songs = self.songs.load_songs().map_err(repo_err)?;
    Ok(query::totals(&songs))
  }

  // -------- SETTINGS --------

  pub fn settings(&self) -> Result<SiteSettings, CoreError> {
    Ok(self.settings.load_settings().map_err(repo_err)?.unwrap_or_default())
  }

  pub fn update_settings(&self, settings: &SiteSettings) -> Result<(), CoreError> {
    settings.validate()?;
    self.settings.save_settings(settings).map_err(repo_err)?;
    info!(site = %settings.site_name, "settings saved");
    Ok(())
  }
}
