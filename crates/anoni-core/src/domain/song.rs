use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::ids::SongId;
use crate::errors::CoreError;

/// La Canción (Song): una pista de audio del catálogo.
///
/// Los contadores sólo se leen desde el motor de consultas; los incrementos
/// los hacen los servicios ante eventos de reproducción, descarga o "me gusta".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
  /// Identificador único de la canción dentro del catálogo.
  pub id: SongId,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub artist: String,
  #[serde(default)]
  pub genre: String,
  /// Localizador de la portada. Opaco para el motor.
  #[serde(default)]
  pub cover_url: String,
  /// Localizador del audio. Opaco para el motor.
  #[serde(default)]
  pub audio_url: String,
  /// Duración sólo para mostrar, p. ej. `"6:12"`.
  #[serde(default)]
  pub duration: String,
  #[serde(default, deserialize_with = "counter")]
  pub plays: u64,
  #[serde(default, deserialize_with = "counter")]
  pub downloads: u64,
  #[serde(default, deserialize_with = "counter")]
  pub likes: u64,
  /// Marcada a mano por un administrador para la sección destacada.
  #[serde(default, deserialize_with = "flag")]
  pub is_featured: bool,
}

/// Valor numérico crudo tal y como llega del almacén.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCounter {
  Unsigned(u64),
  Signed(i64),
  Float(f64),
}

/// Los registros persistidos pueden traer `null`, negativos o decimales.
/// Todo eso se normaliza aquí, una sola vez, al cargar. Los enteros se leen
/// sin pasar por `f64`, así que no pierden precisión.
fn counter<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Option::<RawCounter>::deserialize(deserializer)? {
    Some(RawCounter::Unsigned(n)) => n,
    Some(RawCounter::Float(v)) if v.is_finite() && v > 0.0 => v as u64,
    Some(RawCounter::Signed(_) | RawCounter::Float(_)) | None => 0,
  })
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl Song {
  pub fn record_play(&mut self) {
    self.plays = self.plays.saturating_add(1);
  }

  pub fn record_download(&mut self) {
    self.downloads = self.downloads.saturating_add(1);
  }

  pub fn like(&mut self) {
    self.likes = self.likes.saturating_add(1);
  }

  /// Retira un "me gusta". Nunca baja de cero.
  pub fn unlike(&mut self) {
    self.likes = self.likes.saturating_sub(1);
  }

  pub fn reset_stats(&mut self) {
    self.plays = 0;
    self.downloads = 0;
    self.likes = 0;
  }
}

/// Formulario de alta de una canción desde el panel de administración.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SongDraft {
  pub title: String,
  pub artist: String,
  pub genre: String,
  pub cover_url: String,
  pub audio_url: String,
  pub duration: String,
  /// Valores semilla opcionales; si no se indican, arrancan en cero.
  pub plays: u64,
  pub downloads: u64,
  pub likes: u64,
  pub is_featured: bool,
}

impl Default for SongDraft {
  fn default() -> Self {
    SongDraft {
      title: String::new(),
      artist: String::new(),
      genre: "Electronic".to_string(),
      cover_url: String::new(),
      audio_url: String::new(),
      duration: "3:00".to_string(),
      plays: 0,
      downloads: 0,
      likes: 0,
      is_featured: false,
    }
  }
}

impl SongDraft {
  /// Título y audio son obligatorios; el resto puede quedar vacío.
  pub fn validate(&self) -> Result<(), CoreError> {
    if self.title.trim().is_empty() {
      return Err(CoreError::InvalidInput("title is required".into()));
    }
    if self.audio_url.trim().is_empty() {
      return Err(CoreError::InvalidInput("audio url is required".into()));
    }
    Ok(())
  }

  /// Valida el borrador y lo convierte en una canción con id nuevo.
  pub fn into_song(self) -> Result<Song, CoreError> {
    self.validate()?;

    Ok(Song {
      id: SongId::new(),
      title: self.title,
      artist: self.artist,
      genre: self.genre,
      cover_url: self.cover_url,
      audio_url: self.audio_url,
      duration: self.duration,
      plays: self.plays,
      downloads: self.downloads,
      likes: self.likes,
      is_featured: self.is_featured,
    })
  }
}

/// Edición parcial: sólo se tocan los campos presentes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SongPatch {
  pub title: Option<String>,
  pub artist: Option<String>,
  pub genre: Option<String>,
  pub cover_url: Option<String>,
  pub audio_url: Option<String>,
  pub duration: Option<String>,
  pub plays: Option<u64>,
  pub downloads: Option<u64>,
  pub likes: Option<u64>,
  pub is_featured: Option<bool>,
}

impl SongPatch {
  pub fn is_empty(&self) -> bool {
    *self == SongPatch::default()
  }

  /// Aplica la edición. Si algún campo obligatorio llega vacío, la canción
  /// queda intacta.
  pub fn apply(self, song: &mut Song) -> Result<(), CoreError> {
    if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
      return Err(CoreError::InvalidInput("title is required".into()));
    }
    if self.audio_url.as_deref().is_some_and(|a| a.trim().is_empty()) {
      return Err(CoreError::InvalidInput("audio url is required".into()));
    }

    if let Some(title) = self.title {
      song.title = title;
    }
    if let Some(audio_url) = self.audio_url {
      song.audio_url = audio_url;
    }
    if let Some(artist) = self.artist {
      song.artist = artist;
    }
    if let Some(genre) = self.genre {
      song.genre = genre;
    }
    if let Some(cover_url) = self.cover_url {
      song.cover_url = cover_url;
    }
    if let Some(duration) = self.duration {
      song.duration = duration;
    }
    if let Some(plays) = self.plays {
      song.plays = plays;
    }
    if let Some(downloads) = self.downloads {
      song.downloads = downloads;
    }
    if let Some(likes) = self.likes {
      song.likes = likes;
    }
    if let Some(is_featured) = self.is_featured {
      song.is_featured = is_featured;
    }
    Ok(())
  }
}
