use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::domain::Song;

/// Pesos de la puntuación de interacción.
///
/// `score = plays * w.plays + downloads * w.downloads + likes * w.likes`.
/// Un peso a cero deja fuera ese contador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementWeights {
  pub plays: u64,
  pub downloads: u64,
  pub likes: u64,
}

impl Default for EngagementWeights {
  /// Una descarga vale el doble y un "me gusta" el triple que una escucha.
  fn default() -> Self {
    EngagementWeights { plays: 1, downloads: 2, likes: 3 }
  }
}

impl EngagementWeights {
  pub const fn new(plays: u64, downloads: u64, likes: u64) -> Self {
    EngagementWeights { plays, downloads, likes }
  }

  pub const fn plays_only() -> Self {
    Self::new(1, 0, 0)
  }

  pub const fn plays_and_downloads() -> Self {
    Self::new(1, 1, 0)
  }

  /// Satura en `u64::MAX` en lugar de desbordar.
  pub fn score(&self, song: &Song) -> u64 {
    song
      .plays
      .saturating_mul(self.plays)
      .saturating_add(song.downloads.saturating_mul(self.downloads))
      .saturating_add(song.likes.saturating_mul(self.likes))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedSong<'a> {
  pub song: &'a Song,
  pub score: u64,
}

/// Resultado de [`rank_by_engagement`]: canciones de mayor a menor puntuación.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ranking<'a> {
  entries: Vec<RankedSong<'a>>,
}

impl<'a> Ranking<'a> {
  pub fn entries(&self) -> &[RankedSong<'a>] {
    &self.entries
  }

  pub fn truncate(&mut self, len: usize) {
    self.entries.truncate(len);
  }

  /// Puntuación de la primera entrada; `1` si el ranking está vacío.
  pub fn max_score(&self) -> u64 {
    self.entries.first().map_or(1, |top| top.score)
  }

  /// Fracción de la barra de progreso de una puntuación respecto al máximo.
  ///
  /// La primera entrada siempre da exactamente `1.0`, incluso cuando todas
  /// las puntuaciones son cero.
  pub fn progress_fraction(&self, score: u64) -> f64 {
    match self.max_score() {
      0 => 1.0,
      max => score as f64 / max as f64,
    }
  }

  /// Itera las entradas junto con su fracción de progreso.
  pub fn with_progress(&self) -> impl Iterator<Item = (&RankedSong<'a>, f64)> + '_ {
    self.entries.iter().map(move |entry| (entry, self.progress_fraction(entry.score)))
  }
}

/// Ordena por puntuación descendente; los empates respetan el orden de entrada.
pub fn rank_by_engagement<'a>(songs: &'a [Song], weights: &EngagementWeights) -> Ranking<'a> {
  let mut entries: Vec<RankedSong<'a>> =
    songs.iter().map(|song| RankedSong { song, score: weights.score(song) }).collect();
  entries.sort_by_key(|entry| Reverse(entry.score));
  Ranking { entries }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::query::fixtures::song;

  fn order(ranking: &Ranking<'_>) -> Vec<String> {
    ranking.entries().iter().map(|e| e.song.id.to_string()).collect()
  }

  #[test]
  fn default_weights_score() {
    let s = song("x", "X", 10, 5, 2);
    assert_eq!(EngagementWeights::default().score(&s), 26);
  }

  #[test]
  fn ranks_by_weighted_sum() {
    let songs = vec![song("1", "Zigue", 50, 10, 5), song("2", "Jungle", 80, 2, 1)];

    let ranking = rank_by_engagement(&songs, &EngagementWeights::default());

    assert_eq!(order(&ranking), ["2", "1"]);
    assert_eq!(ranking.entries()[0].score, 87);
    assert_eq!(ranking.entries()[1].score, 85);
  }

  #[test]
  fn other_weight_vectors_are_the_same_formula() {
    let songs = vec![song("a", "A", 10, 0, 100), song("b", "B", 5, 20, 0), song("c", "C", 12, 0, 0)];

    let plays = rank_by_engagement(&songs, &EngagementWeights::plays_only());
    assert_eq!(order(&plays), ["c", "a", "b"]);

    let plays_downloads = rank_by_engagement(&songs, &EngagementWeights::plays_and_downloads());
    assert_eq!(order(&plays_downloads), ["b", "c", "a"]);

    let full = rank_by_engagement(&songs, &EngagementWeights::default());
    assert_eq!(order(&full), ["a", "b", "c"]);
  }

  #[test]
  fn ties_keep_input_order() {
    let songs = vec![song("a", "A", 3, 0, 0), song("b", "B", 1, 1, 0), song("c", "C", 0, 0, 1)];
    let ranking = rank_by_engagement(&songs, &EngagementWeights::default());
    assert_eq!(order(&ranking), ["a", "b", "c"]);
  }

  #[test]
  fn top_entry_progress_is_one() {
    let songs = vec![song("a", "A", 10, 0, 0), song("b", "B", 40, 0, 0)];
    let ranking = rank_by_engagement(&songs, &EngagementWeights::default());

    let fractions: Vec<f64> = ranking.with_progress().map(|(_, f)| f).collect();
    assert_eq!(fractions, [1.0, 0.25]);
  }

  #[test]
  fn all_zero_scores_still_fill_the_top_bar() {
    let songs = vec![song("a", "A", 0, 0, 0), song("b", "B", 0, 0, 0)];
    let ranking = rank_by_engagement(&songs, &EngagementWeights::default());

    assert_eq!(ranking.max_score(), 0);
    assert_eq!(ranking.progress_fraction(0), 1.0);
  }

  #[test]
  fn empty_ranking_is_safe() {
    let ranking = rank_by_engagement(&[], &EngagementWeights::default());

    assert!(ranking.entries().is_empty());
    assert_eq!(ranking.max_score(), 1);
    assert_eq!(ranking.progress_fraction(0), 0.0);
    assert!(!ranking.progress_fraction(0).is_nan());
  }

  #[test]
  fn huge_counters_saturate() {
    let s = song("x", "X", u64::MAX, 1, 1);
    assert_eq!(EngagementWeights::default().score(&s), u64::MAX);
  }

  #[test]
  fn ranking_leaves_input_untouched() {
    let songs = vec![song("a", "A", 1, 2, 3), song("b", "B", 9, 0, 0)];
    let snapshot = songs.clone();
    let _ = rank_by_engagement(&songs, &EngagementWeights::default());
    assert_eq!(songs, snapshot);
  }
}
