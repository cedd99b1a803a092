use serde::Serialize;

use crate::domain::Song;

/// Totales de por vida del catálogo para el panel de estadísticas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogTotals {
  pub songs: usize,
  pub plays: u64,
  pub downloads: u64,
  pub likes: u64,
}

pub fn totals(songs: &[Song]) -> CatalogTotals {
  songs.iter().fold(CatalogTotals { songs: songs.len(), ..Default::default() }, |acc, song| CatalogTotals {
    plays: acc.plays.saturating_add(song.plays),
    downloads: acc.downloads.saturating_add(song.downloads),
    likes: acc.likes.saturating_add(song.likes),
    ..acc
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::query::fixtures::song;

  #[test]
  fn sums_every_counter() {
    let songs = vec![song("a", "A", 10, 1, 2), song("b", "B", 5, 4, 0)];
    assert_eq!(totals(&songs), CatalogTotals { songs: 2, plays: 15, downloads: 5, likes: 2 });
  }

  #[test]
  fn empty_catalog_is_all_zero() {
    assert_eq!(totals(&[]), CatalogTotals::default());
  }
}
