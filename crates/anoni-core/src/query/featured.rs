use std::cmp::Reverse;

use crate::domain::Song;

/// Sección destacada: curación manual o, si no la hay, lo más escuchado.
///
/// Las dos ramas son excluyentes. Si alguna canción tiene `is_featured`, el
/// resultado son sólo esas, en su orden original (recortadas a `limit`).
/// Si ninguna lo tiene, se devuelven las `limit` con más reproducciones,
/// con empates en orden de entrada. `limit == 0` devuelve una lista vacía.
pub fn select_featured(songs: &[Song], limit: usize) -> Vec<&Song> {
  if limit == 0 {
    return Vec::new();
  }

  let curated: Vec<&Song> = songs.iter().filter(|song| song.is_featured).take(limit).collect();
  if !curated.is_empty() {
    return curated;
  }

  let mut trending: Vec<&Song> = songs.iter().collect();
  trending.sort_by_key(|song| Reverse(song.plays));
  trending.truncate(limit);
  trending
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::query::fixtures::{ids, song};

  #[test]
  fn curated_songs_win_over_play_counts() {
    let mut quiet = song("quiet", "Quiet", 1, 0, 0);
    quiet.is_featured = true;
    let mut also = song("also", "Also", 3, 0, 0);
    also.is_featured = true;
    let songs = vec![song("hit", "Hit", 10_000, 0, 0), quiet, song("other", "Other", 500, 0, 0), also];

    let featured = select_featured(&songs, 6);

    assert_eq!(ids(&featured), ["quiet", "also"]);
    assert!(featured.iter().all(|s| s.is_featured));
  }

  #[test]
  fn curated_branch_is_not_supplemented() {
    let mut only = song("only", "Only", 0, 0, 0);
    only.is_featured = true;
    let songs = vec![only, song("a", "A", 9, 0, 0), song("b", "B", 8, 0, 0)];

    assert_eq!(ids(&select_featured(&songs, 6)), ["only"]);
  }

  #[test]
  fn curated_branch_is_capped_at_limit() {
    let songs: Vec<Song> = (0..4)
      .map(|i| {
        let mut s = song(&i.to_string(), "S", 0, 0, 0);
        s.is_featured = true;
        s
      })
      .collect();

    assert_eq!(ids(&select_featured(&songs, 2)), ["0", "1"]);
  }

  #[test]
  fn falls_back_to_top_plays() {
    let songs: Vec<Song> =
      [3, 90, 15, 90, 7, 42, 1, 60].iter().enumerate().map(|(i, p)| song(&i.to_string(), "S", *p, 0, 0)).collect();

    let featured = select_featured(&songs, 6);

    assert_eq!(ids(&featured), ["1", "3", "7", "5", "2", "4"]);

    let mut expected: Vec<&Song> = songs.iter().collect();
    expected.sort_by(|a, b| b.plays.cmp(&a.plays));
    expected.truncate(6);
    assert_eq!(featured, expected);
  }

  #[test]
  fn fallback_with_fewer_songs_than_limit() {
    let songs = vec![song("a", "A", 1, 0, 0), song("b", "B", 2, 0, 0)];
    assert_eq!(ids(&select_featured(&songs, 6)), ["b", "a"]);
  }

  #[test]
  fn zero_limit_is_empty() {
    let mut s = song("a", "A", 1, 0, 0);
    s.is_featured = true;
    assert!(select_featured(&[s], 0).is_empty());
    assert!(select_featured(&[song("b", "B", 5, 0, 0)], 0).is_empty());
  }
}
