use crate::domain::{Song, SongId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Next,
  Previous,
}

/// Canción siguiente o anterior en la cola del reproductor, con vuelta al
/// principio/final. `None` si la lista está vacía o `current` no está en ella.
pub fn adjacent<'a>(songs: &'a [Song], current: &SongId, direction: Direction) -> Option<&'a Song> {
  let len = songs.len();
  let index = songs.iter().position(|song| &song.id == current)?;

  let target = match direction {
    Direction::Next => (index + 1) % len,
    Direction::Previous => (index + len - 1) % len,
  };

  songs.get(target)
}
