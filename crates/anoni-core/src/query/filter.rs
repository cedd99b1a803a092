use std::cmp::Reverse;

use crate::domain::Song;
use crate::query::SortMode;

/// `true` si `query` aparece en el título, el artista o el género, sin
/// distinguir mayúsculas. Una consulta vacía coincide con todo.
pub fn matches_query(song: &Song, query: &str) -> bool {
  matches_lowered(song, &query.to_lowercase())
}

fn matches_lowered(song: &Song, needle: &str) -> bool {
  needle.is_empty()
    || [&song.title, &song.artist, &song.genre].into_iter().any(|field| field.to_lowercase().contains(needle))
}

/// Vista de navegación: filtra por texto y ordena el subconjunto resultante.
///
/// - `Recent` invierte el orden recibido; no existe marca de tiempo.
/// - Los modos numéricos ordenan de mayor a menor con un orden estable, así
///   que los empates conservan el orden que tenían tras el filtrado.
pub fn filter_and_sort<'a>(songs: &'a [Song], search: &str, sort: SortMode) -> Vec<&'a Song> {
  let needle = search.to_lowercase();
  let mut view: Vec<&Song> = songs.iter().filter(|song| matches_lowered(song, &needle)).collect();

  match sort {
    SortMode::Recent => view.reverse(),
    SortMode::MostPlayed => view.sort_by_key(|song| Reverse(song.plays)),
    SortMode::MostDownloaded => view.sort_by_key(|song| Reverse(song.downloads)),
    SortMode::MostLiked => view.sort_by_key(|song| Reverse(song.likes)),
  }

  view
}
