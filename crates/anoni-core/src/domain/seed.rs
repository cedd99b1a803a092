use crate::domain::{Song, SongId};

/// Catálogo de demostración con el que arranca una instalación vacía.
pub fn stock_catalog() -> Vec<Song> {
  [
    ("1", "Neon Nights", "Cyber Dreamer", "6:12", "Synthwave"),
    ("2", "Urban Jungle", "Street Poet", "7:05", "Hip Hop"),
    ("3", "Golden Sunset", "Acoustic Soul", "5:15", "Acoustic"),
    ("4", "Midnight Rush", "Velocity", "4:45", "Electronic"),
    ("5", "Deep Ocean", "Ambient Echo", "8:20", "Ambient"),
  ]
  .into_iter()
  .map(|(id, title, artist, duration, genre)| Song {
    id: SongId::from(id),
    title: title.to_string(),
    artist: artist.to_string(),
    genre: genre.to_string(),
    cover_url: format!("https://picsum.photos/seed/music{id}/400/400"),
    audio_url: format!("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-{id}.mp3"),
    duration: duration.to_string(),
    plays: 0,
    downloads: 0,
    likes: 0,
    is_featured: false,
  })
  .collect()
}
