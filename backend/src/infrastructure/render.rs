use std::fmt::Write as _;

use anoni_core::domain::{SiteSettings, Song};
use anoni_core::query::CatalogTotals;
use anoni_core::services::RankEntry;
use anoni_storage::models::KvRow;

const BAR_WIDTH: usize = 24;

/// One catalog row: id, title, artist, genre and counters.
pub fn song_line(song: &Song) -> String {
  let pin = if song.is_featured { "*" } else { " " };
  format!(
    "{pin} {:<36}  {} - {} [{}] {}  plays {}  downloads {}  likes {}",
    song.id, song.title, song.artist, song.genre, song.duration, song.plays, song.downloads, song.likes
  )
}

pub fn song_list(songs: &[Song]) -> String {
  if songs.is_empty() {
    return "no songs found".to_string();
  }
  let mut out = String::new();
  for song in songs {
    let _ = writeln!(out, "{}", song_line(song));
  }
  let _ = write!(out, "{} song(s)", songs.len());
  out
}

pub fn song_detail(song: &Song) -> String {
  format!(
    "id:        {}\ntitle:     {}\nartist:    {}\ngenre:     {}\nduration:  {}\naudio:     {}\ncover:     {}\nplays:     {}\ndownloads: {}\nlikes:     {}\nfeatured:  {}",
    song.id,
    song.title,
    song.artist,
    song.genre,
    song.duration,
    song.audio_url,
    song.cover_url,
    song.plays,
    song.downloads,
    song.likes,
    song.is_featured
  )
}

/// Progress bar filled proportionally to `fraction` (clamped to `[0, 1]`).
pub fn bar(fraction: f64) -> String {
  let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
  format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

pub fn ranking(entries: &[RankEntry]) -> String {
  if entries.is_empty() {
    return "no songs to rank".to_string();
  }
  let mut out = String::new();
  for (position, entry) in entries.iter().enumerate() {
    let _ = writeln!(
      out,
      "{:>2}. {} {:>8}  {} - {}",
      position + 1,
      bar(entry.progress),
      entry.score,
      entry.song.title,
      entry.song.artist
    );
  }
  out.trim_end().to_string()
}

pub fn totals(totals: &CatalogTotals) -> String {
  format!(
    "songs:     {}\nplays:     {}\ndownloads: {}\nlikes:     {}",
    totals.songs, totals.plays, totals.downloads, totals.likes
  )
}

pub fn settings(settings: &SiteSettings) -> String {
  let mut out = String::new();
  let fields = [
    ("site_name", &settings.site_name),
    ("logo_url", &settings.logo_url),
    ("hero_title", &settings.hero_title),
    ("hero_subtitle", &settings.hero_subtitle),
    ("hero_image_url", &settings.hero_image_url),
    ("accent_color", &settings.accent_color),
    ("background_color", &settings.background_color),
    ("footer_text", &settings.footer_text),
    ("hero_button_text", &settings.hero_button_text),
    ("hero_button_url", &settings.hero_button_url),
    ("hero_button_color", &settings.hero_button_color),
  ];
  for (name, value) in fields {
    let _ = writeln!(out, "{name:<18} {value}");
  }
  out.trim_end().to_string()
}

pub fn storage_entries(entries: &[KvRow]) -> String {
  if entries.is_empty() {
    return "storage is empty".to_string();
  }
  entries
    .iter()
    .map(|e| format!("{:<10} {:>8} bytes  updated {}", e.key, e.value.len(), e.updated_at))
    .collect::<Vec<_>>()
    .join("\n")
}
