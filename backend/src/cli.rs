use std::path::PathBuf;

use anoni_core::domain::{SongDraft, SongPatch};
use anoni_core::query::SortMode;
use clap::{Args, Parser, Subcommand};

/// Command-line arguments for the `anoni` binary.
#[derive(Parser, Debug)]
#[command(name = "anoni")]
#[command(about = "Anoni Muzik: public catalog and admin console")]
#[command(version)]
pub struct Cli {
  /// SQLite database to use instead of the one in `[storage]`.
  #[arg(long, global = true, env = "ANONI_DB")]
  pub db: Option<PathBuf>,

  /// Print machine-readable JSON instead of text.
  #[arg(long, global = true)]
  pub json: bool,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Browse the catalog, optionally filtered and sorted.
  List {
    /// Case-insensitive match on title, artist or genre.
    #[arg(short, long, default_value = "")]
    search: String,
    /// recent, most-played, most-downloaded or most-liked. Defaults to `[catalog].default_sort`.
    #[arg(long)]
    sort: Option<SortMode>,
  },
  /// Curated songs, or the most played when nothing is curated.
  Featured,
  /// Category shortcuts.
  Genres,
  Show { id: String },
  Play { id: String },
  Download { id: String },
  Like { id: String },
  Unlike { id: String },
  /// Song after `id` in the play queue.
  Next { id: String },
  /// Song before `id` in the play queue.
  Prev { id: String },

  /// Engagement ranking (admin).
  Rank {
    #[arg(short, long)]
    limit: Option<usize>,
  },
  /// Lifetime totals (admin).
  Stats,
  /// Add a song (admin).
  Add(AddArgs),
  /// Edit fields of a song (admin).
  Edit(EditArgs),
  /// Delete a song (admin).
  Remove { id: String },
  /// Zero a song's counters (admin).
  ResetStats { id: String },
  /// Pin a song to the featured section (admin).
  Feature { id: String },
  /// Unpin a song from the featured section (admin).
  Unfeature { id: String },
  /// Site branding (admin).
  #[command(subcommand)]
  Settings(SettingsCommand),
  /// Load the demo catalog, skipping ids that already exist (admin).
  Seed,
  /// List raw storage entries.
  Storage,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
  Show,
  /// Set one field, e.g. `settings set accent_color '#ff0066'`.
  Set { field: String, value: String },
  /// Restore the stock branding.
  Reset,
}

#[derive(Args, Debug)]
pub struct AddArgs {
  #[arg(long)]
  pub title: String,
  #[arg(long)]
  pub audio_url: String,
  #[arg(long, default_value = "")]
  pub artist: String,
  #[arg(long, default_value = "Electronic")]
  pub genre: String,
  #[arg(long, default_value = "")]
  pub cover_url: String,
  #[arg(long, default_value = "3:00")]
  pub duration: String,
  #[arg(long, default_value_t = 0)]
  pub plays: u64,
  #[arg(long, default_value_t = 0)]
  pub downloads: u64,
  #[arg(long, default_value_t = 0)]
  pub likes: u64,
  #[arg(long)]
  pub featured: bool,
}

impl From<AddArgs> for SongDraft {
  fn from(args: AddArgs) -> Self {
    SongDraft {
      title: args.title,
      artist: args.artist,
      genre: args.genre,
      cover_url: args.cover_url,
      audio_url: args.audio_url,
      duration: args.duration,
      plays: args.plays,
      downloads: args.downloads,
      likes: args.likes,
      is_featured: args.featured,
    }
  }
}

#[derive(Args, Debug)]
pub struct EditArgs {
  pub id: String,
  #[arg(long)]
  pub title: Option<String>,
  #[arg(long)]
  pub artist: Option<String>,
  #[arg(long)]
  pub genre: Option<String>,
  #[arg(long)]
  pub cover_url: Option<String>,
  #[arg(long)]
  pub audio_url: Option<String>,
  #[arg(long)]
  pub duration: Option<String>,
  #[arg(long)]
  pub plays: Option<u64>,
  #[arg(long)]
  pub downloads: Option<u64>,
  #[arg(long)]
  pub likes: Option<u64>,
}

impl From<EditArgs> for SongPatch {
  fn from(args: EditArgs) -> Self {
    SongPatch {
      title: args.title,
      artist: args.artist,
      genre: args.genre,
      cover_url: args.cover_url,
      audio_url: args.audio_url,
      duration: args.duration,
      plays: args.plays,
      downloads: args.downloads,
      likes: args.likes,
      is_featured: None,
    }
  }
}
