pub mod cli;
mod config;
mod infrastructure;

use anoni_core::CatalogConfig;
use anoni_core::domain::seed::stock_catalog;
use anoni_core::domain::{SiteSettings, SongId};
use anoni_core::services::{AdminService, CatalogService};
use anoni_storage::LibraryStore;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{Cli, Command, SettingsCommand};
use crate::config::CatalogConfigExt;
use infrastructure::render;

/// Wired services sharing one store.
///
/// The store is a cheap handle around a connection pool, so each service
/// gets its own clone.
pub struct AppState {
  pub store: LibraryStore,
  pub catalog: CatalogService<LibraryStore>,
  pub admin: AdminService<LibraryStore, LibraryStore>,
}

impl AppState {
  pub fn new(store: LibraryStore, config: CatalogConfig) -> Self {
    let catalog = CatalogService::new(store.clone(), config.clone());
    let admin = AdminService::new(store.clone(), store.clone(), config);
    Self { store, catalog, admin }
  }
}

/// Where command results go: plain text for people, JSON for scripts.
struct Output {
  json: bool,
}

impl Output {
  fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    if self.json {
      println!("{}", serde_json::to_string_pretty(value).context("Failed to encode JSON output")?);
    } else {
      println!("{}", text(value));
    }
    Ok(())
  }
}

/// Entry point used by `main`: opens config and storage, then runs one command.
pub fn run(cli: Cli) -> Result<()> {
  // --- Dependency Injection Phase ---

  // 1. Query engine parameters from `[catalog]`.
  let config = CatalogConfig::load().context("Failed to load [catalog] configuration")?;

  // 2. Persistence adapter (SQLite key/value store).
  let store = match &cli.db {
    Some(path) => LibraryStore::open(&path.to_string_lossy(), Some("WAL")),
    None => LibraryStore::new_from_config(),
  }
  .context("Failed to open the song store")?;

  // 3. Service wiring.
  let state = AppState::new(store, config);

  execute(&state, cli.command, &Output { json: cli.json })
}

fn execute(state: &AppState, command: Command, out: &Output) -> Result<()> {
  let catalog = &state.catalog;
  let admin = &state.admin;
  debug!(?command, "executing");

  match command {
    Command::List { search, sort } => {
      let sort = sort.unwrap_or(catalog.config().default_sort);
      let songs = catalog.browse(&search, sort)?;
      out.emit(&songs, |s| render::song_list(s))
    }
    Command::Featured => out.emit(&catalog.featured()?, |s| render::song_list(s)),
    Command::Genres => out.emit(&catalog.genres(), |g| g.join("\n")),
    Command::Show { id } => out.emit(&catalog.song(&SongId::from(id))?, render::song_detail),
    Command::Play { id } => out.emit(&catalog.record_play(&SongId::from(id))?, render::song_line),
    Command::Download { id } => out.emit(&catalog.record_download(&SongId::from(id))?, render::song_line),
    Command::Like { id } => out.emit(&catalog.like(&SongId::from(id))?, render::song_line),
    Command::Unlike { id } => out.emit(&catalog.unlike(&SongId::from(id))?, render::song_line),
    Command::Next { id } => out.emit(&catalog.next(&SongId::from(id))?, render::song_line),
    Command::Prev { id } => out.emit(&catalog.previous(&SongId::from(id))?, render::song_line),

    Command::Rank { limit } => out.emit(&admin.ranking(limit)?, |r| render::ranking(r)),
    Command::Stats => out.emit(&admin.totals()?, render::totals),
    Command::Add(args) => {
      let song = admin.add_song(args.into())?;
      out.emit(&song, render::song_line)
    }
    Command::Edit(args) => {
      let id = SongId::from(args.id.clone());
      out.emit(&admin.update_song(&id, args.into())?, render::song_line)
    }
    Command::Remove { id } => out.emit(&admin.remove_song(&SongId::from(id))?, render::song_line),
    Command::ResetStats { id } => out.emit(&admin.reset_stats(&SongId::from(id))?, render::song_line),
    Command::Feature { id } => out.emit(&admin.set_featured(&SongId::from(id), true)?, render::song_line),
    Command::Unfeature { id } => out.emit(&admin.set_featured(&SongId::from(id), false)?, render::song_line),
    Command::Settings(cmd) => settings(state, cmd, out),
    Command::Seed => {
      let added = admin.import(stock_catalog())?;
      info!(added, "demo catalog loaded");
      out.emit(&added, |n| format!("{n} song(s) added"))
    }
    Command::Storage => out.emit(&state.store.kv().entries()?, |e| render::storage_entries(e)),
  }
}

fn settings(state: &AppState, command: SettingsCommand, out: &Output) -> Result<()> {
  let admin = &state.admin;
  match command {
    SettingsCommand::Show => out.emit(&admin.settings()?, render::settings),
    SettingsCommand::Set { field, value } => {
      let mut settings = admin.settings()?;
      settings.set(&field, value)?;
      admin.update_settings(&settings)?;
      out.emit(&settings, render::settings)
    }
    SettingsCommand::Reset => {
      let settings = SiteSettings::default();
      admin.update_settings(&settings)?;
      out.emit(&settings, render::settings)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::Parser;
  use tempfile::{TempDir, tempdir};

  fn state() -> (TempDir, AppState) {
    let tmp = tempdir().unwrap();
    let url = tmp.path().join("anoni.db");
    let store = LibraryStore::open(url.to_str().unwrap(), None).unwrap();
    (tmp, AppState::new(store, CatalogConfig::default()))
  }

  fn exec(state: &AppState, args: &[&str]) -> Result<()> {
    let cli = Cli::try_parse_from(std::iter::once("anoni").chain(args.iter().copied()))?;
    execute(state, cli.command, &Output { json: cli.json })
  }

  #[test]
  fn seed_then_browse_and_count() {
    let (_tmp, state) = state();

    exec(&state, &["seed"]).unwrap();
    exec(&state, &["play", "2"]).unwrap();
    exec(&state, &["like", "2", "--json"]).unwrap();
    exec(&state, &["list", "--sort", "most-played"]).unwrap();

    let song = state.catalog.song(&SongId::from("2")).unwrap();
    assert_eq!((song.plays, song.likes), (1, 1));
  }

  #[test]
  fn admin_commands_round_trip() {
    let (_tmp, state) = state();

    exec(&state, &["add", "--title", "Zigue", "--audio-url", "z.mp3", "--genre", "Regional"]).unwrap();
    let id = state.catalog.browse("zigue", Default::default()).unwrap()[0].id.clone();

    exec(&state, &["feature", id.as_str()]).unwrap();
    assert_eq!(state.catalog.featured().unwrap()[0].id, id);

    exec(&state, &["edit", id.as_str(), "--artist", "Anon"]).unwrap();
    exec(&state, &["rank", "--limit", "3"]).unwrap();
    exec(&state, &["remove", id.as_str()]).unwrap();
    assert!(state.catalog.browse("", Default::default()).unwrap().is_empty());
  }

  #[test]
  fn unknown_song_is_an_error() {
    let (_tmp, state) = state();
    assert!(exec(&state, &["play", "missing"]).is_err());
  }

  #[test]
  fn settings_set_validates_colors() {
    let (_tmp, state) = state();

    exec(&state, &["settings", "set", "site_name", "Loja"]).unwrap();
    assert!(exec(&state, &["settings", "set", "accent_color", "red"]).is_err());

    let settings = state.admin.settings().unwrap();
    assert_eq!(settings.site_name, "Loja");
    assert_eq!(settings.accent_color, SiteSettings::default().accent_color);
  }
}
