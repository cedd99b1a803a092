pub mod settings_store;
pub mod song_store;

pub use settings_store::SettingsStore;
pub use song_store::{SongStore, StoreError};
