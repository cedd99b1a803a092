pub mod ids;
pub mod seed;
pub mod settings;
pub mod song;

pub use ids::SongId;
pub use settings::SiteSettings;
pub use song::{Song, SongDraft, SongPatch};
