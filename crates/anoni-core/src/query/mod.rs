//! Motor de consultas del catálogo.
//!
//! Funciones puras sobre una instantánea de canciones: no guardan estado,
//! no hacen I/O y nunca mutan la entrada. Devuelven referencias a los
//! elementos originales en un orden derivado.

pub mod analytics;
pub mod engagement;
pub mod featured;
pub mod filter;
pub mod navigation;
pub mod sort_mode;

pub use analytics::{CatalogTotals, totals};
pub use engagement::{EngagementWeights, RankedSong, Ranking, rank_by_engagement};
pub use featured::select_featured;
pub use filter::{filter_and_sort, matches_query};
pub use navigation::{Direction, adjacent};
pub use sort_mode::SortMode;
