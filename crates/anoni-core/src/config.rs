use serde::{Deserialize, Serialize};

use crate::query::{EngagementWeights, SortMode};

/// Parámetros del motor de consultas, inyectados por quien lo usa.
///
/// Se serializa como la sección `[catalog]` del fichero de configuración.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
  /// Tamaño de la sección destacada cuando no hay curación manual.
  #[serde(default = "default_featured_limit")]
  pub featured_limit: usize,

  /// Entradas del ranking del panel de administración.
  #[serde(default = "default_ranking_limit")]
  pub ranking_limit: usize,

  #[serde(default)]
  pub default_sort: SortMode,

  /// Categorías que se ofrecen como filtros rápidos.
  #[serde(default = "default_genres")]
  pub genres: Vec<String>,

  /// Pesos del ranking de interacción. Va al final: en TOML es una subtabla.
  #[serde(default)]
  pub weights: EngagementWeights,
}

fn default_featured_limit() -> usize {
  6
}

fn default_ranking_limit() -> usize {
  5
}

fn default_genres() -> Vec<String> {
  ["Synthwave", "Hip Hop", "Acoustic", "Electronic", "Ambient", "Regional"].map(String::from).to_vec()
}

impl Default for CatalogConfig {
  fn default() -> Self {
    CatalogConfig {
      featured_limit: default_featured_limit(),
      ranking_limit: default_ranking_limit(),
      default_sort: SortMode::default(),
      genres: default_genres(),
      weights: EngagementWeights::default(),
    }
  }
}
