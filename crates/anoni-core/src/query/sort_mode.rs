use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Criterio de orden de la vista de catálogo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
  /// Orden inverso al de la colección: lo último añadido primero.
  #[default]
  Recent,
  MostPlayed,
  MostDownloaded,
  MostLiked,
}

impl SortMode {
  pub const ALL: [SortMode; 4] =
    [SortMode::Recent, SortMode::MostPlayed, SortMode::MostDownloaded, SortMode::MostLiked];

  pub fn as_str(&self) -> &'static str {
    match self {
      SortMode::Recent => "recent",
      SortMode::MostPlayed => "most-played",
      SortMode::MostDownloaded => "most-downloaded",
      SortMode::MostLiked => "most-liked",
    }
  }
}

impl fmt::Display for SortMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode: {0} (expected recent, most-played, most-downloaded or most-liked)")]
pub struct ParseSortModeError(String);

impl FromStr for SortMode {
  type Err = ParseSortModeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let key = s.trim().to_ascii_lowercase().replace('_', "-");
    SortMode::ALL.into_iter().find(|m| m.as_str() == key).ok_or_else(|| ParseSortModeError(s.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_its_own_display() {
    for mode in SortMode::ALL {
      assert_eq!(mode.to_string().parse::<SortMode>(), Ok(mode));
    }
  }

  #[test]
  fn parse_is_lenient_on_case_and_underscores() {
    assert_eq!("MOST_LIKED".parse::<SortMode>(), Ok(SortMode::MostLiked));
    assert!("popular".parse::<SortMode>().is_err());
  }
}
