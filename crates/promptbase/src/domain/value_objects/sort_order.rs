//! SortOrder - How listed prompts are ordered

use serde::{Deserialize, Serialize};

/// Ordering applied when listing prompts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Newest first
    #[default]
    MostRecent,
    /// Oldest first
    Oldest,
    /// Favorites first, then newest first
    Favorites,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::MostRecent => write!(f, "most_recent"),
            SortOrder::Oldest => write!(f, "oldest"),
            SortOrder::Favorites => write!(f, "favorites"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "most_recent" | "recent" => Ok(SortOrder::MostRecent),
            "oldest" => Ok(SortOrder::Oldest),
            "favorites" => Ok(SortOrder::Favorites),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_kebab_and_snake_case() {
        assert_eq!("most-recent".parse::<SortOrder>(), Ok(SortOrder::MostRecent));
        assert_eq!("most_recent".parse::<SortOrder>(), Ok(SortOrder::MostRecent));
        assert_eq!("Favorites".parse::<SortOrder>(), Ok(SortOrder::Favorites));
    }

    #[test]
    fn test_parse_unknown() {
        assert!("newest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for order in [SortOrder::MostRecent, SortOrder::Oldest, SortOrder::Favorites] {
            assert_eq!(order.to_string().parse::<SortOrder>(), Ok(order));
        }
    }
}
