//! Expense categories
//!
//! Categories form a small closed set. Each has a plain label, used in the
//! record file and in summaries, and an icon shown in front of it in the
//! terminal. Icon-prefixed labels such as `🍕 Food` parse as well.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category an expense belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Home,
    Work,
    #[serde(rename = "Going-out")]
    GoingOut,
    Other,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[Self::Food, Self::Home, Self::Work, Self::GoingOut, Self::Other]
    }

    /// The plain label stored in the record file
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Home => "Home",
            Self::Work => "Work",
            Self::GoingOut => "Going-out",
            Self::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍕",
            Self::Home => "🏠",
            Self::Work => "💼",
            Self::GoingOut => "🥳",
            Self::Other => "🎒",
        }
    }

    /// Label with its icon, e.g. "🍕 Food"
    pub fn decorated(&self) -> String {
        format!("{} {}", self.icon(), self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Accepts "Food", "food", "🍕 Food", "going-out", "going out" and "goingout".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // Labels written by the desktop form carry a leading icon
        let bare = Self::all()
            .iter()
            .find_map(|c| trimmed.strip_prefix(c.icon()))
            .unwrap_or(trimmed)
            .trim();

        let normalized: String = bare
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "food" => Ok(Self::Food),
            "home" => Ok(Self::Home),
            "work" => Ok(Self::Work),
            "goingout" => Ok(Self::GoingOut),
            "other" => Ok(Self::Other),
            _ => Err(CategoryParseError::Unknown(trimmed.to_string())),
        }
    }
}

/// Error returned when a label matches no category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(label) => write!(
                f,
                "Unknown category '{}' (expected one of: Food, Home, Work, Going-out, Other)",
                label
            ),
        }
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_labels() {
        for category in Category::all() {
            assert_eq!(category.label().parse::<Category>().unwrap(), *category);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("FOOD".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("going out".parse::<Category>().unwrap(), Category::GoingOut);
        assert_eq!("Going_Out".parse::<Category>().unwrap(), Category::GoingOut);
    }

    #[test]
    fn test_parse_decorated_labels() {
        assert_eq!("🍕 Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("🥳 Going-out".parse::<Category>().unwrap(), Category::GoingOut);
        assert_eq!(" 🎒 Other ".parse::<Category>().unwrap(), Category::Other);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryParseError::Unknown("Groceries".into()));
        assert!(err.to_string().contains("Going-out"));
    }

    #[test]
    fn test_display_and_decorated() {
        assert_eq!(Category::GoingOut.to_string(), "Going-out");
        assert_eq!(Category::Home.decorated(), "🏠 Home");
    }

    #[test]
    fn test_ordering_follows_declaration() {
        let mut categories = vec![Category::Other, Category::Food, Category::Work];
        categories.sort();
        assert_eq!(categories, vec![Category::Food, Category::Work, Category::Other]);
    }
}
