use std::fmt;
use std::str::FromStr;

use crate::error::AssetError;

/// A fixed collection of bundled assets sharing one file extension.
///
/// Group membership is decided when the binary is built, by matching the
/// group's [`pattern`](Self::pattern) against the files in `assets/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetGroup {
    /// Every `*.txt` file.
    Text,
    /// Every `*.csv` file.
    Csv,
}

impl AssetGroup {
    /// All groups, in registration order.
    pub const ALL: [AssetGroup; 2] = [AssetGroup::Text, AssetGroup::Csv];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Csv => "csv",
        }
    }

    /// File extension of the group's members, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
        }
    }

    /// Glob used at build time to select the group's members.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Text => "*.txt",
            Self::Csv => "*.csv",
        }
    }

    /// Whether `name` carries this group's extension.
    ///
    /// This only checks the shape of the name; whether such a file was
    /// bundled is answered by the store.
    pub fn matches(&self, name: &str) -> bool {
        name.rsplit_once('.')
            .is_some_and(|(stem, ext)| !stem.is_empty() && ext == self.extension())
    }

    /// Resolve a group by its identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for AssetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetGroup {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| AssetError::UnknownGroup(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_valid_groups() {
        assert_eq!(AssetGroup::from_name("text"), Some(AssetGroup::Text));
        assert_eq!(AssetGroup::from_name("csv"), Some(AssetGroup::Csv));
    }

    #[test]
    fn test_from_name_invalid() {
        assert!(AssetGroup::from_name("txt").is_none());
        assert!(AssetGroup::from_name("Text").is_none());
        assert!(AssetGroup::from_name("").is_none());
    }

    #[test]
    fn test_from_str_unknown_group() {
        let err = "json".parse::<AssetGroup>().unwrap_err();
        assert!(matches!(err, AssetError::UnknownGroup(ref g) if g == "json"));
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for group in AssetGroup::ALL {
            assert_eq!(group.to_string().parse::<AssetGroup>().unwrap(), group);
        }
    }

    #[test]
    fn test_matches_extension() {
        assert!(AssetGroup::Text.matches("hello.txt"));
        assert!(AssetGroup::Csv.matches("greetings.csv"));
        assert!(!AssetGroup::Text.matches("greetings.csv"));
        assert!(!AssetGroup::Csv.matches("hello.txt"));
        assert!(!AssetGroup::Text.matches("hello"));
        assert!(!AssetGroup::Text.matches(".txt"));
        assert!(!AssetGroup::Text.matches("hello.TXT"));
    }

    #[test]
    fn test_pattern_uses_extension() {
        for group in AssetGroup::ALL {
            assert_eq!(group.pattern(), format!("*.{}", group.extension()));
        }
    }
}
