use std::fmt;
use std::str::FromStr;

use crate::RegformError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavLanguage {
    Javascript,
    Rust,
}

impl FavLanguage {
    pub const ALL: [FavLanguage; 2] = [FavLanguage::Javascript, FavLanguage::Rust];
    pub const VALUES: &'static [&'static str] = &["javascript", "rust"];

    pub fn as_str(&self) -> &'static str {
        match self {
            FavLanguage::Javascript => "javascript",
            FavLanguage::Rust => "rust",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FavLanguage::Javascript => "JavaScript",
            FavLanguage::Rust => "Rust",
        }
    }
}

impl FromStr for FavLanguage {
    type Err = RegformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FavLanguage::ALL
            .into_iter()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| {
                RegformError::Message(format!("Unknown language: {}", s))
            })
    }
}

impl fmt::Display for FavLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavFood {
    Broccoli,
    Spaghetti,
    Pizza,
}

impl FavFood {
    // select lists pizza first, keep that order for display
    pub const ALL: [FavFood; 3] =
        [FavFood::Pizza, FavFood::Spaghetti, FavFood::Broccoli];
    pub const VALUES: &'static [&'static str] =
        &["broccoli", "spaghetti", "pizza"];

    pub fn as_str(&self) -> &'static str {
        match self {
            FavFood::Broccoli => "broccoli",
            FavFood::Spaghetti => "spaghetti",
            FavFood::Pizza => "pizza",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FavFood::Broccoli => "Broccoli",
            FavFood::Spaghetti => "Spaghetti",
            FavFood::Pizza => "Pizza",
        }
    }
}

impl FromStr for FavFood {
    type Err = RegformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FavFood::ALL
            .into_iter()
            .find(|food| food.as_str() == s)
            .ok_or_else(|| RegformError::Message(format!("Unknown food: {}", s)))
    }
}

impl fmt::Display for FavFood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
