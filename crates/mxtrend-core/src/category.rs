use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrendError;

/// Snapshot family. Each category has its own CSV snapshot and its own
/// guide catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Economic,
    Social,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::General, Category::Economic, Category::Social];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Economic => "economic",
            Category::Social => "social",
        }
    }

    /// File name of the snapshot inside the data directory.
    pub fn snapshot_file(&self) -> &'static str {
        match self {
            Category::General => "General.csv",
            Category::Economic => "PIB.csv",
            Category::Social => "Social.csv",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TrendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Category::General),
            "economic" | "pib" => Ok(Category::Economic),
            "social" => Ok(Category::Social),
            other => Err(TrendError::Config(format!(
                "unknown category '{other}'; use general, economic or social"
            ))),
        }
    }
}
