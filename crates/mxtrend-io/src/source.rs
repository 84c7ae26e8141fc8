use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use mxtrend_core::{Category, TrendError};

/// Where a snapshot comes from: a named category under the data directory
/// or an explicit file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceId {
    Category(Category),
    Path(PathBuf),
}

impl SourceId {
    pub fn resolve(&self, data_dir: &Path) -> PathBuf {
        match self {
            SourceId::Category(category) => data_dir.join(category.snapshot_file()),
            SourceId::Path(path) => path.clone(),
        }
    }

    /// Key used by the dataset cache.
    pub fn cache_key(&self) -> String {
        match self {
            SourceId::Category(category) => format!("category:{category}"),
            SourceId::Path(path) => format!("path:{}", path.display()),
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            SourceId::Category(category) => Some(*category),
            SourceId::Path(_) => None,
        }
    }
}

impl From<Category> for SourceId {
    fn from(category: Category) -> Self {
        SourceId::Category(category)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceId::Category(category) => write!(f, "{category}"),
            SourceId::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Category names parse as categories; anything else is taken as a path.
impl FromStr for SourceId {
    type Err = TrendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TrendError::Config("empty snapshot source".to_string()));
        }
        Ok(match s.parse::<Category>() {
            Ok(category) => SourceId::Category(category),
            Err(_) => SourceId::Path(PathBuf::from(s)),
        })
    }
}
