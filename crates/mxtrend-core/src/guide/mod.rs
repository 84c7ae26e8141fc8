//! Static indicator guide catalogs.
//!
//! Each [`Category`] has a closed catalog keyed by the canonical English
//! indicator name, carrying the Spanish label and the narrative text shown
//! next to the chart. Catalogs are built once and never mutated; callers
//! pass the catalog explicitly to [`lookup`].

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{TrendError, TrendResult};
use crate::Category;

mod economic;
mod general;
mod social;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorGuideEntry {
    pub series_name: &'static str,
    pub translated_label: &'static str,
    pub definition: &'static str,
    pub purpose: &'static str,
    pub importance: &'static str,
}

#[derive(Debug)]
pub struct GuideCatalog {
    category: Category,
    entries: &'static [IndicatorGuideEntry],
    index: BTreeMap<&'static str, usize>,
}

impl GuideCatalog {
    fn build(category: Category, entries: &'static [IndicatorGuideEntry]) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.series_name, i))
            .collect();
        Self {
            category,
            entries,
            index,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &'static [IndicatorGuideEntry] {
        self.entries
    }

    pub fn get(&self, series_name: &str) -> Option<&'static IndicatorGuideEntry> {
        self.index.get(series_name).map(|i| &self.entries[*i])
    }

    pub fn contains(&self, series_name: &str) -> bool {
        self.index.contains_key(series_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static GENERAL: Lazy<GuideCatalog> =
    Lazy::new(|| GuideCatalog::build(Category::General, &general::ENTRIES));
static ECONOMIC: Lazy<GuideCatalog> =
    Lazy::new(|| GuideCatalog::build(Category::Economic, &economic::ENTRIES));
static SOCIAL: Lazy<GuideCatalog> =
    Lazy::new(|| GuideCatalog::build(Category::Social, &social::ENTRIES));

/// Catalog for `category`.
pub fn catalog(category: Category) -> &'static GuideCatalog {
    match category {
        Category::General => &*GENERAL,
        Category::Economic => &*ECONOMIC,
        Category::Social => &*SOCIAL,
    }
}

/// Guide entry for `series_name`.
///
/// A missing entry means the snapshot and the catalog disagree; it is
/// reported as [`TrendError::UnknownIndicator`] rather than papered over.
pub fn lookup<'a>(
    catalog: &'a GuideCatalog,
    series_name: &str,
) -> TrendResult<&'a IndicatorGuideEntry> {
    catalog
        .get(series_name)
        .ok_or_else(|| TrendError::UnknownIndicator {
            series_name: series_name.to_string(),
            catalog: catalog.category,
        })
}
