//! # mxtrend-io: Snapshot Loading
//!
//! Reads World Bank style wide CSV snapshots into [`mxtrend_core::Dataset`]s.
//!
//! - [`loader`] - header normalization and incomplete row removal
//! - [`source`] - category -> snapshot file resolution
//! - [`cache`] - write-once dataset cache and [`SnapshotStore`]
//! - [`table`] - raw table dump of a dataset
//!
//! ```rust,no_run
//! use mxtrend_core::Category;
//! use mxtrend_io::{SnapshotStore, SourceId};
//!
//! let store = SnapshotStore::new("data");
//! let dataset = store.load(&SourceId::Category(Category::General))?;
//! println!("{} rows over {} years", dataset.len(), dataset.years().len());
//! # Ok::<(), mxtrend_core::TrendError>(())
//! ```

pub mod cache;
pub mod loader;
pub mod source;
pub mod table;

pub use cache::{DatasetCache, SnapshotStore};
pub use loader::{load, load_path, load_reader, read_snapshot, LoadStats, Snapshot};
pub use source::SourceId;
