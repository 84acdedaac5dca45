//! Query interpretation and ranking for a game item dataset.
//!
//! A query is classified by prefix into one of three modes:
//!
//! - `stat: <name>` ranks items by a numeric stat value
//! - `all [<category>]` lists the whole collection or one item type
//! - anything else is a fuzzy match against item names
//!
//! ```
//! use coryn::{search, Item};
//!
//! let items = vec![
//!     Item::new("1", "Dragon Bow", "Bow").with_stats("ATK: 100; ASPD: 300"),
//!     Item::new("2", "Ruby Katana", "Katana").with_stats("ATK: 150"),
//! ];
//! let results = search("stat: atk", &items, 5, false).unwrap();
//! assert_eq!(results[0].item.name(), "Ruby Katana");
//! ```

pub mod aliases;
pub mod catalog;
pub mod config;
pub mod core;
pub mod fuzz;
pub mod normalizer;
pub mod search;
pub mod stats;

pub use crate::catalog::{Catalog, CatalogHandle};
pub use crate::config::{ConfigManager, CorynConfig, SearchOptions};
pub use crate::core::{Category, CorynError, Item, ItemId, ItemRecord, MatchResult, Score};
pub use crate::normalizer::{normalize_category, normalize_stat, prepare};
pub use crate::search::{classify, search, QueryMode, SearchEngine};
pub use crate::stats::{extract_stat_value, stat_names, suggest_stats, StatProbe};
