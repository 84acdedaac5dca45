use crate::normalizer::prepare;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed item type enumeration used by category listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Armor,
    Additional,
    Shield,
    OneHandedSword,
    TwoHandedSword,
    Bow,
    Bowgun,
    Knuckles,
    MagicDevice,
    Staff,
    Halberd,
    Katana,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Armor,
        Category::Additional,
        Category::Shield,
        Category::OneHandedSword,
        Category::TwoHandedSword,
        Category::Bow,
        Category::Bowgun,
        Category::Knuckles,
        Category::MagicDevice,
        Category::Staff,
        Category::Halberd,
        Category::Katana,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Armor => "armor",
            Category::Additional => "additional",
            Category::Shield => "shield",
            Category::OneHandedSword => "1 handed sword",
            Category::TwoHandedSword => "2 handed sword",
            Category::Bow => "bow",
            Category::Bowgun => "bowgun",
            Category::Knuckles => "knuckles",
            Category::MagicDevice => "magic device",
            Category::Staff => "staff",
            Category::Halberd => "halberd",
            Category::Katana => "katana",
        }
    }

    // Item `type` fields are compared trimmed and case-insensitively
    pub fn matches(&self, kind: &str) -> bool {
        kind.trim().eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk shape of an item. Converted into [`Item`] so the normalized
/// name cache can never be supplied by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub stats: Option<String>,
    pub sell: Option<String>,
    pub process: Option<String>,
    pub obtained_monster: Option<String>,
    pub obtained_map: Option<String>,
    #[serde(default)]
    pub image_paths: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    pub id: ItemId,
    name: String,
    name_normalized: String,
    pub kind: String,
    pub stats: Option<String>,
    pub sell: Option<String>,
    pub process: Option<String>,
    pub obtained_monster: Option<String>,
    pub obtained_map: Option<String>,
    pub image_paths: Vec<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: ItemId(id.into()),
            name_normalized: prepare(&name),
            name,
            kind: kind.into(),
            stats: None,
            sell: None,
            process: None,
            obtained_monster: None,
            obtained_map: None,
            image_paths: Vec::new(),
        }
    }

    pub fn with_stats(mut self, stats: impl Into<String>) -> Self {
        self.stats = Some(stats.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_normalized(&self) -> &str {
        &self.name_normalized
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.name_normalized = prepare(&self.name);
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Self {
            id: record.id,
            name_normalized: prepare(&record.name),
            name: record.name,
            kind: record.kind,
            stats: record.stats,
            sell: record.sell,
            process: record.process,
            obtained_monster: record.obtained_monster,
            obtained_map: record.obtained_map,
            image_paths: record.image_paths,
        }
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            kind: item.kind,
            stats: item.stats,
            sell: item.sell,
            process: item.process,
            obtained_monster: item.obtained_monster,
            obtained_map: item.obtained_map,
            image_paths: item.image_paths,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    /// Fuzzy name similarity, 0..=100.
    Match(f64),
    /// Value extracted from the item's stats field.
    Stat(f64),
}

impl Score {
    pub fn value(&self) -> f64 {
        match self {
            Score::Match(v) | Score::Stat(v) => *v,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MatchResult<'a> {
    pub item: &'a Item,
    pub score: Option<Score>,
}

impl<'a> MatchResult<'a> {
    pub fn unscored(item: &'a Item) -> Self {
        Self { item, score: None }
    }
}

#[derive(Error, Debug)]
pub enum CorynError {
    #[error("Result limit must be at least 1 (got {0})")]
    InvalidLimit(usize),

    #[error("Invalid option '{name}': {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("File system error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Dataset parsing error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    SerializeError(#[from] toml::ser::Error),
}
