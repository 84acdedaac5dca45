use crate::core::{CorynError, Item};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};
use walkdir::WalkDir;

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<Item>,
}

/// Immutable item collection queried by the search engine.
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Load `[[items]]` tables from a `.toml` file, or from every `.toml`
    /// file below a directory in path order.
    pub fn load(path: &Path) -> Result<Self, CorynError> {
        let files: Vec<PathBuf> = if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .min_depth(1)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(|e| e.into_path())
                .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("toml"))
                .collect();
            found.sort();
            found
        } else {
            vec![path.to_path_buf()]
        };

        let mut items = Vec::new();
        for file in &files {
            let content = std::fs::read_to_string(file)?;
            let parsed: CatalogFile = toml::from_str(&content)?;
            if parsed.items.is_empty() {
                warn!(file = %file.display(), "no items in catalog file");
            }
            items.extend(parsed.items);
        }

        info!(files = files.len(), items = items.len(), "catalog loaded");
        Ok(Self { items })
    }
}

/// Shared access to the current catalog snapshot.
///
/// Readers hold an `Arc` for the duration of a query, so a reload never
/// changes the collection under an in-flight search.
#[derive(Clone)]
pub struct CatalogHandle {
    tx: Arc<watch::Sender<Arc<Catalog>>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(catalog));
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        self.tx.borrow().clone()
    }

    pub fn replace(&self, catalog: Catalog) {
        let len = catalog.len();
        self.tx.send_replace(Arc::new(catalog));
        info!(items = len, "catalog snapshot replaced");
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Catalog>> {
        self.tx.subscribe()
    }
}
