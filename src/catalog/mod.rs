//! Design catalog
//!
//! Read-only collection of designs queried by identifier. A missing id is a
//! normal outcome and is reported as `None`, never as an error.

mod seed;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};
use utoipa::IntoParams;

use crate::domain::{Complexity, Design};

pub use seed::builtin_designs;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate design id: {0}")]
    DuplicateId(String),
    #[error("Catalog load task failed: {0}")]
    Task(String),
}

/// Filters for listing designs; all present filters must match
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogQuery {
    /// Exact category label
    pub category: Option<String>,
    pub complexity: Option<Complexity>,
    /// Case-insensitive match on name or tags
    pub search: Option<String>,
}

impl CatalogQuery {
    fn matches(&self, design: &Design) -> bool {
        self.category.as_deref().map_or(true, |c| design.category == c)
            && self.complexity.map_or(true, |c| design.complexity == c)
            && self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map_or(true, |s| design.matches_text(s))
    }
}

/// Lookup capability consumed by the detail and print flows
pub trait DesignCatalog: Send + Sync {
    /// Exact, case-sensitive lookup
    fn lookup(&self, id: &str) -> Option<Arc<Design>>;

    /// Designs matching `query`, in catalog order
    fn list(&self, query: &CatalogQuery) -> Vec<Arc<Design>>;

    /// Distinct categories in first-seen order
    fn categories(&self) -> Vec<String>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Catalog held entirely in memory
pub struct InMemoryCatalog {
    designs: Vec<Arc<Design>>,
    by_id: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn from_designs(designs: Vec<Design>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(designs.len());
        let mut stored = Vec::with_capacity(designs.len());

        for design in designs {
            if by_id.contains_key(&design.id) {
                return Err(CatalogError::DuplicateId(design.id));
            }
            by_id.insert(design.id.clone(), stored.len());
            stored.push(Arc::new(design));
        }

        Ok(InMemoryCatalog { designs: stored, by_id })
    }

    /// Catalog of the designs shipped with the service
    pub fn builtin() -> Self {
        InMemoryCatalog {
            designs: builtin_designs().iter().cloned().map(Arc::new).collect(),
            by_id: builtin_designs()
                .iter()
                .enumerate()
                .map(|(i, d)| (d.id.clone(), i))
                .collect(),
        }
    }

    /// Load a JSON array of designs from disk
    pub async fn load_file(path: &Path) -> Result<Self, CatalogError> {
        let path = path.to_path_buf();

        // Spawn blocking task for file I/O
        let designs = tokio::task::spawn_blocking(move || {
            let content = std::fs::read_to_string(&path)?;
            let designs: Vec<Design> = serde_json::from_str(&content)?;
            Ok::<_, CatalogError>(designs)
        })
        .await
        .map_err(|e| CatalogError::Task(e.to_string()))??;

        let catalog = Self::from_designs(designs)?;
        if catalog.is_empty() {
            warn!("Catalog file contains no designs");
        }
        info!(designs = catalog.len(), "Loaded design catalog");

        Ok(catalog)
    }
}

impl DesignCatalog for InMemoryCatalog {
    fn lookup(&self, id: &str) -> Option<Arc<Design>> {
        self.by_id.get(id).map(|&i| Arc::clone(&self.designs[i]))
    }

    fn list(&self, query: &CatalogQuery) -> Vec<Arc<Design>> {
        self.designs
            .iter()
            .filter(|d| query.matches(d))
            .cloned()
            .collect()
    }

    fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for design in &self.designs {
            if !categories.contains(&design.category) {
                categories.push(design.category.clone());
            }
        }
        categories
    }

    fn len(&self) -> usize {
        self.designs.len()
    }
}
