//! Abstract navigation intents
//!
//! The service never routes anything itself; it tells the client where to go.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Gallery of all designs
    CatalogRoot,
    /// Viewer page for one design
    DesignDetail(String),
    /// Print configuration page for one design
    PrintConfiguration(String),
}

impl NavigationIntent {
    pub fn path(&self) -> String {
        match self {
            NavigationIntent::CatalogRoot => "/".to_string(),
            NavigationIntent::DesignDetail(id) => format!("/design/{}", id),
            NavigationIntent::PrintConfiguration(id) => format!("/print/{}", id),
        }
    }
}

impl std::fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

impl Serialize for NavigationIntent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(NavigationIntent::CatalogRoot.path(), "/");
        assert_eq!(NavigationIntent::DesignDetail("d1".into()).path(), "/design/d1");
        assert_eq!(NavigationIntent::PrintConfiguration("d1".into()).to_string(), "/print/d1");
    }
}
