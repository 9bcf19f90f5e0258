//! Mock place lookup for development and tests.
//!
//! Serves places from an in-memory set or a directory of JSON fixture
//! files, matching queries by case-insensitive name containment. Useful
//! for running the enrichment pipeline without provider credentials.

use std::path::Path;

use crate::domain::Place;
use crate::enrich::{LookupError, PlaceLookup};

use super::convert::convert_place;
use super::error::PlaceError;
use super::types::PlaceDto;

/// Mock place client backed by a fixed set of places.
#[derive(Debug, Clone)]
pub struct MockPlaceClient {
    places: Vec<Place>,
    source_tag: String,
}

impl MockPlaceClient {
    /// Create a mock client from already-built places.
    pub fn from_places(places: Vec<Place>) -> Self {
        let mut places = places;
        places.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            places,
            source_tag: "mock".to_string(),
        }
    }

    /// Create a mock client by loading JSON files from a directory.
    ///
    /// Expects one place per `*.json` file, in the wire format the real
    /// API returns. Errors if the directory holds no places at all.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, PlaceError> {
        let data_dir = data_dir.as_ref();
        let mut places = Vec::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| PlaceError::Api {
            status: 0,
            message: format!("Failed to read mock data directory: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| PlaceError::Api {
                status: 0,
                message: format!("Failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| PlaceError::Api {
                status: 0,
                message: format!("Failed to read {path:?}: {e}"),
            })?;

            let dto: PlaceDto = serde_json::from_str(&json).map_err(|e| PlaceError::Json {
                message: format!("Failed to parse {path:?}: {e}"),
                body: None,
            })?;

            places.push(convert_place(&dto));
        }

        if places.is_empty() {
            return Err(PlaceError::Api {
                status: 0,
                message: format!("No mock place files found in {data_dir:?}"),
            });
        }

        Ok(Self::from_places(places))
    }

    /// Override the provenance tag (defaults to "mock").
    pub fn with_source_tag(mut self, tag: impl Into<String>) -> Self {
        self.source_tag = tag.into();
        self
    }

    /// Number of places served.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// True when no places are loaded.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl PlaceLookup for MockPlaceClient {
    /// Answer with the first place whose name appears in the query,
    /// ignoring case. Mimics the fuzzy matching of a real text search
    /// closely enough for development.
    async fn find_one(&self, query: &str) -> Result<Option<Place>, LookupError> {
        let query = query.to_lowercase();
        Ok(self
            .places
            .iter()
            .find(|p| !p.name.is_empty() && query.contains(&p.name.to_lowercase()))
            .cloned())
    }

    fn source_tag(&self) -> &str {
        &self.source_tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str) -> Place {
        Place {
            name: name.to_string(),
            rating: Some(4.0),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn matches_by_name_containment() {
        let client = MockPlaceClient::from_places(vec![place("Museo"), place("Castillo")]);

        let found = client.find_one("Castillo Ricote").await.unwrap();
        assert_eq!(found.unwrap().name, "Castillo");
    }

    #[tokio::test]
    async fn match_is_case_insensitive() {
        let client = MockPlaceClient::from_places(vec![place("Museo del Valle")]);

        let found = client.find_one("museo del valle murcia").await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn no_match_returns_none() {
        let client = MockPlaceClient::from_places(vec![place("Museo")]);

        let found = client.find_one("Mirador Ojós").await.unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn source_tag_defaults_to_mock() {
        let client = MockPlaceClient::from_places(vec![place("Museo")]);
        assert_eq!(client.source_tag(), "mock");

        let client = client.with_source_tag("maps");
        assert_eq!(client.source_tag(), "maps");
    }

    #[tokio::test]
    async fn loads_fixtures_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("museo.json"),
            r#"{"name": "Museo del Valle", "rating": 4.5}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("castillo.json"),
            r#"{"name": "Castillo", "priceLevel": 0}"#,
        )
        .unwrap();
        // Non-JSON files are skipped
        std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let client = MockPlaceClient::from_dir(dir.path()).unwrap();
        assert_eq!(client.len(), 2);

        let found = client.find_one("Museo del Valle").await.unwrap();
        assert_eq!(found.unwrap().rating, Some(4.5));
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MockPlaceClient::from_dir(dir.path()).is_err());
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(MockPlaceClient::from_dir("/nonexistent/mock_places").is_err());
    }
}
