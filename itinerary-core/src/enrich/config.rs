//! Enrichment configuration.

/// Configuration parameters for the enrichment service.
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    /// Municipality used in lookup queries when a stop has none.
    pub default_municipality: String,

    /// How many lookups to run concurrently per batch.
    /// Higher values finish large itineraries faster but lean harder on
    /// the lookup provider's rate limits.
    pub batch_size: usize,
}

impl EnrichConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(default_municipality: impl Into<String>, batch_size: usize) -> Self {
        Self {
            default_municipality: default_municipality.into(),
            batch_size,
        }
    }
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            default_municipality: "Murcia".to_string(),
            batch_size: 8,
        }
    }
}
