use std::collections::HashMap;

use tracing::debug;

use crate::common::constants::DEFAULT_BRAVO_COUNTRY;
use crate::domain::{Company, SourceKind, TaggedRecord};

pub mod mappers;

pub use mappers::{AlphaMapper, BravoMapper, CharlieMapper, MapperUtils, SourceMapper};

/// Registry of per-source mappers. Dispatch happens on the record's
/// provenance tag, never on which keys the record happens to contain.
pub struct NormalizationRegistry {
    mappers: HashMap<SourceKind, Box<dyn SourceMapper>>,
}

impl NormalizationRegistry {
    /// Create a registry with the built-in mappers for all three feeds.
    /// `bravo_country` is the country stamped onto every bravo record,
    /// since that feed never sends one.
    pub fn new(bravo_country: impl Into<String>) -> Self {
        let mut mappers: HashMap<SourceKind, Box<dyn SourceMapper>> = HashMap::new();
        mappers.insert(SourceKind::Alpha, Box::new(AlphaMapper::new()));
        mappers.insert(SourceKind::Bravo, Box::new(BravoMapper::new(bravo_country)));
        mappers.insert(SourceKind::Charlie, Box::new(CharlieMapper::new()));

        Self { mappers }
    }

    /// Register a mapper for a feed, replacing any existing one
    pub fn register(&mut self, mapper: Box<dyn SourceMapper>) {
        self.mappers.insert(mapper.kind(), mapper);
    }

    /// Map one tagged record into a canonical company. Records from a feed
    /// with no registered mapper, and records a mapper cannot identify,
    /// are dropped without error.
    pub fn normalize(&self, record: &TaggedRecord) -> Option<Company> {
        match self.mappers.get(&record.source) {
            Some(mapper) => mapper.map(&record.fields),
            None => {
                debug!(source = record.source.as_str(), "no mapper registered, dropping record");
                None
            }
        }
    }

    /// Map a batch of tagged records, preserving input order among the
    /// records that survive mapping.
    pub fn normalize_batch(&self, records: &[TaggedRecord]) -> Vec<Company> {
        records.iter().filter_map(|r| self.normalize(r)).collect()
    }
}

impl Default for NormalizationRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BRAVO_COUNTRY)
    }
}
