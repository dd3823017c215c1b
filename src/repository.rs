use tracing::{debug, instrument};

use crate::common::error::Result;
use crate::domain::Company;
use crate::feeds::CompanyFeed;
use crate::pipeline::normalize::NormalizationRegistry;

/// Read-side access to the unified company set.
///
/// Every call re-fetches all feeds and re-runs normalization, so results
/// always reflect the upstreams' current state. There is deliberately no
/// memoization; if latency ever matters, a cache with an explicit
/// invalidation policy belongs here, in front of the same contract.
pub struct CompanyRepository {
    feeds: Vec<Box<dyn CompanyFeed>>,
    registry: NormalizationRegistry,
}

impl CompanyRepository {
    pub fn new(feeds: Vec<Box<dyn CompanyFeed>>, registry: NormalizationRegistry) -> Self {
        Self { feeds, registry }
    }

    /// Fetch all feeds in their fixed order, concatenate, and normalize.
    /// A failing feed fails the whole call.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Company>> {
        let mut raw_records = Vec::new();
        for feed in &self.feeds {
            raw_records.extend(feed.fetch().await?);
        }

        let companies = self.registry.normalize_batch(&raw_records);
        debug!(
            raw = raw_records.len(),
            normalized = companies.len(),
            "normalized company snapshot"
        );
        Ok(companies)
    }

    /// Find the first company whose id matches exactly. Runs the same
    /// full fetch-and-normalize pass as `get_all`.
    pub async fn get_by_id(&self, company_id: &str) -> Result<Option<Company>> {
        let companies = self.get_all().await?;
        Ok(companies.into_iter().find(|c| c.id == company_id))
    }
}
