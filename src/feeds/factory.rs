use crate::common::constants::{ALPHA_FEED, BRAVO_FEED, CHARLIE_FEED};
use crate::config::FeedsConfig;
use crate::domain::SourceKind;

use super::base::{CompanyFeed, HttpFeed};

/// Build the HTTP-backed feeds from configuration.
///
/// The returned order is fixed (alpha, bravo, charlie); the repository
/// concatenates results in this order, which is what keeps the API's
/// output ordering stable.
pub fn create_feeds(config: &FeedsConfig) -> Vec<Box<dyn CompanyFeed>> {
    vec![
        Box::new(HttpFeed::new(SourceKind::Alpha, ALPHA_FEED, &config.alpha_url)),
        Box::new(HttpFeed::new(SourceKind::Bravo, BRAVO_FEED, &config.bravo_url)),
        Box::new(HttpFeed::new(SourceKind::Charlie, CHARLIE_FEED, &config.charlie_url)),
    ]
}
