use async_trait::async_trait;
use tracing::{info, instrument};

use crate::common::error::Result;
use crate::domain::{RecordFields, SourceKind, TaggedRecord};

/// Trait for one upstream company feed. Each feed returns loosely-typed
/// key-value records already tagged with its own kind, so the pipeline
/// never has to infer provenance from record shape.
#[async_trait]
pub trait CompanyFeed: Send + Sync {
    /// The kind this feed tags its records with
    fn kind(&self) -> SourceKind;

    /// Human-readable feed name for logs and CLI output
    fn name(&self) -> &'static str;

    /// Fetch the feed's current records. Transport and decode failures
    /// propagate; there is no retry or partial-result recovery here.
    async fn fetch(&self) -> Result<Vec<TaggedRecord>>;
}

/// HTTP-backed feed that GETs a configured endpoint returning a JSON
/// array of objects.
pub struct HttpFeed {
    client: reqwest::Client,
    kind: SourceKind,
    name: &'static str,
    endpoint: String,
}

impl HttpFeed {
    pub fn new(kind: SourceKind, name: &'static str, endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            kind,
            name,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CompanyFeed for HttpFeed {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn name(&self) -> &'static str {
        self.name
    }

    #[instrument(skip(self), fields(feed = self.name))]
    async fn fetch(&self) -> Result<Vec<TaggedRecord>> {
        let records: Vec<RecordFields> = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!("Fetched {} records from {}", records.len(), self.name);

        Ok(records
            .into_iter()
            .map(|fields| TaggedRecord::new(self.kind, fields))
            .collect())
    }
}

/// In-memory feed serving a fixed record set. Backs demo mode and tests.
pub struct StaticFeed {
    kind: SourceKind,
    name: &'static str,
    records: Vec<RecordFields>,
}

impl StaticFeed {
    pub fn new(kind: SourceKind, name: &'static str, records: Vec<RecordFields>) -> Self {
        Self { kind, name, records }
    }
}

#[async_trait]
impl CompanyFeed for StaticFeed {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self) -> Result<Vec<TaggedRecord>> {
        Ok(self
            .records
            .iter()
            .cloned()
            .map(|fields| TaggedRecord::new(self.kind, fields))
            .collect())
    }
}
