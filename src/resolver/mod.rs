//! SRV resolvers.

use crate::SrvRecord;
use async_trait::async_trait;
use rand::Rng;

#[cfg(feature = "hickory")]
mod hickory;

/// What a single SRV lookup produced: the canonical query name reported by
/// the DNS layer and the records in the order the resolver returned them.
#[derive(Debug, Clone)]
pub struct Resolution<R> {
    /// Canonical name prefixed to the SRV query, after any aliasing.
    pub canonical_name: String,
    /// Records in resolver order; no sorting has been applied.
    pub records: Vec<R>,
}

/// Represents the ability to act as a SRV resolver.
#[async_trait]
pub trait SrvResolver: Send + Sync {
    /// SRV record representation produced by the resolver.
    type Record: SrvRecord;

    /// Errors encountered during SRV resolution.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Gets the records corresponding to a srv name without sorting by
    /// priority or shuffling based on weight.
    async fn get_srv_records_unordered(
        &self,
        srv: &str,
    ) -> Result<Resolution<Self::Record>, Self::Error>;

    /// Gets the records corresponding to a srv name, sorting by priority and
    /// shuffling based on weight.
    async fn get_srv_records(&self, srv: &str) -> Result<Resolution<Self::Record>, Self::Error> {
        let mut resolution = self.get_srv_records_unordered(srv).await?;
        Self::order_srv_records(&mut resolution.records, rand::rng());
        Ok(resolution)
    }

    /// Sorts SRV records by priority and weight per RFC 2782.
    fn order_srv_records(records: &mut [Self::Record], mut rng: impl Rng) {
        records.sort_by_cached_key(|record| record.sort_key(&mut rng));
    }
}
