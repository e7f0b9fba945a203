//! SRV resolver backed by [`hickory_resolver`].

use super::{Resolution, SrvResolver};
use crate::SrvRecord;
use async_trait::async_trait;
use hickory_resolver::{
    name_server::ConnectionProvider, proto::rr::rdata::SRV, Name, ResolveError, Resolver,
};

#[async_trait]
impl<P> SrvResolver for Resolver<P>
where
    P: ConnectionProvider,
{
    type Record = SRV;
    type Error = ResolveError;

    async fn get_srv_records_unordered(
        &self,
        srv: &str,
    ) -> Result<Resolution<Self::Record>, Self::Error> {
        let lookup = self.srv_lookup(srv).await?;
        let canonical_name = lookup.as_lookup().query().name().to_utf8();
        Ok(Resolution {
            canonical_name,
            records: lookup.into_iter().collect(),
        })
    }
}

impl SrvRecord for SRV {
    type Target = Name;

    fn target(&self) -> &Self::Target {
        self.target()
    }

    fn port(&self) -> u16 {
        self.port()
    }

    fn priority(&self) -> u16 {
        self.priority()
    }

    fn weight(&self) -> u16 {
        self.weight()
    }
}
