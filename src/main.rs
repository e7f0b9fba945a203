//! DNS SRV lookup canary.
//!
//! Performs a single SRV lookup for `_http._tcp.headless-test` using the
//! system resolver configuration and dumps the outcome on stderr. The
//! process exits 0 regardless of the lookup outcome; failures are only
//! reported, never propagated.

use srv_canary::{lookup_and_report, SrvQuery};
use tracing_subscriber::EnvFilter;

const SERVICE: &str = "http";
const PROTOCOL: &str = "tcp";
const DOMAIN: &str = "headless-test";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let query = SrvQuery::new(SERVICE, PROTOCOL, DOMAIN);
    tracing::info!(srv = %query, "issuing srv lookup");

    let resolver = match hickory_resolver::Resolver::builder_tokio() {
        Ok(builder) => builder.build(),
        Err(err) => {
            tracing::error!(error = %err, "failed to read system resolver configuration");
            return Ok(());
        }
    };

    lookup_and_report(&resolver, &query, &mut std::io::stderr()).await
}
