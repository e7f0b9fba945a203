#![deny(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

/*!
Minimal DNS SRV lookup utility.

SRV Records, as defined in [RFC 2782](https://tools.ietf.org/html/rfc2782),
are DNS records of the form

`_Service._Proto.Name TTL Class SRV Priority Weight Port Target`

For instance, a DNS server might respond with the following SRV records for
`_http._tcp.headless-test`:

```text
_http._tcp.headless-test. 60 IN SRV 0 10 8080 svc-1.headless-test.
_http._tcp.headless-test. 60 IN SRV 10 5 8080 svc-2.headless-test.
```

`srv-canary` performs a single SRV lookup for such a name and dumps whatever
the resolver returned — the terminal error (if any), the full record list,
and each record on its own line — to a caller-supplied sink, in the order
the resolver produced the records:

```no_run
# #[tokio::main]
# async fn main() -> std::io::Result<()> {
use srv_canary::{lookup_and_report, SrvQuery};

let resolver = hickory_resolver::Resolver::builder_tokio()
    .expect("failed to read system resolver configuration")
    .build();
let query = SrvQuery::new("http", "tcp", "headless-test");
lookup_and_report(&resolver, &query, &mut std::io::stderr()).await?;
# Ok(())
# }
```

Lookup failures are written to the sink rather than propagated, and the
record dump is attempted regardless of the lookup outcome. The sink is an
explicit parameter so tests can capture the output deterministically; see
[`lookup_and_report`].

# Alternative Resolvers

The lookup runs against anything implementing the [`SrvResolver`] trait.
The [`hickory_resolver`] backend is enabled by the default `hickory`
feature; tests substitute their own in-memory resolvers.

[`SrvResolver`]: resolver::SrvResolver
*/

mod query;
pub use query::SrvQuery;

mod record;
pub use record::SrvRecord;

mod report;
pub use report::{lookup_and_report, report, LookupError, LookupOutcome};

pub mod resolver;
