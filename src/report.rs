//! Lookup reporting.

use crate::{
    query::SrvQuery,
    record::SrvRecord,
    resolver::{Resolution, SrvResolver},
};
use std::io::{self, Write};

/// Error surfaced by a failed SRV lookup.
///
/// All resolver failures (NXDOMAIN, timeout, network unreachable, malformed
/// response) collapse into this single opaque kind; no subtypes are
/// distinguished.
#[derive(Debug, thiserror::Error)]
#[error("srv lookup error: {0}")]
pub struct LookupError(Box<dyn std::error::Error + Send + Sync>);

impl LookupError {
    /// Wraps a resolver error.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(err))
    }
}

/// Everything a single lookup produced.
///
/// A DNS layer may hand back records alongside an error; the reporter dumps
/// whatever is present rather than treating the two as exclusive.
#[derive(Debug)]
pub struct LookupOutcome<R> {
    /// Canonical name returned by the DNS layer, if the lookup got that far.
    /// Not part of the reported output.
    pub canonical_name: Option<String>,
    /// Records in resolver order.
    pub records: Vec<R>,
    /// Terminal lookup error, if any.
    pub error: Option<LookupError>,
}

impl<R> LookupOutcome<R> {
    /// Outcome of a lookup that completed at the DNS layer.
    pub fn resolved(resolution: Resolution<R>) -> Self {
        Self {
            canonical_name: Some(resolution.canonical_name),
            records: resolution.records,
            error: None,
        }
    }

    /// Outcome of a lookup that failed at the DNS layer.
    pub fn failed(error: LookupError) -> Self {
        Self {
            canonical_name: None,
            records: Vec::new(),
            error: Some(error),
        }
    }
}

/// Writes a lookup outcome to `sink` as line-oriented, human-readable dumps:
/// the error line (if an error is present), then one aggregate line listing
/// every record, then one line per record.
///
/// Records appear in the order the resolver returned them; no sorting by
/// priority or weight is applied here.
pub fn report<R: SrvRecord, W: Write>(sink: &mut W, outcome: &LookupOutcome<R>) -> io::Result<()> {
    if let Some(error) = &outcome.error {
        writeln!(sink, "{}", error)?;
    }
    let rendered: Vec<String> = outcome.records.iter().map(render).collect();
    writeln!(sink, "records: [{}]", rendered.join(", "))?;
    for record in &rendered {
        writeln!(sink, "record: {}", record)?;
    }
    Ok(())
}

fn render<R: SrvRecord>(record: &R) -> String {
    format!(
        "{{target: {}, port: {}, priority: {}, weight: {}}}",
        record.target(),
        record.port(),
        record.priority(),
        record.weight()
    )
}

/// Performs one SRV lookup for `query` and reports the outcome to `sink`.
///
/// Lookup failures are written to the sink, not returned: the record dump is
/// attempted regardless of how the lookup ended, and the only error this
/// function itself produces is a failure to write to the sink.
pub async fn lookup_and_report<R, W>(resolver: &R, query: &SrvQuery, sink: &mut W) -> io::Result<()>
where
    R: SrvResolver,
    W: Write,
{
    let outcome = match resolver.get_srv_records_unordered(&query.srv_name()).await {
        Ok(resolution) => {
            tracing::debug!(
                canonical = %resolution.canonical_name,
                records = resolution.records.len(),
                "srv lookup succeeded"
            );
            LookupOutcome::resolved(resolution)
        }
        Err(err) => {
            tracing::warn!(error = %err, "srv lookup failed");
            LookupOutcome::failed(LookupError::new(err))
        }
    };
    report(sink, &outcome)
}
