//! SRV query names.

use std::fmt;

/// An immutable `(service, protocol, domain)` triple identifying an SRV
/// lookup target.
///
/// No validation is performed; malformed components are passed through to
/// the DNS layer, whose own error taxonomy surfaces through the lookup
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvQuery {
    service: String,
    protocol: String,
    domain: String,
}

impl SrvQuery {
    /// Creates a query for `service` over `protocol` within `domain`.
    pub fn new(
        service: impl Into<String>,
        protocol: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            protocol: protocol.into(),
            domain: domain.into(),
        }
    }

    /// Constructs the RFC 2782 query name `_service._protocol.domain`.
    pub fn srv_name(&self) -> String {
        format!("_{}._{}.{}", self.service, self.protocol, self.domain)
    }
}

impl fmt::Display for SrvQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{}._{}.{}", self.service, self.protocol, self.domain)
    }
}
