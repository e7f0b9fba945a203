//! Lookup reporting against canned resolvers.

use async_trait::async_trait;
use srv_canary::{
    lookup_and_report,
    resolver::{Resolution, SrvResolver},
    SrvQuery, SrvRecord,
};

#[derive(Debug, Clone)]
struct MockRecord {
    target: &'static str,
    port: u16,
    priority: u16,
    weight: u16,
}

impl SrvRecord for MockRecord {
    type Target = str;

    fn target(&self) -> &str {
        self.target
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn priority(&self) -> u16 {
        self.priority
    }

    fn weight(&self) -> u16 {
        self.weight
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct MockError(&'static str);

struct MockResolver {
    canonical_name: &'static str,
    records: Vec<MockRecord>,
    error: Option<&'static str>,
}

#[async_trait]
impl SrvResolver for MockResolver {
    type Record = MockRecord;
    type Error = MockError;

    async fn get_srv_records_unordered(
        &self,
        _srv: &str,
    ) -> Result<Resolution<Self::Record>, Self::Error> {
        match self.error {
            Some(message) => Err(MockError(message)),
            None => Ok(Resolution {
                canonical_name: self.canonical_name.to_string(),
                records: self.records.clone(),
            }),
        }
    }
}

fn query() -> SrvQuery {
    SrvQuery::new("http", "tcp", "headless-test")
}

fn lines(sink: &[u8]) -> Vec<String> {
    std::str::from_utf8(sink)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn single_record_lookup() {
    let resolver = MockResolver {
        canonical_name: "_http._tcp.headless-test.",
        records: vec![MockRecord {
            target: "svc-1.headless-test.",
            port: 8080,
            priority: 0,
            weight: 10,
        }],
        error: None,
    };
    let mut sink = Vec::new();
    lookup_and_report(&resolver, &query(), &mut sink).await.unwrap();

    let lines = lines(&sink);
    assert_eq!(lines.len(), 2, "expected one aggregate line and one record line");
    assert!(lines[0].starts_with("records: ["));
    assert!(lines[0].contains("svc-1.headless-test."));
    assert!(lines[0].contains("port: 8080"));
    assert_eq!(
        lines[1],
        "record: {target: svc-1.headless-test., port: 8080, priority: 0, weight: 10}"
    );
}

#[tokio::test]
async fn failed_lookup_still_dumps_records() {
    let resolver = MockResolver {
        canonical_name: "",
        records: Vec::new(),
        error: Some("no such host"),
    };
    let mut sink = Vec::new();
    lookup_and_report(&resolver, &query(), &mut sink).await.unwrap();

    let lines = lines(&sink);
    assert_eq!(lines.len(), 2, "expected one error line and one aggregate line");
    assert!(lines[0].contains("no such host"));
    assert_eq!(lines[1], "records: []");
}

#[tokio::test]
async fn empty_lookup_reports_empty_sequence() {
    let resolver = MockResolver {
        canonical_name: "_http._tcp.headless-test.",
        records: Vec::new(),
        error: None,
    };
    let mut sink = Vec::new();
    lookup_and_report(&resolver, &query(), &mut sink).await.unwrap();

    assert_eq!(lines(&sink), vec!["records: []"]);
}

#[tokio::test]
async fn resolver_order_is_preserved() {
    // Lower priority would come first if anything re-sorted; the dump must
    // keep the resolver's order instead.
    let resolver = MockResolver {
        canonical_name: "_http._tcp.headless-test.",
        records: vec![
            MockRecord {
                target: "svc-2.headless-test.",
                port: 8080,
                priority: 10,
                weight: 5,
            },
            MockRecord {
                target: "svc-1.headless-test.",
                port: 8080,
                priority: 0,
                weight: 10,
            },
        ],
        error: None,
    };
    let mut sink = Vec::new();
    lookup_and_report(&resolver, &query(), &mut sink).await.unwrap();

    let lines = lines(&sink);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("svc-2.headless-test."));
    assert!(lines[2].contains("svc-1.headless-test."));
}

#[tokio::test]
async fn ordered_lookup_sorts_by_priority() {
    let resolver = MockResolver {
        canonical_name: "_http._tcp.headless-test.",
        records: vec![
            MockRecord {
                target: "svc-2.headless-test.",
                port: 8080,
                priority: 10,
                weight: 5,
            },
            MockRecord {
                target: "svc-1.headless-test.",
                port: 8080,
                priority: 0,
                weight: 10,
            },
            MockRecord {
                target: "svc-3.headless-test.",
                port: 8080,
                priority: 10,
                weight: 20,
            },
        ],
        error: None,
    };
    let resolution = resolver
        .get_srv_records(&query().srv_name())
        .await
        .unwrap();

    let priorities: Vec<u16> = resolution.records.iter().map(|r| r.priority()).collect();
    assert_eq!(resolution.records.len(), 3);
    assert!(
        (0..priorities.len() - 1).all(|i| priorities[i] <= priorities[i + 1]),
        "records not sorted by priority: {:?}",
        priorities
    );
    assert_eq!(resolution.records[0].target(), "svc-1.headless-test.");
}
