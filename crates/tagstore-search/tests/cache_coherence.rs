use std::sync::Arc;
use std::thread;

use tagstore_cache::TermState;
use tagstore_core::{Record, SnapshotStore};
use tagstore_search::QueryService;
use tagstore_storage::{DuplicatePolicy, JsonFileSnapshot};

const TERMS: &[&str] = &["go", "db", "rust", "missing", "", "Go"];

fn record(id: i64, tags: &[&str]) -> Record {
    Record::new(id, format!("https://example.com/{id}"), tags.iter().copied())
}

/// Cheap deterministic generator so the interleavings are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next() as usize) % items.len()]
    }
}

/// Every cached term comes from `TERMS`, so the tiers only add up to the
/// number of cached terms if no term sits in both.
fn assert_partitioned(service: &QueryService) {
    let stats = service.stats();
    let cached = TERMS
        .iter()
        .filter(|term| service.term_state(term) != TermState::Unknown)
        .count();
    assert_eq!(stats.zero_entries + stats.result_entries, cached);
}

#[test]
fn cached_results_always_match_a_fresh_scan() {
    let service = QueryService::in_memory();
    let mut rng = Lcg(42);

    for step in 0..500 {
        if rng.next() % 4 == 0 {
            let tags = [rng.pick(TERMS), rng.pick(TERMS)];
            service.add(record(step, &tags)).unwrap();
        } else {
            let term = rng.pick(TERMS);
            assert_eq!(service.search(term), service.search_uncached(term));
        }
        assert_partitioned(&service);
    }
}

#[test]
fn repeated_search_is_idempotent() {
    let service = QueryService::in_memory();
    service.add(record(1, &["go", "db"])).unwrap();
    service.add(record(2, &["rust"])).unwrap();
    service.add(record(3, &["go"])).unwrap();

    for term in TERMS {
        let first = service.search(term);
        for _ in 0..3 {
            assert_eq!(service.search(term), first);
        }
    }
}

#[test]
fn concrete_scenarios() {
    let service = QueryService::in_memory();

    // 1. empty store, zero-result cache
    assert!(service.search("x").is_empty());
    assert!(service.search("x").is_empty());
    assert_eq!(service.stats().misses, 1);

    // 2. result cache
    service.add(record(1, &["go", "db"])).unwrap();
    assert_eq!(service.search("go"), vec![record(1, &["go", "db"])]);
    assert_eq!(service.search("go"), vec![record(1, &["go", "db"])]);
    assert_eq!(service.stats().search_cache_hits, 1);

    // 3. add invalidates
    service.add(record(2, &["go"])).unwrap();
    let ids: Vec<_> = service.search("go").iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);

    // 4. unmatched term is cached as zero
    assert!(service.search("missing").is_empty());
    assert_eq!(service.term_state("missing"), TermState::Zero);
}

#[test]
fn concurrent_searches_and_adds_stay_coherent() {
    let service = Arc::new(QueryService::in_memory());

    thread::scope(|scope| {
        for writer in 0..2_i64 {
            let service = Arc::clone(&service);
            scope.spawn(move || {
                for i in 0..200 {
                    let tag = if i % 2 == 0 { "go" } else { "rust" };
                    service.add(record(writer * 1_000 + i, &[tag])).unwrap();
                }
            });
        }

        for reader in 0..4 {
            let service = Arc::clone(&service);
            scope.spawn(move || {
                let mut last_len = 0;
                for _ in 0..500 {
                    let term = if reader % 2 == 0 { "go" } else { "rust" };
                    let found = service.search(term);
                    // the store only grows, so neither may the match set
                    assert!(found.len() >= last_len);
                    assert!(found.iter().all(|r| r.has_tag(term)));
                    last_len = found.len();
                }
            });
        }
    });

    assert_eq!(service.len(), 400);
    assert_eq!(service.search("go").len(), 200);
    assert_eq!(service.search("rust").len(), 200);
    assert_eq!(service.search("go"), service.search_uncached("go"));
}

#[test]
fn concurrent_misses_for_one_term_compute_once() {
    let service = Arc::new(QueryService::in_memory());
    service.add(record(1, &["go"])).unwrap();
    let before = service.stats();

    thread::scope(|scope| {
        for _ in 0..8 {
            let service = Arc::clone(&service);
            scope.spawn(move || {
                for _ in 0..25 {
                    assert_eq!(service.search("go").len(), 1);
                }
            });
        }
    });

    let after = service.stats();
    assert_eq!(after.misses - before.misses, 1);
    assert_eq!(after.search_cache_hits - before.search_cache_hits, 199);
}

#[tokio::test]
async fn save_and_load_reconstructs_the_store() {
    let dir = tempfile::TempDir::new().unwrap();
    let snapshots = JsonFileSnapshot::new(dir.path().join("db.json"));

    let service = QueryService::in_memory();
    service.add(record(1, &["go", "db"])).unwrap();
    service.add(record(2, &["go"])).unwrap();
    service.add(record(3, &["rust", ""])).unwrap();
    service.search("go");

    snapshots.save(&service.snapshot()).await.unwrap();
    let snapshot = snapshots.load_or_recover().await.unwrap();
    let restored = QueryService::from_snapshot(snapshot, DuplicatePolicy::Allow);

    assert_eq!(restored.records(), service.records());
    assert_eq!(restored.search("go"), service.search("go"));
}
