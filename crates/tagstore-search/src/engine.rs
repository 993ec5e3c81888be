use tagstore_core::Record;

/// Scans `records` for every record tagged with exactly `term`.
///
/// Matching is case-sensitive string equality with no normalization; the
/// empty term only matches records carrying an empty tag. Each record is
/// reported at most once, in the order given.
pub fn search_uncached(records: &[Record], term: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.has_tag(term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Record> {
        vec![
            Record::new(1, "a", ["go", "db"]),
            Record::new(2, "b", ["rust"]),
            Record::new(3, "c", ["go", "go"]),
            Record::new(4, "d", ["", "misc"]),
        ]
    }

    #[test]
    fn returns_matches_in_store_order() {
        let ids: Vec<_> = search_uncached(&corpus(), "go")
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn repeated_tag_yields_record_once() {
        let found = search_uncached(&corpus(), "go");
        assert_eq!(found.iter().filter(|r| r.id == 3).count(), 1);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(search_uncached(&corpus(), "Go").is_empty());
        assert!(search_uncached(&corpus(), "go ").is_empty());
    }

    #[test]
    fn empty_term_matches_empty_tag_only() {
        let found = search_uncached(&corpus(), "");
        assert_eq!(found, vec![Record::new(4, "d", ["", "misc"])]);
    }

    #[test]
    fn empty_store_matches_nothing() {
        assert!(search_uncached(&[], "go").is_empty());
    }
}
