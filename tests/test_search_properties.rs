use proptest::prelude::*;

use docdeck::manifest::Manifest;
use docdeck::search::SearchIndex;

fn arb_title() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,12}"
}

fn arb_manifest() -> impl Strategy<Value = Manifest> {
    prop::collection::vec(
        (
            "[a-z]{2,8}",
            prop::collection::vec((arb_title(), "[a-z/]{1,16}\\.md"), 0..6),
        ),
        0..5,
    )
    .prop_map(|sections| {
        let mut json = serde_json::Map::new();
        for (i, (name, entries)) in sections.into_iter().enumerate() {
            // Property generation may repeat section names; suffix to keep keys unique
            let key = format!("{name}{i}");
            let entries: Vec<serde_json::Value> = entries
                .into_iter()
                .map(|(title, path)| serde_json::json!({"title": title, "path": path}))
                .collect();
            json.insert(key, serde_json::Value::Array(entries));
        }
        Manifest::parse(&serde_json::Value::Object(json).to_string()).expect("generated manifest")
    })
}

proptest! {
    #[test]
    fn index_size_is_sum_of_section_sizes(manifest in arb_manifest()) {
        let expected: usize = manifest
            .section_names()
            .map(|s| manifest.entries(s).len())
            .sum();
        let index = SearchIndex::build(&manifest);
        prop_assert_eq!(index.len(), expected);
    }

    #[test]
    fn every_record_traces_back_to_its_source(manifest in arb_manifest()) {
        let index = SearchIndex::build(&manifest);
        for record in index.records() {
            let entries = manifest.entries(&record.section);
            prop_assert!(entries.iter().any(|e| e.title == record.title && e.path == record.path));
        }
    }

    #[test]
    fn queries_never_exceed_the_cap(manifest in arb_manifest(), query in "[a-zA-Z]{0,4}") {
        let index = SearchIndex::build(&manifest);
        let hits = index.query(&query);
        prop_assert!(hits.len() <= 8);
        if query.is_empty() {
            prop_assert!(hits.is_empty());
        }
        // Case-insensitive: upper-cased query matches the same set
        prop_assert_eq!(index.query(&query.to_uppercase()).len(), hits.len());
    }
}
