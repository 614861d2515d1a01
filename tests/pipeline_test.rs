//! End-to-end scenarios: CSV sources in, JSON projections out.

use std::io::Write;

use tempfile::NamedTempFile;

use tag_catalog_worker::classification::{Taxonomy, builtin_classifier};
use tag_catalog_worker::ingest::{PairedCsvSource, RawTagRecord, SourceAdapter};
use tag_catalog_worker::output;
use tag_catalog_worker::pipeline;

fn record(en: &str, cn: &str, source: &str) -> RawTagRecord {
    RawTagRecord {
        text_en: en.to_string(),
        text_cn: cn.to_string(),
        description: String::new(),
        source: source.to_string(),
        original_category: String::new(),
    }
}

fn sheet(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write sheet");
    file
}

#[test]
fn deduplicates_weights_and_classifies_across_sources() {
    let taxonomy = Taxonomy::builtin();
    let records = vec![
        record("hand", "", "S1"),
        record("hand", "", "S2"),
        record("sci-fi", "科幻", "S1"),
    ];

    let run = pipeline::run(records, builtin_classifier(), &taxonomy);

    assert_eq!(run.merged.len(), 2);
    let hand = &run.merged[0];
    assert_eq!(hand.occurrence_count, 2);
    assert!((hand.weight - 1.1).abs() < 1e-9);
    assert_eq!(hand.source, "S1, S2");

    let hand_bucket = run.tree.bucket("Body Parts", "Upper Body").expect("hand bucket");
    assert_eq!(hand_bucket.len(), 1);
    let scifi_bucket = run
        .tree
        .bucket("Art Styles", "Science Fiction")
        .expect("sci-fi bucket");
    assert_eq!(scifi_bucket.len(), 1);

    // Exactly two populated subcategory buckets in the whole tree.
    let populated: usize = run
        .tree
        .iter()
        .map(|(_, buckets)| buckets.values().filter(|tags| !tags.is_empty()).count())
        .sum();
    assert_eq!(populated, 2);
}

#[test]
fn invalid_cells_never_reach_the_tree() {
    let file = sheet("portrait,中文\nhand,\n   ,\n???,\n");
    let source = PairedCsvSource::new("S1", file.path());
    let records = source.collect().expect("sheet reads");

    assert_eq!(records.len(), 1);

    let taxonomy = Taxonomy::builtin();
    let run = pipeline::run(records, builtin_classifier(), &taxonomy);
    assert_eq!(run.tree.total_tags(), 1);
}

#[test]
fn csv_sources_to_json_projections() {
    let first = sheet("portrait,中文,style,中文\nhand,,sci-fi,科幻\n");
    let second = sheet("portrait,中文\nhand,\n");
    let sources: Vec<Box<dyn SourceAdapter>> = vec![
        Box::new(PairedCsvSource::new("S1", first.path())),
        Box::new(PairedCsvSource::new("S2", second.path())),
    ];

    let mut records = Vec::new();
    for source in &sources {
        records.extend(source.collect().expect("sheet reads"));
    }

    let taxonomy = Taxonomy::builtin();
    let run = pipeline::run(records, builtin_classifier(), &taxonomy);

    let dir = tempfile::tempdir().expect("temp dir");
    output::write_projections(&run.tree, dir.path()).expect("projections written");

    let tree: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join(output::TREE_FILE)).expect("tree file"),
    )
    .expect("tree json");
    assert_eq!(tree["Body Parts"]["Upper Body"][0]["tag_en"], "hand");
    let weight = tree["Body Parts"]["Upper Body"][0]["weight"]
        .as_f64()
        .expect("weight number");
    assert!((weight - 1.1).abs() < 1e-9);
    assert_eq!(tree["Art Styles"]["Science Fiction"][0]["tag_cn"], "科幻");

    let search: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join(output::SEARCH_FILE)).expect("search file"),
    )
    .expect("search json");
    let entries = search.as_array().expect("search array");
    assert_eq!(entries.len(), 2);
    // Flat projection is weight-sorted: the twice-seen tag comes first.
    assert_eq!(entries[0]["tag_en"], "hand");
    assert_eq!(entries[0]["main_category"], "Body Parts");

    let structure: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join(output::STRUCTURE_FILE)).expect("structure file"),
    )
    .expect("structure json");
    assert_eq!(structure.as_object().expect("structure object").len(), 7);
    assert_eq!(structure["Body Parts"][0], "Upper Body");

    let combinations: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join(output::COMBINATIONS_FILE))
            .expect("combinations file"),
    )
    .expect("combinations json");
    assert_eq!(combinations.as_array().expect("combinations array").len(), 4);
}

#[test]
fn classification_precedence_and_fallback_hold_end_to_end() {
    let taxonomy = Taxonomy::builtin();
    let records = vec![
        record("hand gloves", "", "S1"),
        record("qwzx", "", "S1"),
    ];

    let run = pipeline::run(records, builtin_classifier(), &taxonomy);

    assert!(run.tree.bucket("Body Parts", "Upper Body").is_some());
    assert!(run.tree.bucket("Clothing", "Accessories").is_none());
    assert_eq!(run.tree.bucket("Other", "Unclassified").map(<[_]>::len), Some(1));
}
