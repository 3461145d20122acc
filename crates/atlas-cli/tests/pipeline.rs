//! End-to-end pipeline test: export file -> archive JSON.

use std::io::Write;

use atlas_classify::CategoryClassifier;
use atlas_cli::build_archive;
use atlas_ingest::load_export;
use atlas_segmentation::Segmenter;
use atlas_types::Archive;

fn mapping_entry(id: &str, role: &str, text: &str, time: f64) -> String {
    format!(
        r#""{id}": {{"message": {{"author": {{"role": "{role}"}}, "content": {{"parts": ["{text}"]}}, "create_time": {time}}}}}"#
    )
}

/// Export with one long mixed-subject conversation and one short one.
fn fixture_html() -> String {
    let mut entries = Vec::new();
    let mut time = 1000.0;

    // Eight pairs: four about React Native, four about Flask.
    for i in 0..8 {
        let text = if i < 4 {
            "react native setup navigation"
        } else {
            "python flask api blueprint"
        };
        entries.push(mapping_entry(&format!("u{i}"), "user", text, time));
        entries.push(mapping_entry(&format!("a{i}"), "assistant", text, time + 1.0));
        time += 10.0;
    }
    let long_conv = format!(
        r#"{{"title": "App development help", "create_time": 1000.0, "update_time": 2000.0, "mapping": {{{}}}}}"#,
        entries.join(", ")
    );

    let short_conv = format!(
        r#"{{"title": "Sourdough recipe", "create_time": 3000.0, "mapping": {{{}, {}}}}}"#,
        mapping_entry("u", "user", "sourdough starter hydration", 3000.0),
        mapping_entry("a", "assistant", "feed the starter daily", 3001.0),
    );

    format!("<html><script>var jsonData = [{long_conv}, {short_conv}];</script></html>")
}

#[test]
fn build_archive_from_export_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(fixture_html().as_bytes()).unwrap();

    let conversations = load_export(file.path()).unwrap();
    assert_eq!(conversations.len(), 2);

    let archive = build_archive(
        &conversations,
        &CategoryClassifier::with_defaults(),
        &Segmenter::with_defaults(),
    )
    .unwrap();

    // Both titles classify into known categories.
    assert!(archive.hierarchy.contains_key("Tech & Development"));
    assert!(archive.hierarchy.contains_key("Food & Cooking"));

    // The mixed conversation splits into its two subjects.
    let tech = &archive.hierarchy["Tech & Development"];
    let records = &tech.sub_categories["App development help"];
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].topics.len(), 2);
    assert_eq!(records[0].qa_count, 8);

    // The short conversation stays whole.
    let food = &archive.hierarchy["Food & Cooking"];
    let records = &food.sub_categories["Sourdough recipe"];
    assert_eq!(records[0].topics.len(), 1);

    assert_eq!(archive.summary.total_conversations, 2);
    assert_eq!(archive.summary.total_qa_pairs, 9);
    assert_eq!(archive.summary.total_topics, 3);
    assert_eq!(archive.summary.conversations_with_multiple_topics, 1);
}

#[test]
fn archive_json_round_trips() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(fixture_html().as_bytes()).unwrap();

    let conversations = load_export(file.path()).unwrap();
    let archive = build_archive(
        &conversations,
        &CategoryClassifier::with_defaults(),
        &Segmenter::with_defaults(),
    )
    .unwrap();

    let json = serde_json::to_string_pretty(&archive).unwrap();
    let parsed: Archive = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.summary.total_topics, archive.summary.total_topics);
    assert_eq!(parsed.hierarchy.len(), archive.hierarchy.len());
}

#[test]
fn identical_input_builds_identical_archive() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(fixture_html().as_bytes()).unwrap();

    let conversations = load_export(file.path()).unwrap();
    let classifier = CategoryClassifier::with_defaults();
    let segmenter = Segmenter::with_defaults();

    let first = build_archive(&conversations, &classifier, &segmenter).unwrap();
    let second = build_archive(&conversations, &classifier, &segmenter).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
