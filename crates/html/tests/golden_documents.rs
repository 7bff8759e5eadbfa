use html_test_support::{assert_markup_eq, document_fixtures_in};
use std::path::Path;

fn fixtures_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("documents")
}

#[test]
fn golden_documents_serialize_exactly() {
    let fixtures = document_fixtures_in(&fixtures_dir());
    assert!(!fixtures.is_empty(), "no fixtures found in {:?}", fixtures_dir());
    for fixture in &fixtures {
        let actual = html::serialize(&fixture.options, &fixture.body);
        assert_markup_eq(&fixture.expected, &actual, &fixture.name);
    }
}

#[test]
fn golden_documents_are_stable_across_runs() {
    for fixture in document_fixtures_in(&fixtures_dir()) {
        let first = html::serialize(&fixture.options, &fixture.body);
        let second = html::serialize(&fixture.options, &fixture.body);
        assert_eq!(first, second, "fixture {}", fixture.name);
    }
}
