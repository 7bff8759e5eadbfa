use html::config::PageConfig;
use html::{DocumentOptions, HtmlChildren};
use serde::Deserialize;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// A golden document: a page description and the exact markup it must
/// serialize to.
pub struct DocumentFixture {
    pub name: String,
    pub options: DocumentOptions,
    pub body: HtmlChildren,
    pub expected: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureFile {
    expected: String,
    page: PageConfig,
}

pub fn load_document_fixture(path: &Path) -> DocumentFixture {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture {path:?}: {err}"));
    let file: FixtureFile = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse fixture {path:?}: {err}"));
    let (options, body) = file
        .page
        .into_document()
        .unwrap_or_else(|err| panic!("invalid page in fixture {path:?}: {err}"));
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    DocumentFixture {
        name,
        options,
        body,
        // Multi-line TOML strings are easier to read with a trailing newline.
        expected: file.expected.trim_end_matches('\n').to_string(),
    }
}

/// All `*.toml` fixtures in `dir`, sorted by file name.
pub fn document_fixtures_in(dir: &Path) -> Vec<DocumentFixture> {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("failed to list fixture dir {dir:?}: {err}"));
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();
    paths.iter().map(|path| load_document_fixture(path)).collect()
}

/// Split markup after every `>` so a diff points at a single tag.
pub fn markup_lines(markup: &str) -> Vec<String> {
    markup
        .split_inclusive('>')
        .map(str::to_string)
        .collect()
}

pub fn assert_markup_eq(expected: &str, actual: &str, context: &str) {
    if expected == actual {
        return;
    }
    let diff = diff_lines(&markup_lines(expected), &markup_lines(actual));
    panic!("markup mismatch in {context}\n{diff}");
}

/// Report the first differing line with two lines of context on each side.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    const MISSING: &str = "<missing>";
    let max = expected.len().max(actual.len());
    fn line(lines: &[String], i: usize) -> &str {
        lines.get(i).map(String::as_str).unwrap_or(MISSING)
    }

    let mut out = String::new();
    match (0..max).find(|&i| line(expected, i) != line(actual, i)) {
        Some(first) => {
            let _ = writeln!(&mut out, "first mismatch at line {}:", first + 1);
            for i in first.saturating_sub(2)..(first + 3).min(max) {
                let marker = if i == first { ">" } else { " " };
                let _ = writeln!(&mut out, "{marker} {:>4}  expected: {}", i + 1, line(expected, i));
                let _ = writeln!(&mut out, "{marker} {:>4}    actual: {}", i + 1, line(actual, i));
            }
        }
        None => {
            let _ = writeln!(&mut out, "no line differs");
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}
