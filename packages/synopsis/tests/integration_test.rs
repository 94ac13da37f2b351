//! End-to-end tests for the synopsis pipeline.
//!
//! Runs loading, indexing and report assembly on a small fixture modelled on
//! the data access delegated act comparison.

use std::fs;
use std::path::{Path, PathBuf};

use da_synopsis::report::{render_report, write_report};
use da_synopsis::{load_segments, ReportConfig, SegmentPair};
use pretty_assertions::assert_eq;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("changes_DDA_DA.csv")
}

fn load_fixture() -> Vec<SegmentPair> {
    load_segments(&fixture_path())
        .unwrap_or_else(|e| panic!("Failed to load {}: {e}", fixture_path().display()))
}

fn render_fixture() -> String {
    render_report(&load_fixture(), &ReportConfig::new()).html
}

#[test]
fn test_fixture_loads_all_rows() {
    let segments = load_fixture();
    assert_eq!(segments.len(), 10);
    assert!(segments[5].is_added());
    assert!(segments[8].is_removed());
}

#[test]
fn test_one_block_per_row() {
    let report = render_report(&load_fixture(), &ReportConfig::new());
    assert_eq!(report.summary.rows, 10);
    assert_eq!(report.summary.blocks, 10);
    assert_eq!(report.html.matches("<div class=\"diff\"").count(), 10);
}

#[test]
fn test_table_of_contents_order() {
    let html = render_fixture();
    assert!(html.contains(
        "<tr><td><a href=\"#Rec1\">Recital 1</a>, <a href=\"#Rec2\">Recital 2</a></td>\
         <td><a href=\"#Art1\">Article 1</a>, <a href=\"#Art2\">Article 2</a>, \
         <a href=\"#Art5a\">Article 5a</a></td></tr>"
    ));
}

#[test]
fn test_each_identifier_has_one_anchor() {
    let html = render_fixture();
    for id in ["Rec1", "Rec2", "Art1", "Art2", "Art5a"] {
        assert_eq!(
            html.matches(&format!("id=\"{id}\"")).count(),
            1,
            "anchor {id}"
        );
    }
    assert_eq!(html.matches("<hr class=\"section-break\">").count(), 5);
    assert!(html.contains("<h3>Article 5a</h3>"));
}

#[test]
fn test_part_headings_appear_once_in_order() {
    let html = render_fixture();
    let expl = html.find("<h2>Explanatory Memorandum</h2>");
    let recitals = html.find("<h2>Recitals</h2>");
    let articles = html.find("<h2>Articles</h2>");
    assert!(expl < recitals && recitals < articles);
    assert!(expl.is_some());
    assert_eq!(html.matches("<h2>Articles</h2>").count(), 1);
}

#[test]
fn test_headers() {
    let html = render_fixture();
    assert!(html.contains(
        "<div class=\"header\">Art. 2, paragraph 1 DDA → removed</div>"
    ));
    assert!(html.contains("<div class=\"header\">→ Rec. 4 DA</div>"));
    assert!(html.contains(
        "<div class=\"header\">Art. 1, paragraph 2 DDA → Art. 1, \
         <span style=\"background-color: #ffe58a;\">paragraph 3</span> DA</div>"
    ));
    assert!(html.contains(
        "<div class=\"header\">Art. 5a DDA → \
         <span style=\"background-color: #ffe58a;\">Art. 6</span> DA</div>"
    ));
}

#[test]
fn test_word_changes_are_highlighted() {
    let html = render_fixture();
    assert!(html.contains(
        "<span style=\"background-color: #fbb6c2;\">should</span> \
         <span style=\"background-color: #d4fcbc;\">shall</span> share data,"
    ));
    assert!(html.contains("<div>This Regulation lays down rules. </div>"));
}

#[test]
fn test_write_and_read_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("compare_DDA_DA.html");
    let html = render_fixture();

    write_report(&output, &html).expect("write report");

    let written = fs::read_to_string(&output).expect("read report");
    assert_eq!(written, html);
    assert!(written.starts_with("<!DOCTYPE html>"));
}
