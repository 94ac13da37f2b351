//! Report assembly: turns segment pairs into the final HTML document.
//!
//! Rows are processed in order by [`AssemblerState::step`], which owns the
//! one-shot heading flags and the set of anchors already emitted. The whole
//! document is built in memory and written with a single call.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::config::ReportConfig;
use crate::diff::render_diff_html;
use crate::error::{Result, SynopsisError};
use crate::html::{escape_html, TextMode};
use crate::indexer::{IdentifierIndex, IndexEntry};
use crate::label::format_header;
use crate::types::SegmentPair;

const EXPLANATORY_HEADING: &str = "Explanatory Memorandum";
const RECITALS_HEADING: &str = "Recitals";
const ARTICLES_HEADING: &str = "Articles";

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; padding: 20px; line-height: 1.6; }
        .diff { margin-bottom: 30px; }
        .header { font-weight: bold; margin-bottom: 5px; }
        .intro { margin: 20px 0; max-width: 85%; }
        .footer { margin-top: 40px; color: #666; font-size: 0.9em; }
        h2 { margin-top: 40px; }
        table { border-collapse: collapse; }
        th, td { padding: 8px 15px; text-align: left; }
        table.toc { table-layout: fixed; width: 85%; }
        table.toc th,
        table.toc td { width: 50%; vertical-align: top; word-wrap: break-word; }
"#;

/// One rendered row, ready to be appended to the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBlock {
    /// Part headings (`<h2>`) opened by this row.
    pub headings: Vec<&'static str>,

    /// Section-break heading text for a newly anchored identifier.
    pub section_label: Option<String>,

    /// Anchor id placed on the block.
    pub anchor: Option<String>,

    pub header: String,
    pub diff: String,
}

impl RenderedBlock {
    /// Render the block as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for heading in &self.headings {
            let _ = writeln!(html, "<h2>{heading}</h2>");
        }
        if let Some(label) = &self.section_label {
            let _ = writeln!(html, "<hr class=\"section-break\">\n<h3>{label}</h3>");
        }
        let anchor = self
            .anchor
            .as_ref()
            .map(|id| format!(" id=\"{id}\""))
            .unwrap_or_default();
        let _ = write!(
            html,
            "<div class=\"diff\"{anchor}>\n<div class=\"header\">{}</div>\n<div>{}</div>\n</div>\n",
            self.header, self.diff
        );
        html
    }
}

/// Per-run state threaded through the rows.
#[derive(Debug, Clone, Default)]
pub struct AssemblerState {
    pub explanatory_inserted: bool,
    pub recitals_inserted: bool,
    pub articles_inserted: bool,
    pub anchors: HashSet<String>,
}

impl AssemblerState {
    /// Render one row, updating the heading flags and anchor set.
    pub fn step(
        &mut self,
        pair: &SegmentPair,
        index: &IdentifierIndex,
        mode: TextMode,
    ) -> RenderedBlock {
        let diff = render_diff_html(&pair.source.text, &pair.target.text, mode);
        let header = format_header(pair, mode);

        if pair.is_added() && pair.is_removed() {
            tracing::warn!("Row has neither a source nor a target position");
        }

        let mut headings = Vec::new();
        let target = &pair.target.position;
        if !self.explanatory_inserted && target.is_explanatory() {
            headings.push(EXPLANATORY_HEADING);
            self.explanatory_inserted = true;
        }
        if !self.recitals_inserted && target.is_title() {
            headings.push(RECITALS_HEADING);
            self.recitals_inserted = true;
        } else if !self.articles_inserted && target.is_article() {
            headings.push(ARTICLES_HEADING);
            self.articles_inserted = true;
        }
        for heading in &headings {
            tracing::debug!(heading, position = target.raw(), "Opening part");
        }

        let mut section_label = None;
        let mut anchor = None;
        if let Some(id) = pair
            .source
            .position
            .identifiers()
            .find(|id| !self.anchors.contains(&id.key))
        {
            let label = index.label(&id.key).unwrap_or(id.key.as_str());
            section_label = Some(mode.apply(label).into_owned());
            anchor = Some(id.key.clone());
            self.anchors.insert(id.key.clone());
            tracing::debug!(anchor = %id.key, "Adding section anchor");
        }

        RenderedBlock {
            headings,
            section_label,
            anchor,
            header,
            diff,
        }
    }
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub rows: usize,
    pub blocks: usize,
    pub articles: usize,
    pub recitals: usize,
    pub anchors: usize,
}

/// A fully assembled report.
#[derive(Debug, Clone)]
pub struct Report {
    pub html: String,
    pub summary: ReportSummary,
}

/// Assemble the report for `segments`.
#[must_use]
pub fn render_report(segments: &[SegmentPair], config: &ReportConfig) -> Report {
    render_report_with_progress(segments, config, || {})
}

/// Assemble the report, calling `on_row` after each row is rendered.
pub fn render_report_with_progress(
    segments: &[SegmentPair],
    config: &ReportConfig,
    mut on_row: impl FnMut(),
) -> Report {
    let mode = TextMode::from_escape_flag(config.escape_text);
    let index = IdentifierIndex::build(segments);
    let title = escape_html(&config.title);

    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{STYLE}    </style>
</head>
<body>
<h1>{title}</h1>
{toc}"#,
        toc = render_toc(&index),
    );

    if let Some(intro) = &config.intro {
        let _ = writeln!(html, "<div class=\"intro\">\n{intro}\n</div>");
    }

    let mut state = AssemblerState::default();
    let mut blocks = 0;
    for pair in segments {
        let block = state.step(pair, &index, mode);
        html.push_str(&block.to_html());
        blocks += 1;
        on_row();
    }

    if let Some(date) = &config.generated_on {
        let _ = writeln!(
            html,
            "<div class=\"footer\">Generated on {}</div>",
            escape_html(date)
        );
    }
    html.push_str("</body></html>\n");

    Report {
        html,
        summary: ReportSummary {
            rows: segments.len(),
            blocks,
            articles: index.articles().len(),
            recitals: index.recitals().len(),
            anchors: state.anchors.len(),
        },
    }
}

/// Table of contents: recitals and articles side by side, in discovery order.
#[must_use]
pub fn render_toc(index: &IdentifierIndex) -> String {
    format!(
        r#"<h2>Table of Contents</h2>
<table class="toc" border="0" cellspacing="5" cellpadding="5">
<tr><th>Recitals</th><th>Articles</th></tr>
<tr><td>{}</td><td>{}</td></tr>
</table>
"#,
        toc_links(index.recitals()),
        toc_links(index.articles()),
    )
}

fn toc_links(entries: &[IndexEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("<a href=\"#{}\">{}</a>", e.key, escape_html(&e.label)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write the assembled document in one go.
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(SynopsisError::OutputDirectory(parent.to_path_buf()));
        }
    }

    fs::write(path, html)?;
    tracing::info!(path = %path.display(), bytes = html.len(), "Wrote report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(sp: &str, tp: &str) -> SegmentPair {
        SegmentPair::new(sp, "", "a b", tp, "", "a c")
    }

    fn run(segments: &[SegmentPair]) -> Vec<RenderedBlock> {
        let index = IdentifierIndex::build(segments);
        let mut state = AssemblerState::default();
        segments
            .iter()
            .map(|s| state.step(s, &index, TextMode::Raw))
            .collect()
    }

    #[test]
    fn test_one_block_per_row() {
        let segments = vec![row("Art1", "Art1"), row("Art1", "Art1"), row("", "Art2")];
        let report = render_report(&segments, &ReportConfig::new());
        assert_eq!(report.summary.blocks, 3);
        assert_eq!(report.html.matches("<div class=\"diff\"").count(), 3);
    }

    #[test]
    fn test_each_identifier_anchored_once() {
        let blocks = run(&[row("Art5", "Art5"), row("Art5", "Art5"), row("Art6", "Art6")]);
        let anchors: Vec<Option<&str>> = blocks.iter().map(|b| b.anchor.as_deref()).collect();
        assert_eq!(anchors, vec![Some("Art5"), None, Some("Art6")]);
        assert_eq!(blocks[0].section_label.as_deref(), Some("Article 5"));
        assert!(blocks[1].section_label.is_none());
    }

    #[test]
    fn test_recital_anchor_when_article_already_seen() {
        let blocks = run(&[row("Art1", "Art1"), row("Rec2_Art1", "x")]);
        assert_eq!(blocks[1].anchor.as_deref(), Some("Rec2_Art1"));
        assert_eq!(blocks[1].section_label.as_deref(), Some("Recital 2_Art1"));
    }

    #[test]
    fn test_part_headings_are_one_shot() {
        let blocks = run(&[
            row("Exp1", "Exp1"),
            row("Exp2", "Exp2"),
            row("title", "title"),
            row("Rec1", "Rec1"),
            row("Art1", "Art1"),
            row("Art2", "Art2"),
        ]);
        let headings: Vec<Vec<&str>> = blocks.iter().map(|b| b.headings.clone()).collect();
        assert_eq!(
            headings,
            vec![
                vec!["Explanatory Memorandum"],
                vec![],
                vec!["Recitals"],
                vec![],
                vec!["Articles"],
                vec![],
            ]
        );
    }

    #[test]
    fn test_title_and_article_are_exclusive_per_row() {
        let blocks = run(&[row("x", "Art1_title"), row("y", "Art2")]);
        assert_eq!(blocks[0].headings, vec!["Recitals"]);
        assert_eq!(blocks[1].headings, vec!["Articles"]);
    }

    #[test]
    fn test_headings_follow_target_position() {
        let blocks = run(&[row("Art1", "")]);
        assert!(blocks[0].headings.is_empty());
        assert_eq!(blocks[0].header, "Art. 1 DDA → removed");
    }

    #[test]
    fn test_block_html() {
        let block = RenderedBlock {
            headings: vec!["Articles"],
            section_label: Some("Article 1".to_string()),
            anchor: Some("Art1".to_string()),
            header: "Art. 1 DDA → Art. 1 DA".to_string(),
            diff: "a b ".to_string(),
        };
        assert_eq!(
            block.to_html(),
            "<h2>Articles</h2>\n\
             <hr class=\"section-break\">\n<h3>Article 1</h3>\n\
             <div class=\"diff\" id=\"Art1\">\n\
             <div class=\"header\">Art. 1 DDA → Art. 1 DA</div>\n\
             <div>a b </div>\n\
             </div>\n"
        );
    }

    #[test]
    fn test_toc_links_in_discovery_order() {
        let segments = vec![row("Rec2", "Rec2"), row("Art3", "Art3"), row("Rec1", "Rec1")];
        let toc = render_toc(&IdentifierIndex::build(&segments));
        assert!(toc.contains(
            "<td><a href=\"#Rec2\">Recital 2</a>, <a href=\"#Rec1\">Recital 1</a></td>\
             <td><a href=\"#Art3\">Article 3</a></td>"
        ));
    }

    #[test]
    fn test_intro_and_footer() {
        let config = ReportConfig::new()
            .with_intro("<p>Note</p>")
            .with_generated_on("2025-06-01");
        let report = render_report(&[row("Art1", "Art1")], &config);
        assert!(report.html.contains("<div class=\"intro\">\n<p>Note</p>\n</div>"));
        assert!(report.html.contains("Generated on 2025-06-01"));
        assert!(report.html.ends_with("</body></html>\n"));
    }

    #[test]
    fn test_title_is_escaped() {
        let config = ReportConfig::new().with_title("Draft <v1> & final");
        let report = render_report(&[], &config);
        assert!(report.html.contains("<h1>Draft &lt;v1&gt; &amp; final</h1>"));
    }

    #[test]
    fn test_write_report_rejects_missing_directory() {
        let err = write_report(Path::new("no/such/dir/out.html"), "x").unwrap_err();
        assert!(matches!(err, SynopsisError::OutputDirectory(_)));
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        write_report(&path, "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }
}
