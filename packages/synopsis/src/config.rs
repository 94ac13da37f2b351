//! Configuration constants and report settings for the synopsis generator.

use regex::Regex;
use std::sync::LazyLock;

/// Default location of the aligned segment dataset.
pub const DEFAULT_INPUT_PATH: &str = "./data/changes_DDA_DA.csv";

/// Default location of the generated report.
pub const DEFAULT_OUTPUT_PATH: &str = "compare_DDA_DA.html";

/// Default document title, used for both `<title>` and the `<h1>` heading.
pub const DEFAULT_TITLE: &str = "Comparison: Draft Delegated Act on Data Access (DDA) vs. Adopted Delegated Act on Data Access (DA)";

/// Label suffix for the draft (source) side.
pub const SOURCE_LABEL: &str = "DDA";

/// Label suffix for the adopted (target) side.
pub const TARGET_LABEL: &str = "DA";

/// Background color for inserted words.
pub const INSERT_COLOR: &str = "#d4fcbc";

/// Background color for deleted words.
pub const DELETE_COLOR: &str = "#fbb6c2";

/// Background color for a changed position or paragraph reference.
pub const REFERENCE_CHANGED_COLOR: &str = "#ffe58a";

/// Paragraph value marking a title segment.
pub const TITLE_PARAGRAPH: &str = "title";

/// Lower-case substring marking an explanatory memorandum position.
pub const EXPLANATORY_MARKER: &str = "exp";

/// Lower-case substring marking the title position that opens the recitals.
pub const TITLE_MARKER: &str = "title";

/// Lower-case substring marking an article position.
pub const ARTICLE_MARKER: &str = "art";

/// CSV column names, in `SegmentPair` field order.
pub const SOURCE_POSITION_COLUMN: &str = "DDA_pos";
pub const SOURCE_PARAGRAPH_COLUMN: &str = "DDA_para";
pub const SOURCE_TEXT_COLUMN: &str = "text_DDA";
pub const TARGET_POSITION_COLUMN: &str = "DA_pos";
pub const TARGET_PARAGRAPH_COLUMN: &str = "DA_para";
pub const TARGET_TEXT_COLUMN: &str = "text_DA";

/// All columns the loader requires.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    SOURCE_POSITION_COLUMN,
    SOURCE_PARAGRAPH_COLUMN,
    SOURCE_TEXT_COLUMN,
    TARGET_POSITION_COLUMN,
    TARGET_PARAGRAPH_COLUMN,
    TARGET_TEXT_COLUMN,
];

/// Whole-field values treated as missing, matching the dataframe tooling
/// the datasets are exported with.
pub const NULL_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Article identifier: `Art` followed by digits and optional word characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static ARTICLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Art\d+\w*").expect("valid regex"));

/// Recital identifier: `Rec` followed by digits and optional word characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static RECITAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Rec\d+\w*").expect("valid regex"));

/// Settings for a single report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub title: String,
    /// HTML fragment placed below the table of contents.
    pub intro: Option<String>,
    /// Escape dataset text instead of passing it through as HTML.
    pub escape_text: bool,
    /// Date shown in the footer; no footer when `None`.
    pub generated_on: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            intro: None,
            escape_text: false,
            generated_on: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    pub fn with_escape_text(mut self, escape_text: bool) -> Self {
        self.escape_text = escape_text;
        self
    }

    pub fn with_generated_on(mut self, date: impl Into<String>) -> Self {
        self.generated_on = Some(date.into());
        self
    }
}
