//! Loading the aligned segment dataset from CSV.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

use crate::config::{NULL_MARKERS, REQUIRED_COLUMNS};
use crate::error::{Result, SynopsisError};
use crate::types::SegmentPair;

/// A dataset row as it appears in the CSV, before normalization.
#[derive(Debug, Deserialize)]
struct SegmentRecord {
    #[serde(rename = "DDA_pos", default)]
    source_position: String,
    #[serde(rename = "DDA_para", default)]
    source_paragraph: String,
    #[serde(rename = "text_DDA", default)]
    source_text: String,
    #[serde(rename = "DA_pos", default)]
    target_position: String,
    #[serde(rename = "DA_para", default)]
    target_paragraph: String,
    #[serde(rename = "text_DA", default)]
    target_text: String,
}

impl SegmentRecord {
    fn into_pair(self) -> SegmentPair {
        SegmentPair::new(
            &normalize_field(&self.source_position),
            &normalize_field(&self.source_paragraph),
            &normalize_field(&self.source_text),
            &normalize_field(&self.target_position),
            &normalize_field(&self.target_paragraph),
            &normalize_field(&self.target_text),
        )
    }
}

/// Map null markers to the empty string and NFC-normalize everything else.
///
/// # Examples
/// ```
/// use da_synopsis::loader::normalize_field;
///
/// assert_eq!(normalize_field("NaN"), "");
/// assert_eq!(normalize_field("Art5"), "Art5");
/// ```
#[must_use]
pub fn normalize_field(value: &str) -> String {
    if NULL_MARKERS.contains(&value) {
        String::new()
    } else {
        value.nfc().collect()
    }
}

/// Load segment pairs from a CSV file, in row order.
pub fn load_segments(path: &Path) -> Result<Vec<SegmentPair>> {
    if !path.exists() {
        return Err(SynopsisError::InputNotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path)?;
    let segments = read_segments(file, path)?;

    tracing::info!(rows = segments.len(), path = %path.display(), "Loaded dataset");
    Ok(segments)
}

/// Read segment pairs from any CSV source.
///
/// `origin` is only used in error messages.
pub fn read_segments<R: Read>(reader: R, origin: &Path) -> Result<Vec<SegmentPair>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(SynopsisError::MissingColumn {
                column: column.to_string(),
                path: origin.to_path_buf(),
            });
        }
    }

    let mut segments = Vec::new();
    for record in csv_reader.records() {
        let mut record = record?;
        // Short rows read as empty trailing fields
        while record.len() < headers.len() {
            record.push_field("");
        }
        let record: SegmentRecord = record.deserialize(Some(&headers))?;
        segments.push(record.into_pair());
    }
    Ok(segments)
}
