//! Position labels for the "from → to" header of each diff block.

use crate::config::{REFERENCE_CHANGED_COLOR, SOURCE_LABEL, TARGET_LABEL, TITLE_PARAGRAPH};
use crate::html::{highlight, TextMode};
use crate::types::{Segment, SegmentPair};

/// Which document version a label describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The draft act.
    Source,

    /// The adopted act.
    Target,
}

impl Side {
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Source => SOURCE_LABEL,
            Self::Target => TARGET_LABEL,
        }
    }
}

/// Plain label for one side, e.g. `Art. 5, paragraph 2 DDA`.
///
/// An empty position renders as nothing on the source side and as
/// `removed` on the target side.
///
/// # Examples
/// ```
/// use da_synopsis::html::TextMode;
/// use da_synopsis::label::{format_position, Side};
/// use da_synopsis::types::SegmentPair;
///
/// let pair = SegmentPair::new("Art5", "2", "", "", "", "");
/// assert_eq!(format_position(&pair.source, Side::Source, TextMode::Raw), "Art. 5, paragraph 2 DDA");
/// assert_eq!(format_position(&pair.target, Side::Target, TextMode::Raw), "removed");
/// ```
#[must_use]
pub fn format_position(segment: &Segment, side: Side, mode: TextMode) -> String {
    if segment.position.is_empty() {
        return match side {
            Side::Source => String::new(),
            Side::Target => "removed".to_string(),
        };
    }

    let position = mode.apply(&segment.position.display()).into_owned();
    let paragraph = match segment.paragraph.as_str() {
        TITLE_PARAGRAPH => " Title".to_string(),
        "" => String::new(),
        p => format!(", paragraph {}", mode.apply(p)),
    };
    format!("{position}{paragraph} {}", side.suffix())
}

/// Target-side label with changed references highlighted.
///
/// The position is highlighted when it differs from the source position,
/// the paragraph fragment when it differs from the source paragraph. Rows
/// without a source position have nothing to compare against and are never
/// highlighted.
#[must_use]
pub fn format_changed_position(source: &Segment, target: &Segment, mode: TextMode) -> String {
    if target.position.is_empty() {
        return format_position(target, Side::Target, mode);
    }

    let comparable = !source.position.is_empty();

    let mut position = mode.apply(&target.position.display()).into_owned();
    if comparable && source.position.raw() != target.position.raw() {
        position = highlight(&position, REFERENCE_CHANGED_COLOR);
    }

    let paragraph = match target.paragraph.as_str() {
        TITLE_PARAGRAPH => " Title".to_string(),
        "" => String::new(),
        p => {
            let fragment = format!("paragraph {}", mode.apply(p));
            if comparable && source.paragraph != target.paragraph {
                format!(", {}", highlight(&fragment, REFERENCE_CHANGED_COLOR))
            } else {
                format!(", {fragment}")
            }
        }
    };

    format!("{position}{paragraph} {}", Side::Target.suffix())
}

/// Header line for a row.
///
/// Removed segments read `{from} → removed`, added segments `→ {to}`.
#[must_use]
pub fn format_header(pair: &SegmentPair, mode: TextMode) -> String {
    if pair.is_removed() {
        let from = format_position(&pair.source, Side::Source, mode);
        format!("{from} → removed")
    } else if pair.is_added() {
        let to = format_changed_position(&pair.source, &pair.target, mode);
        format!("→ {to}")
    } else {
        let from = format_position(&pair.source, Side::Source, mode);
        let to = format_changed_position(&pair.source, &pair.target, mode);
        format!("{from} → {to}")
    }
}
