//! Core data types for the synopsis generator.
//!
//! A dataset row pairs a segment of the draft act with the aligned segment
//! of the adopted act. Structural positions are parsed once into a
//! [`PositionRef`] so later stages never re-run the identifier patterns.

use crate::config::{
    ARTICLE_MARKER, ARTICLE_PATTERN, EXPLANATORY_MARKER, RECITAL_PATTERN, TITLE_MARKER,
};

/// Kind of structural identifier found in a position label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// Article of the enacting terms.
    Article,

    /// Recital of the preamble.
    Recital,
}

impl IdentifierKind {
    /// Heading word used in section headings and the table of contents.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::Recital => "Recital",
        }
    }
}

/// An article or recital identifier such as `Art5a` or `Rec12`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub kind: IdentifierKind,

    /// The matched token, verbatim. Doubles as the HTML anchor id.
    pub key: String,
}

impl Identifier {
    /// Human-readable heading.
    ///
    /// # Examples
    /// ```
    /// use da_synopsis::types::{Identifier, IdentifierKind};
    ///
    /// let id = Identifier { kind: IdentifierKind::Article, key: "Art5a".to_string() };
    /// assert_eq!(id.label(), "Article 5a");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.kind.heading(), skip_chars(&self.key, 3))
    }
}

/// A structural position label, parsed once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionRef {
    raw: String,
    article: Option<Identifier>,
    recital: Option<Identifier>,
}

impl PositionRef {
    /// Parse a raw position label such as `Art5`, `Rec12` or `title`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let article = ARTICLE_PATTERN.find(raw).map(|m| Identifier {
            kind: IdentifierKind::Article,
            key: m.as_str().to_string(),
        });
        let recital = RECITAL_PATTERN.find(raw).map(|m| Identifier {
            kind: IdentifierKind::Recital,
            key: m.as_str().to_string(),
        });

        Self {
            raw: raw.to_string(),
            article,
            recital,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[must_use]
    pub fn article(&self) -> Option<&Identifier> {
        self.article.as_ref()
    }

    #[must_use]
    pub fn recital(&self) -> Option<&Identifier> {
        self.recital.as_ref()
    }

    /// Identifiers in anchor priority order: article first, then recital.
    pub fn identifiers(&self) -> impl Iterator<Item = &Identifier> {
        self.article.iter().chain(self.recital.iter())
    }

    /// Position belongs to the explanatory memorandum.
    #[must_use]
    pub fn is_explanatory(&self) -> bool {
        self.contains_marker(EXPLANATORY_MARKER)
    }

    /// Position is the act's title, which opens the recitals.
    #[must_use]
    pub fn is_title(&self) -> bool {
        self.contains_marker(TITLE_MARKER)
    }

    /// Position lies within the articles.
    #[must_use]
    pub fn is_article(&self) -> bool {
        self.contains_marker(ARTICLE_MARKER)
    }

    fn contains_marker(&self, marker: &str) -> bool {
        self.raw.to_lowercase().contains(marker)
    }

    /// Display form: `Art5` becomes `Art. 5`, other labels are kept verbatim.
    ///
    /// # Examples
    /// ```
    /// use da_synopsis::types::PositionRef;
    ///
    /// assert_eq!(PositionRef::parse("Art5").display(), "Art. 5");
    /// assert_eq!(PositionRef::parse("Rec12").display(), "Rec. 12");
    /// assert_eq!(PositionRef::parse("title").display(), "title");
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        if self.raw.contains("Art") || self.raw.contains("Rec") {
            let prefix_len = self
                .raw
                .char_indices()
                .nth(3)
                .map_or(self.raw.len(), |(i, _)| i);
            format!("{}. {}", &self.raw[..prefix_len], &self.raw[prefix_len..])
        } else {
            self.raw.clone()
        }
    }
}

/// One side of an aligned row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub position: PositionRef,

    /// Paragraph label, `title`, or empty.
    pub paragraph: String,

    pub text: String,
}

/// One dataset row: a draft segment aligned with its adopted counterpart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentPair {
    /// Draft (DDA) side.
    pub source: Segment,

    /// Adopted (DA) side.
    pub target: Segment,
}

impl SegmentPair {
    /// Build a pair from the six raw column values.
    #[must_use]
    pub fn new(
        source_position: &str,
        source_paragraph: &str,
        source_text: &str,
        target_position: &str,
        target_paragraph: &str,
        target_text: &str,
    ) -> Self {
        Self {
            source: Segment {
                position: PositionRef::parse(source_position),
                paragraph: source_paragraph.to_string(),
                text: source_text.to_string(),
            },
            target: Segment {
                position: PositionRef::parse(target_position),
                paragraph: target_paragraph.to_string(),
                text: target_text.to_string(),
            },
        }
    }

    /// Segment only exists in the adopted act.
    #[must_use]
    pub fn is_added(&self) -> bool {
        self.source.position.is_empty()
    }

    /// Segment was dropped from the adopted act.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.target.position.is_empty()
    }
}

/// Skip the first `n` characters of `s`.
fn skip_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(i, _)| &s[i..])
}
