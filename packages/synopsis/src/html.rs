//! HTML helpers: escaping and highlight spans.
//!
//! Dataset text is either trusted markup (passed through) or plain text
//! (escaped). [`TextMode`] carries that decision through every renderer so
//! the two are never mixed up.

use std::borrow::Cow;

/// How dataset text is inserted into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    /// Text already contains markup and is inserted verbatim.
    #[default]
    Raw,

    /// Text is escaped before insertion.
    Escaped,
}

impl TextMode {
    #[must_use]
    pub fn from_escape_flag(escape: bool) -> Self {
        if escape {
            Self::Escaped
        } else {
            Self::Raw
        }
    }

    /// Apply this mode to a piece of dataset text.
    #[must_use]
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Raw => Cow::Borrowed(text),
            Self::Escaped => escape_html(text),
        }
    }
}

/// Escape the five HTML-significant characters.
///
/// # Examples
/// ```
/// use da_synopsis::html::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Wrap already-rendered content in a background-colored span.
#[must_use]
pub fn highlight(content: &str, color: &str) -> String {
    format!(r#"<span style="background-color: {color};">{content}</span>"#)
}
