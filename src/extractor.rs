use lazy_static::lazy_static;
use regex::{CaptureMatches, Regex};
use serde::Serialize;

lazy_static! {
    /// Matches a JSX style attribute whose value is a single-level object
    /// literal. `[^}]*` deliberately stops at the first closing brace, so
    /// object literals containing nested braces (function calls, nested
    /// objects) are not matched past it.
    static ref STYLE_ATTR: Regex = Regex::new(r"style=\{\{([^}]*)\}\}").unwrap();
}

/// One matched inline-style expression with its source location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleOccurrence {
    /// The full matched text, e.g. `style={{ padding: '16px' }}`
    pub text: String,

    /// The inner object-literal text, without the `style={` / `}` wrapper
    pub body: String,

    /// Byte offset of the match start in the source
    pub offset: usize,

    /// Byte offset one past the match end
    pub end: usize,

    /// Line number in the source (1-indexed)
    pub line: usize,

    /// Column of the match start within its line (1-indexed)
    pub column: usize,

    /// Full text of the line containing the match (for display)
    pub line_text: String,
}

/// Lazy iterator over the inline-style occurrences of one source text.
///
/// Matching is non-overlapping and left-to-right; the iterator is finite and
/// a fresh one can be created from the same source at any time.
pub struct InlineStyles<'s> {
    source: &'s str,
    matches: CaptureMatches<'static, 's>,
}

impl<'s> Iterator for InlineStyles<'s> {
    type Item = StyleOccurrence;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.matches.next()?;
        let whole = caps.get(0).expect("capture 0 always present");
        let body = caps.get(1).expect("style body capture");
        Some(occurrence_at(self.source, whole.as_str(), body.as_str(), whole.start()))
    }
}

/// Scan source text for `style={{...}}` attributes
pub fn find_inline_styles(source: &str) -> InlineStyles<'_> {
    InlineStyles {
        source,
        matches: STYLE_ATTR.captures_iter(source),
    }
}

/// Eagerly collect every occurrence in source order
pub fn collect_inline_styles(source: &str) -> Vec<StyleOccurrence> {
    find_inline_styles(source).collect()
}

fn occurrence_at(source: &str, text: &str, body: &str, offset: usize) -> StyleOccurrence {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    StyleOccurrence {
        text: text.to_string(),
        body: body.to_string(),
        offset,
        end: offset + text.len(),
        line,
        column: offset - line_start + 1,
        line_text: source[line_start..line_end].to_string(),
    }
}
