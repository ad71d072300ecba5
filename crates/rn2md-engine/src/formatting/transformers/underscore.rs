use super::LineTransformer;
use crate::formatting::{
    protect::{LINK_AND_CODE, is_protected},
    span::Span,
};

/// Escapes underscores sitting between two word characters, e.g. `a_b` →
/// `a\_b`, so Markdown renderers do not read them as emphasis.
///
/// Underscores inside link targets or code spans are left alone.
#[derive(Debug, Default)]
pub struct InnerUnderscoreEscaper;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Spans of every underscore with a word character on both sides.
fn inner_underscores(line: &str) -> Vec<Span> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    chars
        .windows(3)
        .filter(|w| w[1].1 == '_' && is_word_char(w[0].1) && is_word_char(w[2].1))
        .map(|w| Span::new(w[1].0, w[1].0 + 1))
        .collect()
}

impl LineTransformer for InnerUnderscoreEscaper {
    fn transform(&mut self, line: &str) -> String {
        let mut out = line.to_string();
        for span in inner_underscores(line)
            .into_iter()
            .rev()
            .filter(|&span| !is_protected(line, span, LINK_AND_CODE))
        {
            out.insert(span.start, '\\');
        }
        out
    }
}
