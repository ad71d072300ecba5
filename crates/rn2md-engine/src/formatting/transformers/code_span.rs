use std::sync::OnceLock;

use regex::Regex;

use super::LineTransformer;
use crate::formatting::{
    balanced::{Replacement, substitute_balanced},
    protect::LINK_ONLY,
    span::Span,
};

fn delimiter() -> &'static Regex {
    static CODE_DELIM_REGEX: OnceLock<Regex> = OnceLock::new();
    CODE_DELIM_REGEX.get_or_init(|| Regex::new("``").expect("Invalid code span delimiter regex"))
}

/// Matches a code span in either the journal (double tick) or the Markdown
/// (single tick) form.
fn region_pattern() -> &'static Regex {
    static CODE_REGION_REGEX: OnceLock<Regex> = OnceLock::new();
    CODE_REGION_REGEX
        .get_or_init(|| Regex::new(r"``.*?``|`.*?`").expect("Invalid code span region regex"))
}

/// Spans of every code span in `line`, delimiters included.
pub(crate) fn regions(line: &str) -> impl Iterator<Item = Span> + '_ {
    region_pattern().find_iter(line).map(Span::from)
}

/// Transforms ``` ``code`` ``` into `` `code` ``.
///
/// Only link targets are protected: a code span may not split a url, but it
/// may of course contain other inline markup.
#[derive(Debug, Default)]
pub struct CodeSpanTransformer;

impl LineTransformer for CodeSpanTransformer {
    fn transform(&mut self, line: &str) -> String {
        substitute_balanced(delimiter(), Replacement::symmetric("`"), line, LINK_ONLY)
    }
}
