use std::sync::OnceLock;

use regex::Regex;

use super::LineTransformer;
use crate::formatting::{
    balanced::{Replacement, substitute_balanced},
    protect::LINK_AND_CODE,
};

fn delimiter() -> &'static Regex {
    static ITALIC_DELIM_REGEX: OnceLock<Regex> = OnceLock::new();
    ITALIC_DELIM_REGEX.get_or_init(|| Regex::new("//").expect("Invalid italic delimiter regex"))
}

/// Transforms `//text//` into `_text_`.
#[derive(Debug, Default)]
pub struct ItalicTransformer;

impl LineTransformer for ItalicTransformer {
    fn transform(&mut self, line: &str) -> String {
        substitute_balanced(delimiter(), Replacement::symmetric("_"), line, LINK_AND_CODE)
    }
}
