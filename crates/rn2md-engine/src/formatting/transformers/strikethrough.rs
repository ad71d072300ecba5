use std::sync::OnceLock;

use regex::Regex;

use super::LineTransformer;
use crate::formatting::{
    balanced::{Replacement, substitute_balanced_with},
    protect::LINK_AND_CODE,
};

const OBSOLETE: Replacement<'static> = Replacement::pair("**OBSOLETE**(", ")");

fn delimiter() -> &'static Regex {
    static STRIKE_DELIM_REGEX: OnceLock<Regex> = OnceLock::new();
    STRIKE_DELIM_REGEX
        .get_or_init(|| Regex::new("--").expect("Invalid strikethrough delimiter regex"))
}

fn trim_sentence_end(text: &str) -> &str {
    text.trim_end_matches(['.', '?', '!'])
}

/// Transforms `--text--` into `**OBSOLETE**(text)`.
///
/// A line made only of dashes is a horizontal rule and passes through.
#[derive(Debug, Default)]
pub struct StrikethroughTransformer;

impl LineTransformer for StrikethroughTransformer {
    fn transform(&mut self, line: &str) -> String {
        if !line.is_empty() && line.chars().all(|c| c == '-') {
            return line.to_string();
        }
        substitute_balanced_with(delimiter(), OBSOLETE, line, LINK_AND_CODE, trim_sentence_end)
    }
}
