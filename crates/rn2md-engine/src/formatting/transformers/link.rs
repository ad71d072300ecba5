use std::sync::OnceLock;

use regex::Regex;

use super::LineTransformer;

/// Matches `[caption ""url""]`. Group 1 is the caption, group 2 the url.
pub(crate) fn source_pattern() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(r#"\[([^\]]*?) ""(.*?)""\]"#).expect("Invalid link regex"))
}

/// Matches an already rewritten Markdown link or image. Group 1 is the url.
pub(crate) fn markdown_pattern() -> &'static Regex {
    static MARKDOWN_LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    MARKDOWN_LINK_REGEX.get_or_init(|| {
        Regex::new(r"!?\[[^\]]*\]\(([^)]*)\)").expect("Invalid markdown link regex")
    })
}

/// Transforms `[caption ""url""]` into `[caption](url)`.
#[derive(Debug, Default)]
pub struct LinkTransformer;

impl LineTransformer for LinkTransformer {
    fn transform(&mut self, line: &str) -> String {
        source_pattern()
            .replace_all(line, "[${1}](${2})")
            .into_owned()
    }
}
