use std::sync::OnceLock;

use regex::Regex;

use super::LineTransformer;

/// Matches `[""url""]`. Group 1 is the url.
pub(crate) fn source_pattern() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(r#"\[""(.*?)""\]"#).expect("Invalid image regex"))
}

/// Transforms `[""url""]` into `![](url)`.
#[derive(Debug, Default)]
pub struct ImageTransformer;

impl LineTransformer for ImageTransformer {
    fn transform(&mut self, line: &str) -> String {
        source_pattern().replace_all(line, "![](${1})").into_owned()
    }
}
