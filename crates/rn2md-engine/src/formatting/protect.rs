//! Protected regions.
//!
//! A delimiter found inside a link target or a code span is literal text and
//! must survive every inline rewrite. Each predicate re-scans the whole line
//! it is handed, so it always sees the line as it stands at the current
//! pipeline stage. Nothing is cached between calls.

use regex::Regex;

use super::{
    span::Span,
    transformers::{code_span, image, link},
};

/// Returns true when the match at `span` in `line` must be left alone.
pub type Predicate = fn(&str, Span) -> bool;

/// Protection used by most inline rewrites.
pub const LINK_AND_CODE: &[Predicate] = &[in_link, in_code];

/// Protection for rewrites that may themselves produce code spans.
pub const LINK_ONLY: &[Predicate] = &[in_link];

/// True iff `span` intersects the target URL of any link or image in `line`.
///
/// Both the journal syntax (`[caption ""url""]`, `[""url""]`) and the
/// rewritten Markdown forms (`[caption](url)`, `![](url)`) are recognised.
pub fn in_link(line: &str, span: Span) -> bool {
    link_targets(line).any(|target| span.intersects(target))
}

/// True iff `span` intersects any back-tick delimited region in `line`.
pub fn in_code(line: &str, span: Span) -> bool {
    code_span::regions(line).any(|region| span.intersects(region))
}

/// True iff any of `predicates` protects `span`.
pub fn is_protected(line: &str, span: Span, predicates: &[Predicate]) -> bool {
    predicates.iter().any(|protects| protects(line, span))
}

/// Yields the matches of `pattern` in `line` that no predicate protects, in
/// order of appearance.
pub fn unprotected_matches<'a>(
    pattern: &'a Regex,
    line: &'a str,
    predicates: &'a [Predicate],
) -> impl Iterator<Item = Span> + 'a {
    pattern
        .find_iter(line)
        .map(Span::from)
        .filter(move |&span| !is_protected(line, span, predicates))
}

fn link_targets(line: &str) -> impl Iterator<Item = Span> + '_ {
    let links = link::source_pattern()
        .captures_iter(line)
        .filter_map(|caps| caps.get(2));
    let images = image::source_pattern()
        .captures_iter(line)
        .filter_map(|caps| caps.get(1));
    let rendered = link::markdown_pattern()
        .captures_iter(line)
        .filter_map(|caps| caps.get(1));

    links.chain(images).chain(rendered).map(Span::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn span_of(line: &str, needle: &str) -> Span {
        let start = line.find(needle).unwrap();
        Span::new(start, start + needle.len())
    }

    #[rstest]
    #[case(r#"[home ""http://a_b.com""]"#, "_", true)]
    #[case(r#"[""http://a_b.png""]"#, "_", true)]
    #[case("[home](http://a_b.com)", "_", true)]
    #[case("![](http://a_b.png)", "_", true)]
    #[case(r#"[my_home ""http://example.com""]"#, "_", false)]
    #[case("plain a_b text", "_", false)]
    fn in_link_only_covers_targets(
        #[case] line: &str,
        #[case] needle: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(in_link(line, span_of(line, needle)), expected);
    }

    #[rstest]
    #[case("see `a_b` here", "_", true)]
    #[case("see ``a_b`` here", "_", true)]
    #[case("a_b then `code`", "_", false)]
    #[case("unclosed `a_b", "_", false)]
    fn in_code_covers_backtick_regions(
        #[case] line: &str,
        #[case] needle: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(in_code(line, span_of(line, needle)), expected);
    }

    #[test]
    fn delimiter_touching_code_span_is_protected() {
        let line = "`x`--";
        assert!(in_code(line, Span::new(3, 5)));
    }

    #[test]
    fn either_predicate_protects() {
        let line = "`a--b` and --c--";
        let first = span_of(line, "--");
        assert!(is_protected(line, first, LINK_AND_CODE));
        assert!(!is_protected(line, first, LINK_ONLY));
    }

    #[test]
    fn unprotected_matches_skips_link_targets() {
        let pattern = Regex::new("//").unwrap();
        let line = r#"//a// [x ""http://b.com""]"#;
        let found: Vec<Span> = unprotected_matches(&pattern, line, LINK_AND_CODE).collect();
        assert_eq!(found, vec![Span::new(0, 2), Span::new(3, 5)]);
    }
}
