use super::transformers::{
    CodeSpanTransformer, HeaderTransformer, ImageTransformer, InnerUnderscoreEscaper,
    ItalicTransformer, LineTransformer, LinkTransformer, ListTransformer,
    StrikethroughTransformer,
};

/// The ordered chain of transformers for one document.
///
/// Each line runs through every stage in turn; a stage sees the output of the
/// stage before it. The order is load-bearing:
///
/// 1. underscores are escaped while links still carry their journal syntax,
///    so link targets are recognised and skipped,
/// 2. links and images are rewritten before any inline delimiter pairing,
/// 3. headers are line-level and run early,
/// 4. code spans, italics and strikethrough pair inline delimiters,
/// 5. lists run last, on leading whitespace no earlier stage has touched.
pub struct Pipeline {
    header_padding: usize,
    stages: Vec<Box<dyn LineTransformer>>,
}

impl Pipeline {
    /// Creates a pipeline with fresh state for a new document.
    pub fn new(header_padding: usize) -> Self {
        log::debug!("creating formatting pipeline with header padding {header_padding}");
        Self {
            header_padding,
            stages: vec![
                Box::new(InnerUnderscoreEscaper),
                Box::new(LinkTransformer),
                Box::new(ImageTransformer),
                Box::new(HeaderTransformer::new(header_padding)),
                Box::new(CodeSpanTransformer),
                Box::new(ItalicTransformer),
                Box::new(StrikethroughTransformer),
                Box::new(ListTransformer::new()),
            ],
        }
    }

    pub fn header_padding(&self) -> usize {
        self.header_padding
    }

    /// Formats the next line of the current document.
    pub fn format_line(&mut self, line: &str) -> String {
        self.stages
            .iter_mut()
            .fold(line.to_string(), |line, stage| stage.transform(&line))
    }

    /// Marks a document boundary: state from earlier lines is dropped.
    pub fn reset(&mut self) {
        for stage in &mut self.stages {
            stage.reset();
        }
    }
}

/// Formats one journal entry as Markdown.
///
/// Every line is right-trimmed before formatting. A fresh pipeline is used,
/// so no list numbering leaks between entries.
pub fn format_entry(raw_text: &str, header_padding: usize) -> String {
    let mut pipeline = Pipeline::new(header_padding);
    raw_text
        .split('\n')
        .map(|line| pipeline.format_line(line.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(r#"[home ""http://example.com""]"#, "[home](http://example.com)")]
    #[case("//hello// world", "_hello_ world")]
    #[case("--done yesterday.--", "**OBSOLETE**(done yesterday)")]
    #[case("=Title=", "## Title")]
    #[case("a_b", r"a\_b")]
    #[case(r#"[x ""http://a_b.com""]"#, "[x](http://a_b.com)")]
    #[case(r#"[""http://a.com/cat_1.png""]"#, "![](http://a.com/cat_1.png)")]
    #[case("//snake_case//", r"_snake\_case_")]
    #[case("``a_b //c//``", "`a_b //c//`")]
    #[case("----", "----")]
    #[case(
        r#"[a ""http://a.com//x""] and [b ""http://b.com//y""]"#,
        "[a](http://a.com//x) and [b](http://b.com//y)"
    )]
    #[case(
        r#"[a ""http://a--b.com""] --gone-- [c ""http://c--d.com""]"#,
        "[a](http://a--b.com) **OBSOLETE**(gone) [c](http://c--d.com)"
    )]
    #[case(r#"=See [docs ""http://d.com/a_b""]="#, "## See [docs](http://d.com/a_b)")]
    #[case("+ //first// item", "1. _first_ item")]
    #[case("trailing spaces   ", "trailing spaces")]
    fn formats_single_lines(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(format_entry(line, 1), expected);
    }

    #[test]
    fn formats_nested_ordered_lists() {
        let entry = "+ a\n+ b\n  + sub\n+ c";
        assert_eq!(format_entry(entry, 1), "1. a\n2. b\n  1. sub\n3. c");
    }

    #[test]
    fn two_blank_lines_restart_numbering() {
        let entry = "+ a\n\n\n+ b";
        assert_eq!(format_entry(entry, 1), "1. a\n\n\n1. b");
    }

    #[test]
    fn windows_line_endings_are_trimmed() {
        assert_eq!(format_entry("=T=\r\n+ a\r\n", 0), "# T\n1. a\n");
    }

    #[test]
    fn entries_do_not_share_state() {
        assert_eq!(format_entry("+ a\n+ b", 0), "1. a\n2. b");
        assert_eq!(format_entry("+ c", 0), "1. c");
    }

    #[test]
    fn reset_starts_a_new_document() {
        let mut pipeline = Pipeline::new(1);
        assert_eq!(pipeline.format_line("+ a"), "1. a");
        assert_eq!(pipeline.format_line("+ b"), "2. b");
        pipeline.reset();
        assert_eq!(pipeline.format_line("+ c"), "1. c");
        assert_eq!(pipeline.header_padding(), 1);
    }

    #[test]
    fn empty_entry_is_empty() {
        assert_eq!(format_entry("", 1), "");
    }

    #[test]
    fn formats_a_whole_entry() {
        let entry = r#"=Work=
Reviewed //three// pull requests for [the repo ""https://example.com/my_repo""].
--Fix the flaky test.--
+ write ``cargo test`` fixtures
+ update snake_case names
  - check ``some_var``
  + nested step
+ ship it

==Notes==
[""https://example.com/chart_1.png""]
-----"#;

        insta::assert_snapshot!(format_entry(entry, 1), @r"
## Work
Reviewed _three_ pull requests for [the repo](https://example.com/my_repo).
**OBSOLETE**(Fix the flaky test)
1. write `cargo test` fixtures
2. update snake\_case names
  - check `some_var`
  1. nested step
3. ship it

### Notes
![](https://example.com/chart_1.png)
-----
");
    }
}
