use regex::Regex;

use super::{
    protect::{Predicate, unprotected_matches},
    span::Span,
};

/// What a pair of delimiters is replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement<'a> {
    pub open: &'a str,
    pub close: &'a str,
}

impl<'a> Replacement<'a> {
    /// The same text replaces both the opening and closing delimiter.
    pub const fn symmetric(delim: &'a str) -> Self {
        Self {
            open: delim,
            close: delim,
        }
    }

    pub const fn pair(open: &'a str, close: &'a str) -> Self {
        Self { open, close }
    }
}

/// Replaces balanced, unprotected delimiter pairs in `line`.
///
/// Matches of `delim` that any of `predicates` protects are ignored. The rest
/// pair up positionally (first with second, third with fourth, ...); a
/// trailing unpaired delimiter stays as literal text.
pub fn substitute_balanced(
    delim: &Regex,
    replacement: Replacement<'_>,
    line: &str,
    predicates: &[Predicate],
) -> String {
    substitute_balanced_with(delim, replacement, line, predicates, verbatim)
}

/// Like [`substitute_balanced`], passing each delimited interior through
/// `content` before wrapping it.
pub fn substitute_balanced_with<F>(
    delim: &Regex,
    replacement: Replacement<'_>,
    line: &str,
    predicates: &[Predicate],
    content: F,
) -> String
where
    F: Fn(&str) -> &str,
{
    let delims: Vec<Span> = unprotected_matches(delim, line, predicates).collect();

    let mut out = line.to_string();
    // Rewrite back to front so offsets of earlier pairs stay valid.
    for pair in delims.chunks_exact(2).rev() {
        let (open, close) = (pair[0], pair[1]);
        let inner = content(&line[open.end..close.start]);
        let wrapped = format!("{}{}{}", replacement.open, inner, replacement.close);
        out.replace_range(open.start..close.end, &wrapped);
    }
    out
}

fn verbatim(s: &str) -> &str {
    s
}
