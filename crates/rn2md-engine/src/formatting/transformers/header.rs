use super::LineTransformer;

/// Transforms `=Title=` into `# Title`.
///
/// The opening and closing runs of `=` must have the same length, which sets
/// the header level. `padding` extra levels are added to every header so
/// that a heading the caller emits above the document outranks them all.
#[derive(Debug, Default)]
pub struct HeaderTransformer {
    padding: usize,
}

impl HeaderTransformer {
    pub const DELIM: u8 = b'=';

    pub fn new(padding: usize) -> Self {
        Self { padding }
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Returns the header level of `line`, if it is a header.
    fn level(line: &str) -> Option<usize> {
        let leading = line.bytes().take_while(|&b| b == Self::DELIM).count();
        if leading == 0 || leading == line.len() {
            return None;
        }
        let trailing = line.bytes().rev().take_while(|&b| b == Self::DELIM).count();
        (trailing == leading).then_some(leading)
    }
}

impl LineTransformer for HeaderTransformer {
    fn transform(&mut self, line: &str) -> String {
        let Some(level) = Self::level(line) else {
            return line.to_string();
        };
        let title = line[level..line.len() - level].trim();
        format!("{} {}", "#".repeat(self.padding + level), title)
    }
}
