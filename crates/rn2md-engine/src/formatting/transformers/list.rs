use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use super::LineTransformer;

/// Matches a list item. Group 1 is the marker; its offset is the depth.
fn item_pattern() -> &'static Regex {
    static LIST_ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
    LIST_ITEM_REGEX.get_or_init(|| Regex::new(r"^\s*([-+])\s").expect("Invalid list item regex"))
}

/// Transforms ordered list items (`+ item`) into numbered Markdown items.
///
/// Unordered items (`- item`) are already valid Markdown and pass through.
///
/// Numbering is tracked per depth (the column of the marker). Seeing an item
/// at some depth restarts every deeper sub-list. Two consecutive blank lines,
/// or any non-blank line that is not a list item, end the list entirely.
#[derive(Debug, Default)]
pub struct ListTransformer {
    /// Next ordinal to emit, keyed by marker depth. Absent means 1.
    ordinals: BTreeMap<usize, usize>,
    /// Consecutive blank lines seen so far.
    blank_run: usize,
}

impl ListTransformer {
    pub const ORDERED: &'static str = "+";

    pub fn new() -> Self {
        Self::default()
    }

    fn clear(&mut self) {
        self.ordinals.clear();
    }
}

impl LineTransformer for ListTransformer {
    fn transform(&mut self, line: &str) -> String {
        let marker = item_pattern().captures(line).and_then(|caps| caps.get(1));

        let Some(marker) = marker else {
            if line.trim().is_empty() {
                self.blank_run += 1;
                if self.blank_run >= 2 {
                    self.clear();
                }
            } else {
                self.blank_run = 0;
                self.clear();
            }
            return line.to_string();
        };

        let depth = marker.start();
        self.blank_run = 0;
        // Sub-lists restart from 1 when next entered.
        self.ordinals.split_off(&(depth + 1));

        if marker.as_str() != Self::ORDERED {
            return line.to_string();
        }

        let ordinal = self.ordinals.entry(depth).or_insert(1);
        let out = format!("{}{}.{}", &line[..depth], ordinal, &line[marker.end()..]);
        *ordinal += 1;
        out
    }

    fn reset(&mut self) {
        self.clear();
        self.blank_run = 0;
    }
}
