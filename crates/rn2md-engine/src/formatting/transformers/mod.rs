//! # Line Transformers
//!
//! Each transformer rewrites one journal construct into its Markdown form.
//! Transformers see exactly one line at a time; none of them handles markup
//! that spans lines.
//!
//! ## Kinds
//!
//! - **`InnerUnderscoreEscaper`**: `a_b` → `a\_b`
//! - **`LinkTransformer`**: `[caption ""url""]` → `[caption](url)`
//! - **`ImageTransformer`**: `[""url""]` → `![](url)`
//! - **`HeaderTransformer`**: `=Title=` → `# Title` (plus document padding)
//! - **`CodeSpanTransformer`**: ``` ``code`` ``` → `` `code` ``
//! - **`ItalicTransformer`**: `//text//` → `_text_`
//! - **`StrikethroughTransformer`**: `--text--` → `**OBSOLETE**(text)`
//! - **`ListTransformer`**: `+ item` → `1. item`, `- item` unchanged
//!
//! Header and List carry state across the lines of one document. Every
//! pattern lives in the module of the transformer that owns it.

pub mod code_span;
pub mod header;
pub mod image;
pub mod italic;
pub mod link;
pub mod list;
pub mod strikethrough;
pub mod underscore;

pub use code_span::CodeSpanTransformer;
pub use header::HeaderTransformer;
pub use image::ImageTransformer;
pub use italic::ItalicTransformer;
pub use link::LinkTransformer;
pub use list::ListTransformer;
pub use strikethrough::StrikethroughTransformer;
pub use underscore::InnerUnderscoreEscaper;

/// One stage of the formatting pipeline.
pub trait LineTransformer {
    /// Rewrites a single line. Input that does not match is returned unchanged.
    fn transform(&mut self, line: &str) -> String;

    /// Forgets any state carried from earlier lines.
    fn reset(&mut self) {}
}
