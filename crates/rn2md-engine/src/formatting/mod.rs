//! # Formatting
//!
//! Line-by-line conversion of journal markup into Markdown.
//!
//! ## Modules
//!
//! - **`span`**: `Span` byte ranges and their intersection test
//! - **`protect`**: predicates deciding whether a match sits inside a link
//!   target or a code span
//! - **`balanced`**: pairing and substitution of balanced inline delimiters
//! - **`transformers`**: one `LineTransformer` per construct
//! - **`pipeline`**: the fixed transformer order and `format_entry()`
//!
//! ## Protected Regions
//!
//! Inline delimiters inside link targets or code spans are literal text:
//! `[x ""http://a_b.com""]` keeps its underscore, and `` `a--b--c` `` is not
//! struck through. Protection is decided against the line as it stands when
//! each transformer runs.

pub mod balanced;
pub mod pipeline;
pub mod protect;
pub mod span;
pub mod transformers;

pub use pipeline::{Pipeline, format_entry};
pub use span::Span;
pub use transformers::LineTransformer;
