//! Numerus Names
//!
//! Classifies free text against a fixed list of known names. Text is
//! case-folded, stripped of punctuation and split on whitespace; a match is
//! any word that is a known name.

mod error;
mod list;
mod normalize;

pub use error::{NameListError, NameListResult};
pub use list::NameList;
pub use normalize::{normalize, tokenize};
