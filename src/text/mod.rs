//! Rules text interpretation.
//!
//! - [`tokenize`]: Uppercased words, numbers, and separators
//! - [`Words`]: Word-capability view detectors query
//! - [`classify`]: Trigger condition, effects, and "may" flag from text
//! - [`fill_card_from_text`] / [`AbilityDraft`]: Fill structured fields
//!   the document left empty
//!
//! Classification is pure: the same text always yields the same result.

mod classifier;
mod fallback;
mod tokenizer;
mod words;

pub use classifier::{classify, classify_clause, Classification};
pub use fallback::{fill_card_from_text, AbilityDraft};
pub use tokenizer::{tokenize, Token};
pub use words::{parse_buff, Words};
