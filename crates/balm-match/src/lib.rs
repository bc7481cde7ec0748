//! # balm-match
//!
//! Matching pipeline for the balm engine: normalizes raw user text, scores
//! it against the keyword table with a bag-of-words cosine matcher, and
//! falls back to whole-string bigram similarity when the vector space is
//! too sparse to say anything.
//!
//! Every call is stateless and idempotent given identical inputs; the only
//! shared resource is the immutable [`KeywordIndex`].

pub mod lexical;
pub mod resolver;
pub mod text;
pub mod vector;
pub mod vocabulary;

pub use resolver::Resolver;
pub use vocabulary::KeywordIndex;
