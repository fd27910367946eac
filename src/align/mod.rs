//! Transcript alignment
//!
//! Matches ordered text groupings against a word-level transcript to recover
//! the start and end time of each grouping. Matching is exact on normalized
//! words (see [`normalize_word`]) and proceeds left to right: each grouping is
//! searched for at or after the end of the previous match.

pub mod aligner;
pub mod normalize;
pub mod types;

pub use aligner::{align, Aligner};
pub use normalize::{normalize_word, normalize_words};
pub use types::{AlignmentMiss, AlignmentReport, AlignmentResult, LineTiming};
