//! Transcript Layout - timing and layout core for transcript-driven typography
//!
//! This library aligns text groupings against a word-level timestamped
//! transcript and packs rendered words into a fixed-size frame. Building the
//! actual scene (nodes, keyframes, compositing) is left to the host.
//!
//! # Example
//!
//! ```rust
//! use transcript_layout::align::align;
//! use transcript_layout::transcript::TranscriptWord;
//!
//! let transcript = vec![
//!     TranscriptWord::new("need", 0.0, 0.3),
//!     TranscriptWord::new("to", 0.3, 0.4),
//!     TranscriptWord::new("know", 0.4, 0.7),
//! ];
//! let report = align(&transcript, ["Need to", "know."]);
//! assert_eq!(report.results.len(), 2);
//! assert_eq!(report.results[1].start_time, 0.4);
//! ```

pub mod align;
pub mod config;
pub mod error;
pub mod groupings;
pub mod input;
pub mod layout;
pub mod transcript;

use std::path::Path;

pub use align::{AlignmentMiss, AlignmentReport, AlignmentResult, Aligner};
pub use config::ProjectConfig;
pub use error::{ConfigError, InputError};
pub use groupings::{wrap_lines, Grouping};
pub use input::InputFormat;
pub use layout::{Container, PackedLayout, PackingConfig, Placement, TextStyle};
pub use transcript::TranscriptWord;

/// Load both input files and align them
///
/// Fails only when an input cannot be read or decoded; unmatched groupings
/// are reported in [`AlignmentReport::misses`].
pub fn try_align_files(
    groupings_path: &Path,
    transcript_path: &Path,
) -> Result<(Vec<Grouping>, AlignmentReport), InputError> {
    let transcript = transcript::load(transcript_path)?;
    let groupings = groupings::load(groupings_path)?;
    let report = Aligner::new(&transcript).align(&groupings);
    Ok((groupings, report))
}

/// Load both input files and align them, logging instead of failing
///
/// Unreadable or malformed input yields an empty list.
pub fn align_files(groupings_path: &Path, transcript_path: &Path) -> Vec<AlignmentResult> {
    match try_align_files(groupings_path, transcript_path) {
        Ok((_, report)) => report.into_results(),
        Err(e) => {
            tracing::error!(error = %e, "alignment input could not be loaded");
            Vec::new()
        }
    }
}

/// Pack words using `config` and convert the result to host coordinates
pub fn layout_words<I, S, M>(words: I, config: &PackingConfig, measure: &M) -> Vec<Placement>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    M: layout::MeasureText + ?Sized,
{
    layout::pack_with_config(words, config, measure).placements()
}
