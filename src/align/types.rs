//! Result types produced by the aligner

use std::ops::Range;

use serde::Serialize;

use crate::transcript::TranscriptWord;

/// A grouping located in the transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentResult {
    /// The grouping text as given, before normalization
    pub grouping: String,
    /// Position of the grouping in the input list
    pub grouping_index: usize,
    pub start_time: f64,
    pub end_time: f64,
    /// Matched transcript indices, end exclusive
    pub word_range: Range<usize>,
    /// The matched transcript words, in order
    pub words: Vec<TranscriptWord>,
}

impl AlignmentResult {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Distribute the matched words over wrapped display lines
    ///
    /// Each line takes as many words as it contains, in order. Lines left
    /// without words (when `lines` holds more words than the match) are omitted.
    pub fn line_timings<S: AsRef<str>>(&self, lines: &[S]) -> Vec<LineTiming> {
        let mut timings = Vec::with_capacity(lines.len());
        let mut remaining = self.words.as_slice();

        for line in lines {
            let line = line.as_ref();
            let count = line.split_whitespace().count().min(remaining.len());
            if count == 0 {
                continue;
            }
            let (taken, rest) = remaining.split_at(count);
            remaining = rest;
            timings.push(LineTiming {
                text: line.to_string(),
                start_time: taken[0].start,
                end_time: taken[count - 1].end,
                words: taken.to_vec(),
            });
        }
        timings
    }
}

/// Timing of one wrapped line inside an aligned grouping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineTiming {
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
    pub words: Vec<TranscriptWord>,
}

/// A grouping that could not be located
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentMiss {
    pub grouping_index: usize,
    pub grouping: String,
    /// Transcript cursor at the time of the failed search
    pub cursor: usize,
}

/// Everything one alignment run produced
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AlignmentReport {
    pub results: Vec<AlignmentResult>,
    pub misses: Vec<AlignmentMiss>,
}

impl AlignmentReport {
    pub fn is_complete(&self) -> bool {
        self.misses.is_empty()
    }

    pub fn into_results(self) -> Vec<AlignmentResult> {
        self.results
    }
}
