//! Cursor-based sequential search of groupings in a transcript

use crate::transcript::TranscriptWord;

use super::normalize::{normalize_word, normalize_words};
use super::types::{AlignmentMiss, AlignmentReport, AlignmentResult};

/// Aligns groupings against one transcript
///
/// The transcript is normalized once at construction. Every call to
/// [`Aligner::align`] starts a fresh search from the first transcript word.
#[derive(Debug, Clone)]
pub struct Aligner<'a> {
    transcript: &'a [TranscriptWord],
    normalized: Vec<String>,
}

impl<'a> Aligner<'a> {
    pub fn new(transcript: &'a [TranscriptWord]) -> Self {
        let normalized = transcript
            .iter()
            .map(|word| normalize_word(&word.text))
            .collect();
        Self {
            transcript,
            normalized,
        }
    }

    /// Locate each grouping, in order, at or after the end of the previous match
    ///
    /// A grouping with no words is skipped silently. A grouping that cannot be
    /// found is recorded as a miss and leaves the cursor where it was.
    pub fn align<I, S>(&self, groupings: I) -> AlignmentReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = AlignmentReport::default();
        let mut cursor = 0;

        for (grouping_index, grouping) in groupings.into_iter().enumerate() {
            let text = grouping.as_ref();
            let needle = normalize_words(text);
            if needle.is_empty() {
                continue;
            }

            match self.find_from(cursor, &needle) {
                Some(start) => {
                    let end = start + needle.len();
                    let matched = &self.transcript[start..end];
                    let result = AlignmentResult {
                        grouping: text.to_string(),
                        grouping_index,
                        start_time: matched[0].start,
                        end_time: matched[matched.len() - 1].end,
                        word_range: start..end,
                        words: matched.to_vec(),
                    };
                    tracing::debug!(
                        grouping = %text,
                        start = start,
                        start_time = result.start_time,
                        end_time = result.end_time,
                        "aligned grouping"
                    );
                    report.results.push(result);
                    cursor = end;
                }
                None => {
                    tracing::warn!(
                        grouping = %text,
                        index = grouping_index,
                        cursor = cursor,
                        "grouping not found in remaining transcript"
                    );
                    report.misses.push(AlignmentMiss {
                        grouping_index,
                        grouping: text.to_string(),
                        cursor,
                    });
                }
            }
        }

        report
    }

    /// Leftmost position `>= cursor` where `needle` matches the normalized transcript
    fn find_from(&self, cursor: usize, needle: &[String]) -> Option<usize> {
        let len = needle.len();
        if len == 0 || len > self.normalized.len() {
            return None;
        }
        let last_start = self.normalized.len() - len;
        (cursor..=last_start).find(|&i| self.normalized[i..i + len] == *needle)
    }
}

/// Align `groupings` against `transcript` in one call
pub fn align<I, S>(transcript: &[TranscriptWord], groupings: I) -> AlignmentReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Aligner::new(transcript).align(groupings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word(text: &str, start: f64, end: f64) -> TranscriptWord {
        TranscriptWord::new(text, start, end)
    }

    fn need_to_know() -> Vec<TranscriptWord> {
        vec![
            word("need", 0.0, 0.3),
            word("to", 0.3, 0.4),
            word("know", 0.4, 0.7),
            word("need", 1.0, 1.3),
        ]
    }

    #[test]
    fn test_repeated_word_matches_after_cursor() {
        let transcript = need_to_know();
        let report = align(&transcript, ["need to", "need"]);

        assert!(report.is_complete());
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].word_range, 0..2);
        assert_eq!(
            (report.results[0].start_time, report.results[0].end_time),
            (0.0, 0.4)
        );
        assert_eq!(report.results[1].word_range, 3..4);
        assert_eq!(
            (report.results[1].start_time, report.results[1].end_time),
            (1.0, 1.3)
        );
    }

    #[test]
    fn test_normalization_applies_to_both_sides() {
        let transcript = vec![word("You\u{2019}ll", 0.0, 0.2), word("see.", 0.2, 0.5)];
        let report = align(&transcript, ["you'll SEE"]);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].grouping, "you'll SEE");
        assert_eq!(report.results[0].words, transcript);
    }

    #[test]
    fn test_empty_grouping_is_skipped_without_miss() {
        let transcript = need_to_know();
        let report = align(&transcript, ["", "   ", "know"]);
        assert!(report.misses.is_empty());
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].grouping_index, 2);
    }

    #[test]
    fn test_miss_leaves_cursor_unchanged() {
        let transcript = need_to_know();
        let report = align(&transcript, ["to", "absent words", "know"]);

        assert_eq!(report.misses.len(), 1);
        assert_eq!(report.misses[0].grouping_index, 1);
        assert_eq!(report.misses[0].cursor, 2);
        assert_eq!(report.results[1].word_range, 2..3);
    }

    #[test]
    fn test_miss_allows_later_grouping_to_match_earlier_text() {
        // "need" after an unmatched grouping still finds the first "need"
        let transcript = need_to_know();
        let report = align(&transcript, ["nowhere", "need"]);
        assert_eq!(report.results[0].word_range, 0..1);
    }

    #[test]
    fn test_grouping_longer_than_transcript() {
        let transcript = vec![word("short", 0.0, 1.0)];
        let report = align(&transcript, ["short and long"]);
        assert!(report.results.is_empty());
        assert_eq!(report.misses.len(), 1);
    }

    #[test]
    fn test_cursor_never_rewinds_past_match() {
        let transcript = need_to_know();
        let report = align(&transcript, ["know", "to"]);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.misses[0].grouping, "to");
    }

    #[test]
    fn test_each_call_starts_fresh() {
        let transcript = need_to_know();
        let aligner = Aligner::new(&transcript);
        let first = aligner.align(["need", "need"]);
        let second = aligner.align(["need"]);
        assert_eq!(first.results[1].word_range, 3..4);
        assert_eq!(second.results[0].word_range, 0..1);
    }

    #[test]
    fn test_empty_transcript() {
        let report = align(&[], ["anything"]);
        assert!(report.results.is_empty());
        assert_eq!(report.misses.len(), 1);
    }
}
