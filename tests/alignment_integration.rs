//! Integration tests for loading inputs and aligning groupings to a transcript

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempfile::TempDir;

use transcript_layout::align::{align, normalize_word, normalize_words};
use transcript_layout::{align_files, try_align_files, wrap_lines, InputError, TranscriptWord};

const JSON_TRANSCRIPT: &str = r#"[
    {"word": "Need", "start": 0.0, "end": 0.3},
    {"word": "to", "start": 0.3, "end": 0.4},
    {"word": "know.", "start": 0.4, "end": 0.7},
    {"word": "You’ll", "start": 1.0, "end": 1.3},
    {"word": "see", "start": 1.3, "end": 1.5},
    {"word": "need", "start": 1.6, "end": 1.9}
]"#;

const TEXT_TRANSCRIPT: &str = "\
Need 0.0 0.3
to 0.3 0.4
know. 0.4 0.7

You'll 1.0 1.3
see 1.3 1.5
need 1.6 1.9
";

/// Write `content` under a fresh temp dir and return its path
fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn starts(results: &[transcript_layout::AlignmentResult]) -> Vec<(f64, f64)> {
    results.iter().map(|r| (r.start_time, r.end_time)).collect()
}

#[test]
fn test_json_transcript_with_text_groupings() {
    let dir = TempDir::new().unwrap();
    let transcript = write_file(&dir, "transcript.json", JSON_TRANSCRIPT);
    let groupings = write_file(&dir, "groupings.txt", "Need to\nknow\n\nyou'll see need\n");

    let results = align_files(&groupings, &transcript);
    assert_eq!(starts(&results), vec![(0.0, 0.4), (0.4, 0.7), (1.0, 1.9)]);
    assert_eq!(results[2].word_range, 3..6);
}

#[test]
fn test_text_transcript_matches_json_transcript() {
    let dir = TempDir::new().unwrap();
    let json = write_file(&dir, "transcript.json", JSON_TRANSCRIPT);
    let text = write_file(&dir, "transcript.txt", TEXT_TRANSCRIPT);
    let groupings = write_file(&dir, "groupings.txt", "need to\nknow\nyou’ll see\nneed\n");

    let from_json = align_files(&groupings, &json);
    let from_text = align_files(&groupings, &text);
    assert_eq!(starts(&from_json), starts(&from_text));
    assert_eq!(from_json.len(), 4);
}

#[test]
fn test_wrapped_json_transcript() {
    let dir = TempDir::new().unwrap();
    let transcript = write_file(
        &dir,
        "transcript.json",
        r#"{"words": [{"text": "hello", "start": 2.0, "end": 2.5}]}"#,
    );
    let groupings = write_file(&dir, "groupings.txt", "Hello!\n");

    let results = align_files(&groupings, &transcript);
    assert_eq!(starts(&results), vec![(2.0, 2.5)]);
}

#[test]
fn test_json_groupings_keep_metadata() {
    let dir = TempDir::new().unwrap();
    let transcript = write_file(&dir, "transcript.json", JSON_TRANSCRIPT);
    let groupings = write_file(
        &dir,
        "groupings.json",
        r#"[
            {"group": "Need to know", "animation_style": "group_basic", "options": ["hold"], "color": "red"},
            {"group": "see need", "animation_style": "word_impact"}
        ]"#,
    );

    let (groupings, report) = try_align_files(&groupings, &transcript).unwrap();
    assert!(report.is_complete());
    assert_eq!(groupings[0].style.as_deref(), Some("group_basic"));
    assert!(groupings[0].has_option("hold"));
    assert_eq!(groupings[0].extra["color"], "red");

    let second = &report.results[1];
    assert_eq!(groupings[second.grouping_index].style.as_deref(), Some("word_impact"));
    assert_eq!((second.start_time, second.end_time), (1.3, 1.9));
}

#[test]
fn test_json_grouping_without_text_is_skipped() {
    let dir = TempDir::new().unwrap();
    let transcript = write_file(&dir, "transcript.json", JSON_TRANSCRIPT);
    let groupings = write_file(
        &dir,
        "groupings.json",
        r#"[{"group": "Need to"}, {"animation_style": "word_impact"}, {"group": "know"}]"#,
    );

    let (groupings, report) = try_align_files(&groupings, &transcript).unwrap();
    assert_eq!(groupings.len(), 3);
    assert!(report.is_complete());
    let indices: Vec<usize> = report.results.iter().map(|r| r.grouping_index).collect();
    assert_eq!(indices, vec![0, 2]);
    assert_eq!(starts(&report.results), vec![(0.0, 0.4), (0.4, 0.7)]);
}

#[test]
fn test_reversed_json_times_are_rejected() {
    let dir = TempDir::new().unwrap();
    let groupings = write_file(&dir, "groupings.txt", "need
");
    let transcript = write_file(
        &dir,
        "transcript.json",
        r#"[{"word": "need", "start": 2.0, "end": 1.0}]"#,
    );

    assert!(align_files(&groupings, &transcript).is_empty());
    assert!(matches!(
        try_align_files(&groupings, &transcript),
        Err(InputError::Json { .. })
    ));
}

#[test]
fn test_malformed_inputs_yield_no_results() {
    let dir = TempDir::new().unwrap();
    let groupings = write_file(&dir, "groupings.txt", "need to\n");

    let bad_json = write_file(&dir, "bad.json", r#"[{"word": "need", "start": "soon"}]"#);
    assert!(align_files(&groupings, &bad_json).is_empty());
    assert!(matches!(
        try_align_files(&groupings, &bad_json),
        Err(InputError::Json { .. })
    ));

    let bad_text = write_file(&dir, "bad.txt", "need 0.0 0.3\nto\n");
    assert!(align_files(&groupings, &bad_text).is_empty());
    let err = try_align_files(&groupings, &bad_text).unwrap_err();
    assert!(matches!(err, InputError::Syntax { .. }));
    assert_eq!(err.span(), Some(&(13..15)));

    let missing = dir.path().join("missing.json");
    assert!(align_files(&groupings, &missing).is_empty());
}

#[test]
fn test_unmatched_grouping_does_not_block_later_ones() {
    let transcript = vec![
        TranscriptWord::new("attention", 0.0, 0.5),
        TranscriptWord::new("is", 0.5, 0.6),
        TranscriptWord::new("all", 0.6, 0.8),
    ];
    let report = align(&transcript, ["attention", "typography", "is all"]);

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[1].grouping_index, 2);
    assert_eq!(report.results[1].word_range, 1..3);
    assert_eq!(report.misses.len(), 1);
    assert_eq!(report.misses[0].grouping, "typography");
    assert_eq!(report.misses[0].cursor, 1);
}

#[test]
fn test_line_timings_for_wrapped_grouping() {
    let transcript: Vec<TranscriptWord> = ["attention", "is", "all", "you", "need"]
        .iter()
        .enumerate()
        .map(|(i, w)| TranscriptWord::new(*w, i as f64, i as f64 + 0.5))
        .collect();
    let report = align(&transcript, ["Attention is all you need"]);
    let result = &report.results[0];

    let lines = wrap_lines(&result.grouping, 12);
    assert_eq!(lines, vec!["Attention is", "all you need"]);

    let timings = result.line_timings(&lines);
    assert_eq!(timings.len(), 2);
    assert_eq!((timings[0].start_time, timings[0].end_time), (0.0, 1.5));
    assert_eq!((timings[1].start_time, timings[1].end_time), (2.0, 4.5));
}

const VOCABULARY: [&str; 4] = ["need", "to", "know", "you'll"];

/// Transcript built from vocabulary indices, one second per word
fn transcript_from(indices: &[usize]) -> Vec<TranscriptWord> {
    indices
        .iter()
        .enumerate()
        .map(|(i, &v)| TranscriptWord::new(VOCABULARY[v], i as f64, i as f64 + 0.5))
        .collect()
}

/// Split `words` into consecutive chunks of the given lengths
fn chunk(words: &[TranscriptWord], lengths: &[usize]) -> Vec<(usize, String)> {
    let mut chunks = Vec::new();
    let mut at = 0;
    for &len in lengths {
        if at >= words.len() {
            break;
        }
        let end = (at + len).min(words.len());
        let text = words[at..end]
            .iter()
            .map(|w| w.text.to_uppercase())
            .collect::<Vec<_>>()
            .join(" ");
        chunks.push((at, text));
        at = end;
    }
    chunks
}

proptest! {
    #[test]
    fn consecutive_chunks_all_align_in_place(
        indices in prop::collection::vec(0..VOCABULARY.len(), 1..40),
        lengths in prop::collection::vec(1usize..5, 1..20),
    ) {
        let transcript = transcript_from(&indices);
        let chunks = chunk(&transcript, &lengths);
        let report = align(&transcript, chunks.iter().map(|(_, text)| text.as_str()));

        prop_assert!(report.is_complete());
        prop_assert_eq!(report.results.len(), chunks.len());
        for (result, (start, _)) in report.results.iter().zip(&chunks) {
            prop_assert_eq!(result.word_range.start, *start);
            prop_assert_eq!(result.start_time, transcript[*start].start);
        }
    }

    #[test]
    fn every_match_is_sound_and_ordered(
        indices in prop::collection::vec(0..VOCABULARY.len(), 0..30),
        groupings in prop::collection::vec(
            prop::collection::vec(0..VOCABULARY.len(), 0..4),
            0..10,
        ),
    ) {
        let transcript = transcript_from(&indices);
        let texts: Vec<String> = groupings
            .iter()
            .map(|g| g.iter().map(|&v| VOCABULARY[v]).collect::<Vec<_>>().join(" "))
            .collect();
        let report = align(&transcript, &texts);

        let mut previous_end = 0;
        for result in &report.results {
            let needle = normalize_words(&texts[result.grouping_index]);
            let matched: Vec<String> = transcript[result.word_range.clone()]
                .iter()
                .map(|w| normalize_word(&w.text))
                .collect();
            prop_assert_eq!(matched, needle);
            prop_assert!(result.word_range.start >= previous_end);
            prop_assert_eq!(result.start_time, transcript[result.word_range.start].start);
            prop_assert_eq!(result.end_time, transcript[result.word_range.end - 1].end);
            previous_end = result.word_range.end;
        }

        let empty = texts.iter().filter(|t| t.trim().is_empty()).count();
        prop_assert_eq!(report.results.len() + report.misses.len() + empty, texts.len());
    }
}
