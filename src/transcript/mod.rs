//! Word-level timestamped transcripts
//!
//! Two encodings normalize to the same `Vec<TranscriptWord>`:
//!
//! - JSON: a flat list of `{"word", "start", "end"}` records, or an object
//!   carrying that list under `"words"`.
//! - Plain text: one `<word> <start> <end>` entry per line. A word never
//!   contains whitespace, so every non-blank line holds exactly three tokens.

pub mod lexer;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Span};
use crate::input::{read_source, InputFormat};

use lexer::Token;

const LINE_SHAPE: &str = "<word> <start> <end>";

/// One spoken word with its start/end time in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptWord {
    #[serde(rename = "word", alias = "text")]
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl TranscriptWord {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonTranscript {
    List(Vec<TranscriptWord>),
    Wrapped { words: Vec<TranscriptWord> },
}

impl From<JsonTranscript> for Vec<TranscriptWord> {
    fn from(value: JsonTranscript) -> Self {
        match value {
            JsonTranscript::List(words) | JsonTranscript::Wrapped { words } => words,
        }
    }
}

/// Parse a JSON transcript
///
/// A word whose end time precedes its start time is rejected.
pub fn from_json_str(content: &str) -> Result<Vec<TranscriptWord>, serde_json::Error> {
    let parsed: JsonTranscript = serde_json::from_str(content)?;
    let words: Vec<TranscriptWord> = parsed.into();
    if let Some(index) = words.iter().position(|w| w.end < w.start) {
        let word = &words[index];
        return Err(serde::de::Error::custom(format!(
            "word {} ('{}'): end time {} precedes start time {}",
            index, word.text, word.end, word.start
        )));
    }
    warn_if_unordered(&words);
    Ok(words)
}

/// Parse a line-oriented plain-text transcript
///
/// Blank lines are ignored. A line without exactly three tokens, or whose
/// last two tokens are not numbers, is a syntax error.
pub fn from_text_str(content: &str) -> Result<Vec<TranscriptWord>, InputError> {
    let mut words = Vec::new();
    let mut line: Vec<(Token, Span)> = Vec::new();

    for item in lexer::lex(content) {
        let (token, span) =
            item.map_err(|span| InputError::syntax(span, "unrecognized input"))?;
        if token == Token::Newline {
            if let Some(word) = parse_line(content, &line)? {
                words.push(word);
            }
            line.clear();
        } else {
            line.push((token, span));
        }
    }
    if let Some(word) = parse_line(content, &line)? {
        words.push(word);
    }

    warn_if_unordered(&words);
    Ok(words)
}

fn parse_line(source: &str, line: &[(Token, Span)]) -> Result<Option<TranscriptWord>, InputError> {
    let (Some(first), Some(last)) = (line.first(), line.last()) else {
        return Ok(None);
    };
    let whole = first.1.start..last.1.end;

    if line.len() < 3 {
        return Err(InputError::syntax(whole, "incomplete transcript entry")
            .with_expected(LINE_SHAPE));
    }
    if line.len() > 3 {
        return Err(InputError::syntax(whole, "expected a single word per line")
            .with_expected(LINE_SHAPE));
    }

    let (word, times) = (&line[0], &line[1..]);
    let start = expect_number(&times[0], "start time")?;
    let end = expect_number(&times[1], "end time")?;

    if end < start {
        return Err(InputError::syntax(
            times[0].1.start..times[1].1.end,
            format!("end time {} precedes start time {}", end, start),
        ));
    }

    Ok(Some(TranscriptWord::new(&source[word.1.clone()], start, end)))
}

fn expect_number(token: &(Token, Span), what: &str) -> Result<f64, InputError> {
    match token {
        (Token::Number(value), _) => Ok(*value),
        (_, span) => Err(
            InputError::syntax(span.clone(), format!("expected {}", what))
                .with_expected(LINE_SHAPE),
        ),
    }
}

fn warn_if_unordered(words: &[TranscriptWord]) {
    if let Some(index) = words.windows(2).position(|w| w[1].start < w[0].start) {
        tracing::warn!(
            index = index + 1,
            word = %words[index + 1].text,
            "transcript is not ordered by start time"
        );
    }
}

/// Parse transcript `content` read from `path` in the given encoding
///
/// Syntax errors carry spans into `content`, see [`InputError::format`].
pub fn parse(
    content: &str,
    format: InputFormat,
    path: &Path,
) -> Result<Vec<TranscriptWord>, InputError> {
    match format {
        InputFormat::Json => from_json_str(content).map_err(|e| InputError::json(path, e)),
        InputFormat::Text => from_text_str(content),
    }
}

/// Load a transcript, choosing the encoding from the file extension
///
/// `.json` files are decoded as JSON, anything else as plain text.
pub fn load(path: &Path) -> Result<Vec<TranscriptWord>, InputError> {
    let content = read_source(path)?;
    let words = parse(&content, InputFormat::from_path(path), path)?;
    tracing::debug!(path = %path.display(), words = words.len(), "loaded transcript");
    Ok(words)
}
