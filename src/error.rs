//! Error types for loading transcripts, groupings and configuration

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised while reading transcript or grouping input
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode JSON from '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("transcript syntax error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Option<String>,
    },
}

impl InputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn syntax(span: Span, message: impl Into<String>) -> Self {
        Self::Syntax {
            span,
            message: message.into(),
            expected: None,
        }
    }

    pub(crate) fn with_expected(self, hint: impl Into<String>) -> Self {
        match self {
            Self::Syntax { span, message, .. } => Self::Syntax {
                span,
                message,
                expected: Some(hint.into()),
            },
            other => other,
        }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::Syntax { span, .. } => Some(span),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to their `Display` form.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Self::Syntax {
            span,
            message,
            expected,
        } = self
        else {
            return self.to_string();
        };

        let label_text = match expected {
            Some(hint) => format!("{}\nExpected: {}", message, hint),
            None => message.clone(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(message)
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(label_text)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match (written, String::from_utf8(buf)) {
            (Ok(()), Ok(text)) => text,
            _ => self.to_string(),
        }
    }
}

/// Errors that can occur when loading or parsing a project configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}
