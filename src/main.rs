//! Transcript Layout CLI
//!
//! Usage:
//!   transcript-layout align --transcript <FILE> --groupings <FILE> [--max-chars N]
//!   transcript-layout pack [--config <FILE>] [--seed N] [WORD]... [--words-file <FILE>]
//!   transcript-layout wrap [--config <FILE>] [--max-chars N] <TEXT>
//!
//! Set RUST_LOG (e.g. `RUST_LOG=debug`) for diagnostics on stderr.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use transcript_layout::align::{Aligner, LineTiming};
use transcript_layout::layout::{self, CachedMeasure, MonospaceMeasure, OrientationPolicy};
use transcript_layout::{
    groupings, transcript, wrap_lines, Grouping, InputFormat, ProjectConfig, TranscriptWord,
};

#[derive(Parser)]
#[command(name = "transcript-layout")]
#[command(about = "Align text groupings to a transcript and pack words into a frame")]
struct Cli {
    /// Project configuration (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the start and end time of each grouping
    Align {
        /// Word-level transcript (.json, or plain text lines of `word start end`)
        #[arg(short, long)]
        transcript: PathBuf,

        /// Groupings (.json records, or one grouping per line)
        #[arg(short, long)]
        groupings: PathBuf,

        /// Also split each grouping into wrapped lines with their own timings
        #[arg(long)]
        max_chars: Option<usize>,
    },

    /// Pack words into the configured container
    Pack {
        /// Words to pack, in order
        words: Vec<String>,

        /// Read whitespace-separated words from a file instead
        #[arg(long, conflicts_with = "words")]
        words_file: Option<PathBuf>,

        /// Seed for the random orientation tie-break
        #[arg(long)]
        seed: Option<u64>,

        /// Override the orientation tie-break
        #[arg(long, value_parser = parse_orientation)]
        orientation: Option<OrientationPolicy>,
    },

    /// Wrap text to the character budget
    Wrap {
        text: String,

        #[arg(long)]
        max_chars: Option<usize>,
    },
}

#[derive(Serialize)]
struct AlignedRecord<'a> {
    #[serde(flatten)]
    grouping: &'a Grouping,
    start_time: f64,
    end_time: f64,
    words: &'a [TranscriptWord],
    #[serde(skip_serializing_if = "Option::is_none")]
    lines: Option<Vec<LineTiming>>,
}

fn parse_orientation(value: &str) -> Result<OrientationPolicy, String> {
    match value {
        "random" => Ok(OrientationPolicy::Random),
        "horizontal" => Ok(OrientationPolicy::Horizontal),
        "vertical" => Ok(OrientationPolicy::Vertical),
        other => Err(format!(
            "unknown orientation '{}' (expected random, horizontal or vertical)",
            other
        )),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ProjectConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => ProjectConfig::default(),
    };

    match cli.command {
        Command::Align {
            transcript,
            groupings,
            max_chars,
        } => run_align(&transcript, &groupings, max_chars),
        Command::Pack {
            words,
            words_file,
            seed,
            orientation,
        } => run_pack(config, words, words_file, seed, orientation),
        Command::Wrap { text, max_chars } => {
            let config = match max_chars {
                Some(max_chars) => config.with_max_chars_per_line(max_chars),
                None => config,
            };
            for line in wrap_lines(&text, config.max_chars_per_line) {
                println!("{}", line);
            }
        }
    }
}

fn read_or_exit(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn run_align(transcript_path: &Path, groupings_path: &Path, max_chars: Option<usize>) {
    let source = read_or_exit(transcript_path);
    let format = InputFormat::from_path(transcript_path);
    let words = match transcript::parse(&source, format, transcript_path) {
        Ok(words) => words,
        Err(e) => {
            let filename = transcript_path.display().to_string();
            eprintln!("Error in transcript '{}':\n{}", filename, e.format(&source, &filename));
            process::exit(1);
        }
    };

    let groupings = match groupings::load(groupings_path) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let report = Aligner::new(&words).align(&groupings);
    if !report.is_complete() {
        eprintln!(
            "Warning: {} of {} groupings were not found in the transcript",
            report.misses.len(),
            groupings.len()
        );
    }

    let records: Vec<AlignedRecord> = report
        .results
        .iter()
        .map(|result| {
            let grouping = &groupings[result.grouping_index];
            let lines = max_chars.map(|max| result.line_timings(&wrap_lines(&grouping.text, max)));
            AlignedRecord {
                grouping,
                start_time: result.start_time,
                end_time: result.end_time,
                words: &result.words,
                lines,
            }
        })
        .collect();

    print_json(&records);
}

fn run_pack(
    config: ProjectConfig,
    words: Vec<String>,
    words_file: Option<PathBuf>,
    seed: Option<u64>,
    orientation: Option<OrientationPolicy>,
) {
    let words: Vec<String> = match words_file {
        Some(path) => read_or_exit(&path)
            .split_whitespace()
            .map(str::to_string)
            .collect(),
        None => words,
    };

    let mut packing = config.packing;
    if let Some(seed) = seed {
        packing = packing.with_seed(seed);
    }
    if let Some(orientation) = orientation {
        packing = packing.with_orientation(orientation);
    }

    let measure = CachedMeasure::new(MonospaceMeasure::default());
    let packed = layout::pack_with_config(&words, &packing, &measure);
    tracing::debug!(
        words = words.len(),
        distinct = measure.len(),
        shelves = packed.shelf_count(),
        "packed words"
    );
    for dropped in &packed.dropped {
        eprintln!("Warning: word '{}' cannot fit, skipped", dropped.label);
    }
    print_json(&packed.placements());
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error encoding output: {}", e);
            process::exit(1);
        }
    }
}
