//! File-to-file orchestration: read, tokenize, build, extract, write.
//!
//! The pipeline reads an input file, tokenizes its content, folds the tokens
//! into a persistent [`OrderedSet`](crate::persistent::OrderedSet) either
//! sequentially or through the fork-join builder, and writes the sorted
//! unique words to an output file, one per line. Each phase is timed and the
//! durations are collected into a [`PipelineReport`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::persistent::{OrderedSet, parallel};
use crate::text;

// =============================================================================
// Build Strategy
// =============================================================================

/// Selects how tokens are accumulated into the ordered set.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BuildStrategy {
    /// Fold every token into the set on the calling thread, in input order.
    Sequential,
    /// Tokenize and build both input halves concurrently, then merge.
    Parallel,
}

impl fmt::Display for BuildStrategy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(formatter, "sequential"),
            Self::Parallel => write!(formatter, "parallel"),
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Represents a failure while running the file pipeline.
///
/// The set operations themselves cannot fail; the only failure surface of
/// the pipeline is file I/O at its edges.
#[derive(Debug)]
pub enum PipelineError {
    /// The input file could not be read.
    Read {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The output file could not be written.
    Write {
        /// Path of the file that failed to write.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(formatter, "failed to read {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(formatter, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
        }
    }
}

// =============================================================================
// Report
// =============================================================================

/// Timings and counts gathered while processing one file.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    /// Strategy used for tokenization and set construction.
    pub strategy: BuildStrategy,
    /// Number of tokens produced by the tokenizer (duplicates included).
    pub token_count: usize,
    /// Number of distinct words written to the output.
    pub distinct_count: usize,
    /// Time spent reading the input file.
    pub read_duration: Duration,
    /// Time spent tokenizing.
    pub tokenize_duration: Duration,
    /// Time spent building the ordered set.
    pub build_duration: Duration,
    /// Time spent extracting the sorted word list.
    pub extract_duration: Duration,
    /// Time spent writing the output file.
    pub write_duration: Duration,
    /// Wall-clock time for the whole pipeline.
    pub total_duration: Duration,
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            formatter,
            "{} build: {} tokens, {} distinct words",
            self.strategy, self.token_count, self.distinct_count
        )?;
        writeln!(formatter, "  reading took {:?}", self.read_duration)?;
        writeln!(formatter, "  tokenization took {:?}", self.tokenize_duration)?;
        writeln!(formatter, "  tree construction took {:?}", self.build_duration)?;
        writeln!(formatter, "  sorted extraction took {:?}", self.extract_duration)?;
        writeln!(formatter, "  writing took {:?}", self.write_duration)?;
        write!(formatter, "  total processing took {:?}", self.total_duration)
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Produces the sorted, deduplicated word list of `text` in memory.
///
/// This is the core path of the pipeline without the file edges, used by
/// [`process_file`] and directly testable.
///
/// # Examples
///
/// ```rust
/// use wordset::pipeline::{BuildStrategy, sorted_words};
///
/// let words = sorted_words(
///     "functional programming in C, functional!",
///     BuildStrategy::Sequential,
/// );
/// assert_eq!(words, vec!["c", "functional", "in", "programming"]);
/// ```
#[must_use]
pub fn sorted_words(text: &str, strategy: BuildStrategy) -> Vec<String> {
    let tokens = match strategy {
        BuildStrategy::Sequential => text::tokenize(text),
        BuildStrategy::Parallel => text::tokenize_parallel(text),
    };
    build_set(tokens, strategy).to_sorted_vec()
}

/// Reads `input_path`, builds the sorted unique word list with the given
/// strategy, and writes it to `output_path`, one word per line.
///
/// The output file is written even when the input contains no words, so a
/// stale output from an earlier run can never survive. Every phase is timed;
/// the returned [`PipelineReport`] carries the durations and counts, and the
/// same information is emitted through the `log` facade.
///
/// # Errors
///
/// Returns [`PipelineError::Read`] when the input file cannot be read and
/// [`PipelineError::Write`] when the output file cannot be written.
pub fn process_file(
    input_path: &Path,
    output_path: &Path,
    strategy: BuildStrategy,
) -> Result<PipelineReport, PipelineError> {
    let total_start = Instant::now();
    log::info!("processing {} ({strategy} build)", input_path.display());

    let read_start = Instant::now();
    let content = fs::read_to_string(input_path).map_err(|source| PipelineError::Read {
        path: input_path.to_path_buf(),
        source,
    })?;
    let read_duration = read_start.elapsed();
    log::debug!("read {} bytes in {read_duration:?}", content.len());

    let tokenize_start = Instant::now();
    let tokens = match strategy {
        BuildStrategy::Sequential => text::tokenize(&content),
        BuildStrategy::Parallel => text::tokenize_parallel(&content),
    };
    let token_count = tokens.len();
    let tokenize_duration = tokenize_start.elapsed();
    log::debug!("tokenized {token_count} tokens in {tokenize_duration:?}");

    let build_start = Instant::now();
    let set = build_set(tokens, strategy);
    let build_duration = build_start.elapsed();
    log::debug!(
        "built set of {} distinct words in {build_duration:?}",
        set.len()
    );

    let extract_start = Instant::now();
    let words = set.to_sorted_vec();
    let extract_duration = extract_start.elapsed();

    let write_start = Instant::now();
    write_words(output_path, &words)?;
    let write_duration = write_start.elapsed();
    log::debug!(
        "wrote {} words to {} in {write_duration:?}",
        words.len(),
        output_path.display()
    );

    Ok(PipelineReport {
        strategy,
        token_count,
        distinct_count: words.len(),
        read_duration,
        tokenize_duration,
        build_duration,
        extract_duration,
        write_duration,
        total_duration: total_start.elapsed(),
    })
}

/// Accumulates tokens into an [`OrderedSet`] with the selected strategy.
fn build_set(tokens: Vec<String>, strategy: BuildStrategy) -> OrderedSet<String> {
    match strategy {
        BuildStrategy::Sequential => tokens.into_iter().collect(),
        BuildStrategy::Parallel => parallel::build(tokens),
    }
}

/// Writes the words to `path`, one per line with a trailing newline.
fn write_words(path: &Path, words: &[String]) -> Result<(), PipelineError> {
    let mut output = String::with_capacity(words.iter().map(|word| word.len() + 1).sum());
    for word in words {
        output.push_str(word);
        output.push('\n');
    }

    fs::write(path, output).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })
}
