//! Common types and utilities for wormt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use worm_lex::{scan_with_config, KeywordSet, LexerConfig, Token};
use worm_util::{Diagnostic, SourceFile};

use crate::error::{Result, WormtError};

/// Extension every source file must carry.
pub const SOURCE_EXTENSION: &str = "worm";

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

// ============================================================================
// Options
// ============================================================================

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Reserved word sets selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordsArg {
    /// Only `None` is reserved
    #[default]
    Core,
    /// `None` and the type names
    TypeNames,
    /// Every Worm keyword
    Extended,
}

impl From<KeywordsArg> for KeywordSet {
    fn from(arg: KeywordsArg) -> Self {
        match arg {
            KeywordsArg::Core => KeywordSet::Core,
            KeywordsArg::TypeNames => KeywordSet::TypeNames,
            KeywordsArg::Extended => KeywordSet::Extended,
        }
    }
}

// ============================================================================
// Sources
// ============================================================================

/// Validate that a path names an existing `.worm` file.
pub fn validate_source_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(WormtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(WormtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
        return Err(WormtError::Validation(format!(
            "{} {}",
            error_messages::NOT_A_WORM_FILE,
            path.display()
        )));
    }

    Ok(())
}

/// Read the given files, or standard input when no file is given.
///
/// All paths are validated before any file is read.
pub fn read_sources(files: &[PathBuf]) -> Result<Vec<SourceFile>> {
    if files.is_empty() {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(vec![SourceFile::new(STDIN_NAME, content)]);
    }

    for path in files {
        validate_source_path(path)?;
    }

    files
        .iter()
        .map(|path| -> Result<SourceFile> {
            let content = std::fs::read_to_string(path)?;
            Ok(SourceFile::new(path.display().to_string(), content))
        })
        .collect()
}

// ============================================================================
// Scanning
// ============================================================================

/// Tokens and diagnostics of one source file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The scanned file
    pub file: SourceFile,
    /// Tokens, ending with `EndOfInput`; empty if the file was rejected
    pub tokens: Vec<Token>,
    /// Diagnostics in source order
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    /// Scan one file.
    ///
    /// A file over the size limit is not scanned; it is reported with a
    /// single `SourceTooLarge` diagnostic instead.
    pub fn scan(file: SourceFile, config: &LexerConfig) -> Self {
        match scan_with_config(file.content(), config) {
            Ok(result) => {
                debug!(
                    file = file.name(),
                    tokens = result.tokens.len(),
                    diagnostics = result.diagnostics.len(),
                    "scanned"
                );
                Self {
                    file,
                    tokens: result.tokens,
                    diagnostics: result.diagnostics,
                }
            },
            Err(err) => {
                warn!(file = file.name(), "{}", err);
                Self {
                    file,
                    tokens: Vec::new(),
                    diagnostics: vec![err.to_diagnostic()],
                }
            },
        }
    }
}

/// Scan files in parallel on a pool of `jobs` threads.
///
/// Reports come back in the order of `files`.
pub fn scan_sources(files: Vec<SourceFile>, config: &LexerConfig, jobs: usize) -> Result<Vec<FileReport>> {
    debug!(
        files = files.len(),
        jobs,
        keywords = config.keywords.name(),
        comments = config.include_comments,
        "scanning sources"
    );
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| WormtError::Config(format!("Failed to start {} worker threads: {}", jobs, e)))?;

    Ok(pool.install(|| {
        files
            .into_par_iter()
            .map(|file| FileReport::scan(file, config))
            .collect()
    }))
}

/// Resolve the job count from the command line and configuration.
pub fn resolve_jobs(arg: Option<usize>, configured: usize) -> Result<usize> {
    match arg.unwrap_or(configured) {
        0 => Err(WormtError::Validation(error_messages::ZERO_JOBS.to_string())),
        jobs => Ok(jobs),
    }
}

/// Total number of diagnostics across reports.
pub fn count_diagnostics(reports: &[FileReport]) -> usize {
    reports.iter().map(|r| r.diagnostics.len()).sum()
}

/// Turn a diagnostic count into the command's result.
pub fn finish(reports: &[FileReport]) -> Result<()> {
    match count_diagnostics(reports) {
        0 => Ok(()),
        count => Err(WormtError::DiagnosticsReported(count)),
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when input file lacks the `.worm` extension.
    pub const NOT_A_WORM_FILE: &str = "Only .worm files can be scanned:";

    /// Error when zero jobs are requested.
    pub const ZERO_JOBS: &str = "--jobs must be at least 1";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
pub mod output_messages {
    /// Summary when no diagnostic was found.
    pub const CHECK_CLEAN: &str = "No problems found in";

    /// Summary when diagnostics were found.
    pub const CHECK_FAILED: &str = "Found";
}
