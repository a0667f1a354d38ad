//! Tokenize command implementation.
//!
//! Scans `.worm` files (or standard input) and prints every token with its
//! kind, lexeme, decoded literal and position.

use std::io::Write;
use std::path::PathBuf;

use worm_lex::LexerConfig;

use crate::commands::common::{
    finish, read_sources, resolve_jobs, scan_sources, KeywordsArg, OutputFormat,
};
use crate::commands::render::{render_diagnostic, render_json, render_token_table};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Files to scan; standard input when empty.
    pub files: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<OutputFormat>,
    /// Emit comments as tokens.
    pub include_comments: bool,
    /// Keyword set override.
    pub keywords: Option<KeywordsArg>,
    /// Number of parallel jobs.
    pub jobs: Option<usize>,
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
    config: Config,
}

impl TokenizeCommand {
    /// Get the effective lexer configuration.
    ///
    /// Command-line flags override the configuration file.
    pub fn lexer_config(&self) -> LexerConfig {
        let mut lexer = self.config.lexer.to_lexer_config();
        if let Some(keywords) = self.args.keywords {
            lexer.keywords = keywords.into();
        }
        lexer.include_comments |= self.args.include_comments;
        lexer
    }

    /// Get the effective output format.
    pub fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.config.output.format)
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let jobs = resolve_jobs(self.args.jobs, self.config.jobs)?;
        let sources = read_sources(&self.args.files)?;
        let reports = scan_sources(sources, &self.lexer_config(), jobs)?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match self.format() {
            OutputFormat::Table => {
                for (i, report) in reports.iter().enumerate() {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    write!(out, "{}", render_token_table(report))?;
                    for diag in &report.diagnostics {
                        eprint!("{}", render_diagnostic(&report.file, diag));
                    }
                }
            },
            OutputFormat::Json => writeln!(out, "{}", render_json(&reports, true)?)?,
        }
        out.flush()?;

        finish(&reports)
    }
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = ();

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

impl CommandDescription for TokenizeCommand {
    fn description() -> &'static str {
        "Print the tokens of Worm source files"
    }
}
