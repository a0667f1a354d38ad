//! Check command implementation.
//!
//! Scans `.worm` files and reports only their diagnostics, each with the
//! offending source line.

use std::io::Write;
use std::path::PathBuf;

use worm_lex::LexerConfig;

use crate::commands::common::{
    count_diagnostics, finish, output_messages, read_sources, resolve_jobs, scan_sources,
    KeywordsArg, OutputFormat,
};
use crate::commands::render::{render_diagnostic, render_json};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check; standard input when empty.
    pub files: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<OutputFormat>,
    /// Keyword set override.
    pub keywords: Option<KeywordsArg>,
    /// Number of parallel jobs.
    pub jobs: Option<usize>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Get the effective lexer configuration.
    ///
    /// Comments never produce diagnostics of their own beyond unterminated
    /// blocks, so they are not kept.
    pub fn lexer_config(&self) -> LexerConfig {
        let mut lexer = self.config.lexer.to_lexer_config().with_comments(false);
        if let Some(keywords) = self.args.keywords {
            lexer.keywords = keywords.into();
        }
        lexer
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let jobs = resolve_jobs(self.args.jobs, self.config.jobs)?;
        let sources = read_sources(&self.args.files)?;
        let reports = scan_sources(sources, &self.lexer_config(), jobs)?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match self.args.format.unwrap_or(self.config.output.format) {
            OutputFormat::Table => {
                for report in &reports {
                    for diag in &report.diagnostics {
                        writeln!(out, "{}", render_diagnostic(&report.file, diag))?;
                    }
                }

                let count = count_diagnostics(&reports);
                if count == 0 {
                    writeln!(out, "{} {} file(s)", output_messages::CHECK_CLEAN, reports.len())?;
                } else {
                    let dirty = reports.iter().filter(|r| !r.diagnostics.is_empty()).count();
                    writeln!(
                        out,
                        "{} {} diagnostic(s) in {} file(s)",
                        output_messages::CHECK_FAILED,
                        count,
                        dirty
                    )?;
                }
            },
            OutputFormat::Json => writeln!(out, "{}", render_json(&reports, false)?)?,
        }
        out.flush()?;

        finish(&reports)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = ();

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Report lexical problems in Worm source files"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LexerSection;
    use worm_lex::KeywordSet;

    #[test]
    fn test_check_drops_comments() {
        let mut config = Config::default();
        config.lexer = LexerSection {
            keywords: KeywordsArg::Core,
            include_comments: true,
            max_source_size: None,
        };
        let command = CheckCommand::new(CheckArgs::default(), config);
        assert!(!command.lexer_config().include_comments);
    }

    #[test]
    fn test_keywords_flag() {
        let args = CheckArgs {
            keywords: Some(KeywordsArg::TypeNames),
            ..CheckArgs::default()
        };
        let command = CheckCommand::new(args, Config::default());
        assert_eq!(command.lexer_config().keywords, KeywordSet::TypeNames);
    }

    #[test]
    fn test_command_name() {
        assert_eq!(CheckCommand::name(), "check");
    }
}
