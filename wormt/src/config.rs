//! Configuration module for the wormt CLI.
//!
//! This module handles loading the `wormt.toml` configuration file:
//!
//! ```toml
//! jobs = 4
//!
//! [lexer]
//! keywords = "type-names"
//! include_comments = false
//! max_source_size = 1048576
//!
//! [output]
//! format = "table"
//! ```

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use worm_lex::LexerConfig;

use crate::commands::common::{KeywordsArg, OutputFormat};
use crate::error::{Result, WormtError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "wormt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of files scanned in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,

    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Output settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// Lexer settings from the `[lexer]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LexerSection {
    /// Reserved word set.
    #[serde(default)]
    pub keywords: KeywordsArg,

    /// Keep comments as tokens.
    #[serde(default)]
    pub include_comments: bool,

    /// Largest accepted source file, in bytes.
    #[serde(default)]
    pub max_source_size: Option<usize>,
}

/// Output settings from the `[output]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Get the default number of parallel jobs based on CPU count.
fn default_parallel_jobs() -> usize {
    get_num_cpus()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
            lexer: LexerSection::default(),
            output: OutputSection::default(),
        }
    }
}

impl LexerSection {
    /// The library configuration these settings describe.
    pub fn to_lexer_config(&self) -> LexerConfig {
        LexerConfig {
            keywords: self.keywords.into(),
            include_comments: self.include_comments,
            max_source_size: self.max_source_size,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/wormt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WormtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check values serde cannot.
    fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(WormtError::Config("jobs must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("wormt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("wormt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use worm_lex::KeywordSet;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.jobs >= 1);
        assert_eq!(config.lexer.keywords, KeywordsArg::Core);
        assert!(!config.lexer.include_comments);
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_load_full_config() {
        let (_dir, path) = write_config(
            r#"
jobs = 3

[lexer]
keywords = "extended"
include_comments = true
max_source_size = 4096

[output]
format = "json"
"#,
        );

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.jobs, 3);
        assert_eq!(config.output.format, OutputFormat::Json);

        let lexer = config.lexer.to_lexer_config();
        assert_eq!(lexer.keywords, KeywordSet::Extended);
        assert!(lexer.include_comments);
        assert_eq!(lexer.max_source_size, Some(4096));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let (_dir, path) = write_config("[lexer]\nkeywords = \"type-names\"\n");
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.lexer.keywords, KeywordsArg::TypeNames);
        assert_eq!(config.output, OutputSection::default());
        assert_eq!(config.jobs, default_parallel_jobs());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let (_dir, path) = write_config("[lexer]\nkeyword = \"core\"\n");
        assert!(matches!(Config::load_from_path(&path), Err(WormtError::Toml(_))));
    }

    #[test]
    fn test_zero_jobs_is_rejected() {
        let (_dir, path) = write_config("jobs = 0\n");
        assert!(matches!(Config::load_from_path(&path), Err(WormtError::Config(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/wormt.toml"));
        assert!(result.is_err());
    }
}
