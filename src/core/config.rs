//! Configuration management for the mdindex build pipeline.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! The configuration is an explicit struct passed into the pipeline
//! entry point, never process-wide global state.

use crate::core::error::{IndexError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Content discovery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Root directory of the document tree
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Output artifact configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory the JSON artifacts are written to
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// File name for the primary (non-reply) record set
    #[serde(default = "default_posts_file")]
    pub posts_file: String,

    /// File name for the reply record set
    #[serde(default = "default_replies_file")]
    pub replies_file: String,
}

// Default value functions
fn default_root_dir() -> PathBuf {
    PathBuf::from("./content")
}

fn default_include_patterns() -> Vec<String> {
    vec!["*.md".to_string()]
}

fn default_max_file_size() -> usize {
    10
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./docs")
}

fn default_posts_file() -> String {
    "search-data.json".to_string()
}

fn default_replies_file() -> String {
    "search-data-replies.json".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            include_patterns: default_include_patterns(),
            exclude_patterns: Vec::new(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            posts_file: default_posts_file(),
            replies_file: default_replies_file(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| IndexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => {
                // Conventional location next to the content tree
                if Path::new("mdindex.toml").exists() {
                    Self::from_file("mdindex.toml")?
                } else {
                    Self::default()
                }
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(root) = env::var("MDINDEX_CONTENT_DIR") {
            self.content.root_dir = PathBuf::from(root);
        }
        if let Ok(max_size) = env::var("MDINDEX_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.content.max_file_size_mb = size;
            }
        }
        if let Ok(dir) = env::var("MDINDEX_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.content.root_dir.as_os_str().is_empty() {
            return Err(IndexError::ConfigError(
                "Content root directory must be non-empty".to_string(),
            ));
        }

        if self.content.max_file_size_mb == 0 {
            return Err(IndexError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.output.dir.as_os_str().is_empty() {
            return Err(IndexError::ConfigError(
                "Output directory must be non-empty".to_string(),
            ));
        }

        if self.output.posts_file.is_empty() || self.output.replies_file.is_empty() {
            return Err(IndexError::ConfigError(
                "Output file names must be non-empty".to_string(),
            ));
        }

        if self.output.posts_file == self.output.replies_file {
            return Err(IndexError::ConfigError(
                "Posts and replies output files must be distinct".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Content root: {:?}", self.content.root_dir);
        tracing::info!(
            "  Include patterns: {} patterns",
            self.content.include_patterns.len()
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.content.exclude_patterns.len()
        );
        tracing::info!("  Max file size: {} MB", self.content.max_file_size_mb);
        tracing::info!("  Output dir: {:?}", self.output.dir);
        tracing::info!("  Posts file: {}", self.output.posts_file);
        tracing::info!("  Replies file: {}", self.output.replies_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.content.root_dir, PathBuf::from("./content"));
        assert_eq!(config.content.include_patterns, vec!["*.md".to_string()]);
        assert_eq!(config.content.max_file_size_mb, 10);
        assert_eq!(config.output.posts_file, "search-data.json");
        assert_eq!(config.output.replies_file, "search-data-replies.json");
    }

    #[test]
    fn test_config_validation_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_file_size() {
        let mut config = Config::default();
        config.content.max_file_size_mb = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_colliding_outputs() {
        let mut config = Config::default();
        config.output.replies_file = config.output.posts_file.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_env_var_override() {
        env::set_var("MDINDEX_CONTENT_DIR", "/srv/archive");
        env::set_var("MDINDEX_MAX_FILE_SIZE_MB", "25");

        let mut config = Config::default();
        config.merge_env();

        assert_eq!(config.content.root_dir, PathBuf::from("/srv/archive"));
        assert_eq!(config.content.max_file_size_mb, 25);

        // Cleanup
        env::remove_var("MDINDEX_CONTENT_DIR");
        env::remove_var("MDINDEX_MAX_FILE_SIZE_MB");
    }

    #[test]
    #[serial]
    fn test_env_var_invalid_size_ignored() {
        env::set_var("MDINDEX_MAX_FILE_SIZE_MB", "not-a-number");

        let mut config = Config::default();
        config.merge_env();

        assert_eq!(config.content.max_file_size_mb, 10);

        env::remove_var("MDINDEX_MAX_FILE_SIZE_MB");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml = r#"
            [content]
            root_dir = "/data/content"
            include_patterns = ["*.md", "*.markdown"]
            max_file_size_mb = 20

            [output]
            dir = "/data/site"
            posts_file = "index.json"
            replies_file = "index-replies.json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.content.root_dir, PathBuf::from("/data/content"));
        assert_eq!(config.content.include_patterns.len(), 2);
        assert_eq!(config.content.max_file_size_mb, 20);
        assert_eq!(config.output.posts_file, "index.json");
    }

    #[test]
    fn test_toml_partial_sections_use_defaults() {
        let toml = r#"
            [content]
            root_dir = "/data/content"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.content.include_patterns, vec!["*.md".to_string()]);
        assert_eq!(config.output.dir, PathBuf::from("./docs"));
    }
}
