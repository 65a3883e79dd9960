// ABOUTME: Error types for CLI command execution
// ABOUTME: Covers argument validation, template source reading and configuration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    ArgumentCount(String),

    #[error("Failed to read template {source_name}")]
    SourceRead {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}
