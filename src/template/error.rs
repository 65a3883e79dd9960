// ABOUTME: Error types for template engine operations
// ABOUTME: Separates render-fatal failures from inline placeholder errors

use thiserror::Error;

use crate::secrets::{ContextError, SecretStoreError};

/// Failures that abort a whole render call.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template syntax error in \"{name}\": {message}")]
    SyntaxError { name: String, message: String },

    #[error("Template execution error: {0}")]
    ExecutionError(String),
}

impl TemplateError {
    pub(crate) fn syntax(name: &str, err: &handlebars::TemplateError) -> Self {
        Self::SyntaxError {
            name: name.to_string(),
            message: summarize(&err.to_string()),
        }
    }

    pub(crate) fn execution(err: &handlebars::RenderError) -> Self {
        Self::ExecutionError(condense(&err.to_string()))
    }
}

/// Failures confined to a single `get` placeholder.
///
/// These are written into the output in place of the secret value and
/// never abort the render.
#[derive(Error, Debug)]
pub enum InlineError {
    #[error("(too few arguments)")]
    TooFewArguments,

    #[error("(invalid string: {0})")]
    InvalidString(String),

    #[error("(invalid argument: {0})")]
    InvalidArgument(String),

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Resolution(#[from] SecretStoreError),
}

pub type Result<T> = std::result::Result<T, TemplateError>;

/// Reduce a multi-line handlebars syntax report to "reason (location)".
fn summarize(report: &str) -> String {
    let mut lines = report.lines().map(str::trim).filter(|l| !l.is_empty());
    let reason = lines.next().unwrap_or_default().to_string();

    match lines.find_map(|l| l.strip_prefix("-->")) {
        Some(location) => format!("{} ({})", reason, location.trim()),
        None => reason,
    }
}

fn condense(report: &str) -> String {
    report
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
