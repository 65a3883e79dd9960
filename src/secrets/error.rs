// ABOUTME: Error types for secret lookup and context parsing
// ABOUTME: Defines the failures a store driver and the context parser can report

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SecretStoreError {
    #[error("Item {{'name': '{name}'}} couldn't be found.")]
    NotFound { name: String },

    #[error("Table not found: {table}")]
    TableNotFound { table: String },

    #[error(
        "Could not decrypt {name}. The encryption context provided may not match the one used when the credential was stored."
    )]
    ContextMismatch { name: String },

    #[error("Failed to load secret store {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    #[error("{0}")]
    Backend(String),
}

impl SecretStoreError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("invalid context format: {element:?} ({reason})")]
    InvalidFormat { element: String, reason: String },
}

impl ContextError {
    pub fn invalid(element: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            element: element.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SecretStoreError>;
