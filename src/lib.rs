// ABOUTME: Main library module for credtmpl
// ABOUTME: Exports the template engine, secret resolution and CLI components

pub mod cli;
pub mod secrets;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use secrets::{
    parse_context, ContextError, FileStore, LookupContext, SecretResolver, SecretStore,
    SecretStoreError, StoreResolver,
};
pub use template::{render, TemplateEngine, TemplateError};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
