// ABOUTME: Secret lookup module for credtmpl
// ABOUTME: Provides the store capability, resolver adapter, context parsing and a local store

pub mod context;
pub mod error;
pub mod file;
pub mod resolver;

pub use context::{parse_context, LookupContext};
pub use error::{ContextError, Result, SecretStoreError};
pub use file::{FileStore, StoredSecret};
pub use resolver::{SecretResolver, SecretStore, StoreResolver};
