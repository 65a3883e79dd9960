// ABOUTME: Secret store capability and the resolver adapter used by templates
// ABOUTME: Binds a secret name and lookup context to a single store driver call

use tracing::debug;

use super::context::LookupContext;
use super::error::Result;

/// Driver capability that performs the actual credential lookup.
///
/// `version` is a lookup hint; an empty string asks for the latest version.
/// `table` is the namespace the credential lives in.
pub trait SecretStore: Send + Sync {
    fn get_secret(
        &self,
        name: &str,
        version: &str,
        table: &str,
        context: &LookupContext,
    ) -> Result<String>;
}

/// Resolves a secret reference in the vocabulary of the template engine.
pub trait SecretResolver: Send + Sync {
    fn resolve(&self, name: &str, context: &LookupContext) -> Result<String>;
}

/// Pass-through adapter from [`SecretResolver`] to a [`SecretStore`].
///
/// No retry, caching or transformation: driver errors come back verbatim.
pub struct StoreResolver<'s> {
    store: &'s dyn SecretStore,
    table: String,
}

impl<'s> StoreResolver<'s> {
    pub fn new(store: &'s dyn SecretStore, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

impl SecretResolver for StoreResolver<'_> {
    fn resolve(&self, name: &str, context: &LookupContext) -> Result<String> {
        debug!(
            "Resolving secret '{}' from table '{}' with {} context tag(s)",
            name,
            self.table,
            context.len()
        );
        self.store.get_secret(name, "", &self.table, context)
    }
}
