// ABOUTME: Local YAML-backed secret store for development and testing
// ABOUTME: Implements versioned, context-scoped lookups over a plaintext secrets file

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

use super::context::LookupContext;
use super::error::{Result, SecretStoreError};
use super::resolver::SecretStore;

fn default_version() -> String {
    "0000000000000000001".to_string()
}

/// A single stored credential version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSecret {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub context: LookupContext,
    pub value: String,
}

/// Secret store read from a YAML file mapping table names to secret lists.
///
/// ```yaml
/// credential-store:
///   - name: db-pass
///     version: "0000000000000000002"
///     context:
///       env: prod
///     value: s3cr3t
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileStore {
    tables: IndexMap<String, Vec<StoredSecret>>,
}

impl FileStore {
    /// Load a store from a YAML file
    pub async fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|e| SecretStoreError::Load {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let store: FileStore =
            serde_yaml::from_str(&contents).map_err(|e| SecretStoreError::Load {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        debug!(
            "Loaded secret store {} with {} table(s)",
            path.display(),
            store.tables.len()
        );
        Ok(store)
    }

    /// Parse a store from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| SecretStoreError::backend(e.to_string()))
    }

    /// Add a secret version to a table
    pub fn insert(&mut self, table: impl Into<String>, secret: StoredSecret) {
        self.tables.entry(table.into()).or_default().push(secret);
    }

    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

/// Zero-padded versions compare by length first, then lexically.
fn version_key(version: &str) -> (usize, &str) {
    (version.len(), version)
}

impl SecretStore for FileStore {
    fn get_secret(
        &self,
        name: &str,
        version: &str,
        table: &str,
        context: &LookupContext,
    ) -> Result<String> {
        let secrets = self
            .tables
            .get(table)
            .ok_or_else(|| SecretStoreError::TableNotFound {
                table: table.to_string(),
            })?;

        let mut candidates = secrets.iter().filter(|s| s.name == name);

        let secret = if version.is_empty() {
            candidates.max_by(|a, b| version_key(&a.version).cmp(&version_key(&b.version)))
        } else {
            candidates.find(|s| s.version == version)
        }
        .ok_or_else(|| SecretStoreError::not_found(name))?;

        // IndexMap equality ignores insertion order
        if &secret.context != context {
            return Err(SecretStoreError::ContextMismatch {
                name: name.to_string(),
            });
        }

        Ok(secret.value.clone())
    }
}
