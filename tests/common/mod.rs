// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides secret store builders, temp environments and a CLI runner

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;
use tokio::fs;

use credtmpl::{FileStore, LookupContext};
use credtmpl::secrets::StoredSecret;

pub struct TestStoreBuilder {
    store: FileStore,
}

impl TestStoreBuilder {
    pub fn new() -> Self {
        Self {
            store: FileStore::default(),
        }
    }

    pub fn with_secret(self, table: &str, name: &str, value: &str) -> Self {
        self.with_versioned_secret(table, name, "0000000000000000001", &[], value)
    }

    pub fn with_context_secret(
        self,
        table: &str,
        name: &str,
        context: &[(&str, &str)],
        value: &str,
    ) -> Self {
        self.with_versioned_secret(table, name, "0000000000000000001", context, value)
    }

    pub fn with_versioned_secret(
        mut self,
        table: &str,
        name: &str,
        version: &str,
        context: &[(&str, &str)],
        value: &str,
    ) -> Self {
        self.store.insert(
            table,
            StoredSecret {
                name: name.to_string(),
                version: version.to_string(),
                context: lookup_context(context),
                value: value.to_string(),
            },
        );
        self
    }

    pub fn build(self) -> FileStore {
        self.store
    }

    pub fn to_yaml(&self) -> String {
        serde_yaml::to_string(&self.store).expect("Failed to serialize store")
    }
}

pub fn lookup_context(pairs: &[(&str, &str)]) -> LookupContext {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn store_file(&self) -> PathBuf {
        self.path().join("secrets.yaml")
    }

    pub fn config_file(&self) -> PathBuf {
        self.path().join("credtmpl.yaml")
    }

    pub async fn write_store(&self, builder: &TestStoreBuilder) -> PathBuf {
        let path = self.store_file();
        fs::write(&path, builder.to_yaml())
            .await
            .expect("Failed to write store file");
        path
    }

    pub async fn write_template(&self, name: &str, body: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, body)
            .await
            .expect("Failed to write template file");
        path
    }

    pub async fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.config_file();
        fs::write(&path, contents)
            .await
            .expect("Failed to write config file");
        path
    }

    /// Build a command for the credtmpl binary isolated from ambient config
    pub fn command(&self) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_credtmpl"));
        command
            .current_dir(self.path())
            .arg("--config")
            .arg(self.config_file())
            .arg("--no-color");
        for key in [
            "CREDTMPL_TABLE",
            "CREDTMPL_STORE",
            "CREDTMPL_STRICT",
            "CREDTMPL_LOG_LEVEL",
            "CREDTMPL_LOG_FORMAT",
            "RUST_LOG",
        ] {
            command.env_remove(key);
        }
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute credtmpl")
    }

    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn credtmpl");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        child.wait_with_output().expect("Failed to wait for credtmpl")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
