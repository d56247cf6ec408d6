//! Vault-scoped client for the 1Password CLI.
//!
//! [`OnePassword`] is bound to one vault. Every method builds an `op`
//! argument vector, runs it once, and decodes the reply. Nothing is cached,
//! so every call re-invokes the CLI.

use crate::config::{Config, DEFAULT_PROGRAM, DEFAULT_VAULT};
use crate::error::{OnePasswordError, Result};
use crate::subprocess::{self, Runner, SystemRunner};
use crate::types::Record;
use crate::version::{self, Version};

/// Client bound to a single 1Password vault.
///
/// Construction probes `op --version`, so a successfully built client always
/// has a working CLI behind it.
#[derive(Debug, Clone)]
pub struct OnePassword<R = SystemRunner> {
    vault: String,
    program: String,
    cli_version: Version,
    runner: R,
}

impl OnePassword<SystemRunner> {
    /// Bind to `vault`, using `op` from `PATH`.
    pub fn new(vault: impl Into<String>) -> Result<Self> {
        Self::with_runner(vault, DEFAULT_PROGRAM, SystemRunner)
    }

    /// Bind to the conventional `Private` vault.
    pub fn private() -> Result<Self> {
        Self::new(DEFAULT_VAULT)
    }

    /// Bind using the program and default vault from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_runner(
            config.vault.default.clone(),
            config.cli.program.clone(),
            SystemRunner,
        )
    }

    /// Bind using the resolved config file plus environment overrides.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&Config::resolve()?)
    }
}

impl<R: Runner> OnePassword<R> {
    /// Bind to `vault`, invoking `program` through `runner`.
    pub fn with_runner(
        vault: impl Into<String>,
        program: impl Into<String>,
        runner: R,
    ) -> Result<Self> {
        let vault = vault.into();
        if vault.is_empty() {
            return Err(OnePasswordError::InvalidVault);
        }
        let program = program.into();
        let cli_version = version::get_op_cli_version_with(&runner, &program)?;

        tracing::debug!(vault = %vault, cli_version = %cli_version, "bound 1Password client");
        Ok(Self {
            vault,
            program,
            cli_version,
            runner,
        })
    }

    /// Name of the bound vault.
    pub fn vault(&self) -> &str {
        &self.vault
    }

    /// Version reported by the CLI at construction.
    pub fn cli_version(&self) -> &Version {
        &self.cli_version
    }

    /// Fetch an item by name or ID.
    ///
    /// `fields` narrows the reply to the given labels, in order. With no
    /// fields the whole item comes back.
    pub fn get_item<S: AsRef<str>>(&self, item: &str, fields: &[S]) -> Result<Record> {
        let mut cmd = self.command(&["item", "get", item, "--format", "json", "--vault"]);
        cmd.push(self.vault.clone());

        if !fields.is_empty() {
            cmd.push("--fields".to_string());
            cmd.push(fields_selector(fields));
        }

        let stdout = subprocess::run_cmd(&self.runner, &cmd)?;
        Record::from_slice(&stdout)
    }

    /// Fetch one field of an item and return its `value`.
    pub fn get_value(&self, item: &str, field: &str) -> Result<String> {
        self.get_item(item, &[field])?.require_str("value")
    }

    pub fn get_username(&self, item: &str) -> Result<String> {
        self.get_value(item, "username")
    }

    pub fn get_password(&self, item: &str) -> Result<String> {
        self.get_value(item, "password")
    }

    /// Resolve an item name to its UUID.
    pub fn get_uuid(&self, item: &str) -> Result<String> {
        self.get_item::<&str>(item, &[])?.require_str("id")
    }

    /// Download a document. The bytes are returned exactly as `op` wrote them.
    pub fn get_document(&self, item: &str) -> Result<Vec<u8>> {
        let mut cmd = self.command(&["document", "get", item, "--vault"]);
        cmd.push(self.vault.clone());
        subprocess::run_cmd(&self.runner, &cmd)
    }

    /// List items in the bound vault, optionally filtered.
    ///
    /// Empty `categories` or `tags` add no filter.
    pub fn list_items<C: AsRef<str>, T: AsRef<str>>(
        &self,
        categories: &[C],
        tags: &[T],
    ) -> Result<Record> {
        let mut cmd = self.command(&["items", "list", "--vault"]);
        cmd.push(self.vault.clone());
        cmd.push("--format".to_string());
        cmd.push("json".to_string());

        if !categories.is_empty() {
            cmd.push("--categories".to_string());
            cmd.push(join(categories));
        }

        if !tags.is_empty() {
            cmd.push("--tags".to_string());
            cmd.push(join(tags));
        }

        let stdout = subprocess::run_cmd(&self.runner, &cmd)?;
        Record::from_slice(&stdout)
    }

    fn command(&self, args: &[&str]) -> Vec<String> {
        std::iter::once(self.program.as_str())
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect()
    }
}

/// List every vault the signed-in account can see.
pub fn list_vaults() -> Result<Record> {
    list_vaults_with(&SystemRunner, DEFAULT_PROGRAM)
}

/// [`list_vaults`] through an explicit runner and program.
pub fn list_vaults_with<R: Runner + ?Sized>(runner: &R, program: &str) -> Result<Record> {
    let cmd: Vec<String> = [program, "vault", "list", "--format", "json"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let stdout = subprocess::run_cmd(runner, &cmd)?;
    Record::from_slice(&stdout)
}

/// Build the `--fields` value: `label=a,label=b,...` in the given order.
pub fn fields_selector<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| format!("label={}", f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

fn join<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}
