//! Thin client for the 1Password CLI (`op`).
//!
//! Every operation builds an `op` argument vector, runs it once as a blocking
//! subprocess, and decodes the reply into a [`types::Record`] or raw bytes.
//! Failures surface as a typed [`error::OnePasswordError`]. Authentication,
//! storage and unlock are left entirely to `op` itself.
//!
//! # Quick start
//!
//! ```no_run
//! use onepassword::api::OnePassword;
//!
//! let op = OnePassword::new("Private")?;
//! let password = op.get_password("GitHub")?;
//! let vaults = onepassword::api::list_vaults()?;
//! # Ok::<(), onepassword::error::OnePasswordError>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod subprocess;
pub mod types;
pub mod version;

pub use api::{list_vaults, OnePassword};
pub use error::{OnePasswordError, Result};
pub use types::Record;
pub use version::{get_op_cli_version, Version};
