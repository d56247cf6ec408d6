pub mod common;
pub mod document;
pub mod get;
pub mod json_output;
pub mod list;
pub mod value;
pub mod vaults;
pub mod version;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "onepassword", version, about = "Query 1Password through the `op` CLI")]
pub struct Cli {
    /// Vault to query (defaults to the configured vault, then "Private")
    #[arg(long, global = true, env = "ONEPASSWORD_VAULT")]
    pub vault: Option<String>,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the installed `op` version
    Version,

    /// List all vaults the account can access
    Vaults,

    /// Get an item as JSON
    Get {
        /// Item name or ID
        item: String,
        /// Only return these field labels (repeatable)
        #[arg(long = "field", value_name = "LABEL")]
        fields: Vec<String>,
    },

    /// Print the value of one field of an item
    Value {
        /// Item name or ID
        item: String,
        /// Field label
        field: String,
    },

    /// Print the username of an item
    Username {
        /// Item name or ID
        item: String,
    },

    /// Print the password of an item
    Password {
        /// Item name or ID
        item: String,
    },

    /// Print the UUID of an item
    Uuid {
        /// Item name or ID
        item: String,
    },

    /// Download a document
    Document {
        /// Document name or ID
        item: String,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<String>,
    },

    /// List items in the vault
    List {
        /// Filter by category (repeatable)
        #[arg(long = "category", value_name = "CATEGORY")]
        categories: Vec<String>,
        /// Filter by tag (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },
}
