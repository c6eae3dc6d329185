use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Single-user inventory ledger for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Username to operate as (falls back to config, then a prompt)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Override the data directory
    #[arg(long, global = true, value_name = "PATH")]
    pub store_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log an add/remove transaction against one of your items
    #[command(alias = "tx")]
    Log {
        /// Id of the item
        item_id: Uuid,

        /// Action to apply: add or remove
        action: String,

        /// Amount to add or remove (positive integer)
        amount: i64,
    },

    /// List all items in the ledger
    #[command(alias = "ls")]
    List,

    /// Create a new item
    #[command(alias = "n")]
    Create {
        /// Name of the item
        name: String,

        /// Starting quantity (positive integer)
        quantity: i64,

        /// Unit price (positive number)
        price: f64,
    },

    /// Update one of your items (omitted fields are prompted for)
    #[command(alias = "e")]
    Update {
        /// Id of the item
        item_id: Uuid,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New quantity
        #[arg(long)]
        quantity: Option<i64>,

        /// New price
        #[arg(long)]
        price: Option<f64>,
    },

    /// Delete one of your items
    #[command(alias = "rm")]
    Delete {
        /// Id of the item
        item_id: Uuid,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (currently only "user")
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
