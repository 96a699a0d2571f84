//! Command-line interface definitions.
//!
//! This module defines the CLI structure for the quotes binary using clap.

use clap::{Parser, Subcommand};

/// Mindfulness quotes at the command line.
///
/// A CLI tool for picking and listing the built-in quote collection.
#[derive(Parser, Debug)]
#[command(name = "quotes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The command to execute. Defaults to a single random pick.
    #[clap(subcommand)]
    pub command: Option<QuoteCommand>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum QuoteCommand {
    /// Print random quotes.
    ///
    /// Picks uniformly from the built-in collection.
    Random {
        /// How many quotes to print.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },

    /// Print every quote in order.
    List,

    /// Print the number of available quotes.
    Count,
}
