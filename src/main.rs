//! Mindfulness quotes CLI.
//!
//! This binary wires the quote service to the terminal:
//!
//! ```bash
//! cargo run --bin quotes            # one random quote
//! cargo run --bin quotes random -n 3
//! cargo run --bin quotes list
//! cargo run --bin quotes count
//! ```

use clap::Parser;
use log::debug;

use mindful_quotes::cli::{Cli, QuoteCommand};
use mindful_quotes::QuoteService;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = Cli::parse();
    let service = QuoteService::default();
    debug!("service ready with {} quotes", service.quote_count());

    match args.command.unwrap_or(QuoteCommand::Random { count: 1 }) {
        QuoteCommand::Random { count } => {
            for _ in 0..count {
                println!("{}", service.random_quote());
            }
        }
        QuoteCommand::List => {
            for quote in service.all_quotes() {
                println!("{}", quote);
            }
        }
        QuoteCommand::Count => {
            println!("{}", service.quote_count());
        }
    }

    debug!("served {} picks", service.stats().picks);
}
