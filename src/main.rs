#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

use std::io::{self, Write};

use color_eyre::eyre::Result;
use order_messages::{csv, messages::OrderMessages};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::CliArgs;

pub(crate) mod cli;

fn main() -> Result<()> {
    setup_tracing();

    let cli_args = CliArgs::load()?;

    let rows = csv::read_input::<csv::CsvPurchaseRecord>(&cli_args.input_file_path)?;

    let mut messages = OrderMessages::new(cli_args.partitions);
    for row_result in rows {
        match row_result {
            Ok(row) => {
                let _ = messages
                    .handle(row)
                    .inspect_err(|e| debug!("Error processing row: {}", e));
            }
            Err(e) => debug!("Error parsing row: {}", e),
        }
    }

    let mut out = io::stdout().lock();
    for order in messages.finish() {
        match order {
            Ok(envelopes) => {
                for envelope in envelopes {
                    writeln!(out, "{}", envelope.to_json()?)?;
                }
            }
            Err(e) => debug!("Error encoding order: {}", e),
        }
    }

    Ok(())
}

// Logs go to stderr so stdout carries only messages. RUST_LOG overrides the level.
fn setup_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}
