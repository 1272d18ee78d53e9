// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

//! Extracts the delay-time SysEx table from a firmware header and emits
//! a self-contained Rust lookup module.

use std::{fs, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;

use pedalio::sysex::{extract, generate_module, DelayTable};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Extract the delay-time SysEx lookup table from a firmware header"
)]
struct Args {
    /// Header containing the `{ ms, { bytes… } }` tuples
    input: PathBuf,

    /// Generated Rust module to (over)write
    output: PathBuf,

    /// Name of the generated table
    #[arg(long, default_value = "DELAY_TIME_LOOKUP")]
    table_name: String,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    log::info!("Reading {}", args.input.display());
    let header = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let entries = extract(&header)?;
    log::info!("Found {} entries", entries.len());

    let table = DelayTable::new(entries).context("extracted table is unusable")?;
    let module = generate_module(&table, &args.table_name);

    log::info!("Writing {}", args.output.display());
    fs::write(&args.output, module)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
