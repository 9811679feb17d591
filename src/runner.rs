// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io::{stdout, BufReader, BufWriter, Write};

use clap::Parser;
use log::info;

use crate::errors::SiftError;
use crate::filter::filter_records;
use crate::targets::TargetSet;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Input FASTA file
    #[arg(short, long)]
    fasta: String,

    /// Accession list file (one target per line; free-form text allowed)
    #[arg(short, long)]
    list: String,

    /// Output FASTA file ('-' for standard output)
    #[arg(short, long, default_value = "-")]
    out: String,

    /// Require exact version match (by default NC_001806.1 also matches NC_001806.2)
    #[arg(long = "no-ignore-version", action = clap::ArgAction::SetFalse)]
    ignore_version: bool,
}

pub fn run() -> Result<(), SiftError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();

    // The whole list is materialized before the first FASTA record is read.
    let targets = TargetSet::from_path(&cli.list)?;
    let fasta = BufReader::new(File::open(&cli.fasta)?);

    let (kept, total) = if cli.out == "-" {
        // stdout belongs to the process; lock it for the pass but never close it
        let mut out = stdout().lock();
        filter_records(fasta, &targets, cli.ignore_version, &mut out)?
    } else {
        let mut out = BufWriter::new(File::create(&cli.out)?);
        let counts = filter_records(fasta, &targets, cli.ignore_version, &mut out)?;
        // surface write errors before the summary claims success
        out.flush()?;
        counts
    };

    eprintln!("{}", summary_line(kept, total));
    Ok(())
}

/// The one-line run summary, written to stderr so it never mixes with FASTA
/// output on stdout.
fn summary_line(kept: usize, total: usize) -> String {
    format!("[fastasift] Kept {} / {} records", kept, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_reports_kept_of_total() {
        assert_eq!(summary_line(1, 2), "[fastasift] Kept 1 / 2 records");
        assert_eq!(summary_line(0, 0), "[fastasift] Kept 0 / 0 records");
    }
}
