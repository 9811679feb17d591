// SPDX-License-Identifier: MIT

use std::io::{BufRead, Write};

use itertools::Itertools;
use log::debug;

use crate::accession::AccessionPattern;
use crate::errors::SiftError;
use crate::seq::fasta::FastaRecords;
use crate::seq::record::SeqRecord;
use crate::targets::TargetSet;

const LINE_WIDTH: usize = 60;

/// One forward pass over a FASTA stream: records whose header accession is in
/// the target set are written to `out` as they are seen, everything else is
/// discarded. Returns (kept, total) counts.
pub fn filter_records<R: BufRead, W: Write>(
    fasta: R,
    targets: &TargetSet,
    ignore_version: bool,
    out: &mut W,
) -> Result<(usize, usize), SiftError> {
    let pattern = AccessionPattern::new();
    let mut kept = 0;
    let mut total = 0;

    for record in FastaRecords::new(fasta) {
        let record = record?;
        total += 1;
        // A header with no recognizable accession cannot match anything.
        let matched = match pattern.extract(&record.header) {
            Some(acc) => targets.matches(&acc, ignore_version),
            None => false,
        };
        if matched {
            debug!("keeping {}", record.header);
            kept += 1;
            write_record(&record, out)?;
        }
    }

    Ok((kept, total))
}

/// Header verbatim, then the sequence re-wrapped at 60 characters per line
/// (final partial line as-is).
fn write_record<W: Write>(record: &SeqRecord, out: &mut W) -> Result<(), SiftError> {
    writeln!(out, "{}", record.header)?;
    for chunk in &record.sequence.chars().chunks(LINE_WIDTH) {
        writeln!(out, "{}", chunk.collect::<String>())?;
    }
    Ok(())
}
