// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use crate::seq::record::SeqRecord;

/// Streaming FASTA reader: yields one record at a time, so a large file is
/// never held in memory. A '>' line starts a record; every other line is
/// trimmed and appended to the current sequence. Lines before the first
/// header are dropped.
pub struct FastaRecords<R: BufRead> {
    lines: Lines<R>,
    current: Option<SeqRecord>,
}

impl FastaRecords<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let file = File::open(path)?;
        Ok(FastaRecords::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        FastaRecords {
            lines: reader.lines(),
            current: None,
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = Result<SeqRecord, io::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next() {
                // end of stream: emit the in-progress record, if any
                None => return self.current.take().map(Ok),
                Some(Err(e)) => return Some(Err(e)),
                Some(Ok(line)) => {
                    if line.starts_with('>') {
                        let started = SeqRecord {
                            header: line,
                            sequence: String::new(),
                        };
                        if let Some(done) = self.current.replace(started) {
                            return Some(Ok(done));
                        }
                    } else if let Some(rec) = self.current.as_mut() {
                        rec.sequence.push_str(line.trim());
                    }
                }
            }
        }
    }
}
