// SPDX-License-Identifier: MIT

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::accession::{strip_version, AccessionPattern, HeaderAccession};
use crate::errors::SiftError;

/// The accessions to keep, as two sets: exact versioned strings and
/// version-stripped ones. Built once from the list file before any FASTA
/// record is read.
#[derive(Debug, Default)]
pub struct TargetSet {
    versioned: HashSet<String>,
    unversioned: HashSet<String>,
}

impl TargetSet {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SiftError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a target list: one accession per line, extracted best-effort
    /// from free-form text. Blank lines and '#' comments are skipped, and a
    /// line no strategy can make sense of is dropped, never an error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, SiftError> {
        let pattern = AccessionPattern::new();
        let mut targets = TargetSet::default();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            // A canonical accession anywhere in the line wins; spaces inside
            // it are tolerated ("NC 001806.1 Human herpesvirus 1" holds
            // NC_001806.1).
            let underscored = line.replace(' ', "_");
            if let Some(acc) = pattern.find(&underscored) {
                targets.add(acc, &pattern);
                continue;
            }
            // Join a bare alphabetic prefix with a following DIGITS.VERSION
            // token.
            let toks: Vec<&str> = line.split_whitespace().collect();
            if toks.len() >= 2
                && toks[0].chars().all(|c| c.is_alphabetic())
                && pattern.is_version_pair(toks[1])
            {
                targets.add(&format!("{}_{}", toks[0], toks[1]), &pattern);
                continue;
            }
            // Last resort: the first token as a raw accession.
            if let Some(tok) = toks.first() {
                targets.add(tok, &pattern);
            }
        }

        info!(
            "parsed targets: {} versioned, {} unversioned",
            targets.versioned.len(),
            targets.unversioned.len()
        );
        Ok(targets)
    }

    fn add(&mut self, candidate: &str, pattern: &AccessionPattern) {
        let acc = pattern.normalize(candidate);
        if acc.is_empty() {
            return;
        }
        if acc.contains('.') {
            self.unversioned.insert(strip_version(&acc).to_string());
            self.versioned.insert(acc);
        } else {
            // No version present, so this target is only reachable through
            // version-insensitive matching.
            debug!("versionless target: {}", acc);
            self.unversioned.insert(acc);
        }
    }

    /// Matching decision: exact versioned membership, or version-stripped
    /// membership when ignore_version is set.
    pub fn matches(&self, acc: &HeaderAccession, ignore_version: bool) -> bool {
        self.versioned.contains(&acc.versioned)
            || (ignore_version && self.unversioned.contains(&acc.unversioned))
    }
}
