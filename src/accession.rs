// SPDX-License-Identifier: MIT

use regex::Regex;

/// An accession recognized in a FASTA header, in the two forms matching cares
/// about: as written (versioned) and with the version suffix stripped.
#[derive(Debug, PartialEq, Eq)]
pub struct HeaderAccession {
    pub versioned: String,
    pub unversioned: String,
}

impl HeaderAccession {
    fn from_versioned(acc: &str) -> Self {
        HeaderAccession {
            versioned: acc.to_string(),
            unversioned: strip_version(acc).to_string(),
        }
    }
}

/// Everything before the first '.', i.e. the accession without its version.
pub fn strip_version(acc: &str) -> &str {
    acc.split('.').next().unwrap_or(acc)
}

/// Recognizer for the canonical accession shape, e.g. NC_001806.1: one to
/// three uppercase letters, an underscore, digits, a dot, version digits.
pub struct AccessionPattern {
    canonical: Regex,
    version_pair: Regex,
}

impl AccessionPattern {
    pub fn new() -> Self {
        AccessionPattern {
            canonical: Regex::new(r"[A-Z]{1,3}_\d+\.\d+").expect("hard-coded pattern"),
            version_pair: Regex::new(r"^\d+\.\d+$").expect("hard-coded pattern"),
        }
    }

    /// First canonical accession embedded anywhere in the text, if any.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.canonical.find(text).map(|m| m.as_str())
    }

    /// Whether a token is a bare DIGITS.VERSION pair, as in the second token
    /// of a list line like "NC 001806.1".
    pub fn is_version_pair(&self, token: &str) -> bool {
        self.version_pair.is_match(token)
    }

    /// Normalize a candidate pulled from a list line: trimmed, underscore
    /// form, and reduced to the embedded canonical accession when one is
    /// present (this also unwraps pipe-delimited forms like "ref|NC_001806.1|").
    pub fn normalize(&self, candidate: &str) -> String {
        let acc = candidate.trim().replace(' ', "_");
        match self.find(&acc) {
            Some(m) => m.to_string(),
            None => acc,
        }
    }

    /// Extract an accession from a FASTA header line. Returns None when
    /// neither the header text nor its first token contains the canonical
    /// shape; such a record can never match.
    pub fn extract(&self, header: &str) -> Option<HeaderAccession> {
        let h = header.strip_prefix('>').unwrap_or(header);
        if let Some(acc) = self.find(h) {
            return Some(HeaderAccession::from_versioned(acc));
        }
        // Fallback: first whitespace token, with pipe wrappers and stray
        // spaces removed.
        let tok = h.split_whitespace().next().unwrap_or("");
        let tok = tok.trim_matches('|').replace(' ', "_");
        self.find(&tok).map(HeaderAccession::from_versioned)
    }
}

impl Default for AccessionPattern {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_idempotent_on_canonical() {
        let pat = AccessionPattern::new();
        assert_eq!(pat.normalize("NC_001806.1"), "NC_001806.1");
        assert_eq!(pat.normalize(&pat.normalize("NC_001806.1")), "NC_001806.1");
    }

    #[test]
    fn normalize_joins_space_separated_form() {
        let pat = AccessionPattern::new();
        assert_eq!(pat.normalize("NC 001806.1"), "NC_001806.1");
    }

    #[test]
    fn normalize_unwraps_pipe_delimited_form() {
        let pat = AccessionPattern::new();
        assert_eq!(pat.normalize("ref|NC_001806.1|"), "NC_001806.1");
    }

    #[test]
    fn normalize_passes_through_versionless_token() {
        let pat = AccessionPattern::new();
        assert_eq!(pat.normalize("NC_001806"), "NC_001806");
    }

    #[test]
    fn strip_version_takes_pre_dot_prefix() {
        assert_eq!(strip_version("NC_001806.1"), "NC_001806");
        assert_eq!(strip_version("AC_12.34"), "AC_12");
        assert_eq!(strip_version("NC_001806"), "NC_001806");
    }

    #[test]
    fn extract_from_plain_header() {
        let pat = AccessionPattern::new();
        let acc = pat.extract(">NC_001806.1 Human herpesvirus 1").unwrap();
        assert_eq!(acc.versioned, "NC_001806.1");
        assert_eq!(acc.unversioned, "NC_001806");
    }

    #[test]
    fn extract_from_pipe_delimited_header() {
        let pat = AccessionPattern::new();
        let acc = pat.extract(">ref|NC_001806.1| Human herpesvirus 1").unwrap();
        assert_eq!(acc.versioned, "NC_001806.1");
    }

    #[test]
    fn extract_accepts_header_without_leading_gt() {
        let pat = AccessionPattern::new();
        let acc = pat.extract("NC_001806.1 description").unwrap();
        assert_eq!(acc.versioned, "NC_001806.1");
    }

    #[test]
    fn extract_returns_none_without_accession() {
        let pat = AccessionPattern::new();
        assert_eq!(pat.extract(">some unnamed contig"), None);
        assert_eq!(pat.extract(">"), None);
    }
}
