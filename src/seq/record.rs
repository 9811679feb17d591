// A FASTA record: the header line kept verbatim (leading '>' included) so
// output can reproduce it, and the sequence concatenated without newlines.

#[derive(Debug, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}
