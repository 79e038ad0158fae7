// sequence.rs - Single-record FASTA loading

use bio::io::fasta;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ProbeError, Result};

/// Path value that selects standard input
pub const STDIN_PATH: &str = "-";

/// The one sequence probes are designed for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSequence {
    pub name: String,
    pub sequence: String,
}

impl TargetSequence {
    /// Load a single-sequence FASTA file, or standard input when `path` is `-`
    pub fn from_fasta_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str() == STDIN_PATH {
            log::debug!("Reading FASTA from standard input");
            return Self::from_fasta_reader(std::io::stdin());
        }

        let file = File::open(path).map_err(|e| {
            ProbeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to open FASTA file '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_fasta_reader(file)
    }

    /// Parse a FASTA stream that must hold exactly one record
    pub fn from_fasta_reader<R: Read>(reader: R) -> Result<Self> {
        let reader = fasta::Reader::new(reader);
        let mut first: Option<fasta::Record> = None;
        let mut count = 0;

        for record_result in reader.records() {
            let record = record_result
                .map_err(|e| ProbeError::invalid_fasta(format!("record {}: {}", count + 1, e)))?;
            count += 1;
            if first.is_none() {
                first = Some(record);
            }
        }

        let record = match (first, count) {
            (None, _) => return Err(ProbeError::EmptyInput),
            (Some(_), n) if n > 1 => return Err(ProbeError::MultipleSequences { count: n }),
            (Some(record), _) => record,
        };

        let name = match record.desc() {
            Some(desc) => format!("{} {}", record.id(), desc),
            None => record.id().to_string(),
        };

        let sequence = String::from_utf8(record.seq().to_vec())
            .ok()
            .filter(|s| s.is_ascii())
            .ok_or_else(|| {
                ProbeError::invalid_fasta(format!("sequence '{}' contains non-ASCII characters", name))
            })?;

        log::info!("Designing probes for sequence: {}", name);
        Ok(Self { name, sequence })
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_multiline_record_is_concatenated() {
        let input = b">chr1 test region\nACGTAC\nGATCAA\nTT\n";
        let target = TargetSequence::from_fasta_reader(&input[..]).unwrap();
        assert_eq!(target.name, "chr1 test region");
        assert_eq!(target.sequence, "ACGTACGATCAATT");
        assert_eq!(target.len(), 14);
    }

    #[test]
    fn test_case_is_preserved() {
        let target = TargetSequence::from_fasta_reader(&b">s\nacgtNNGATC\n"[..]).unwrap();
        assert_eq!(target.sequence, "acgtNNGATC");
    }

    #[test]
    fn test_missing_header_rejected() {
        let err = TargetSequence::from_fasta_reader(&b"ACGTACGT\n"[..]).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidFasta { .. }));
    }

    #[test]
    fn test_second_record_rejected() {
        let input = b">one\nACGT\n>two\nTTTT\n";
        let err = TargetSequence::from_fasta_reader(&input[..]).unwrap_err();
        assert!(matches!(err, ProbeError::MultipleSequences { count: 2 }));
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = TargetSequence::from_fasta_reader(&b""[..]).unwrap_err();
        assert!(matches!(err, ProbeError::EmptyInput));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ">target").unwrap();
        writeln!(file, "AAAGATCCCC").unwrap();

        let target = TargetSequence::from_fasta_path(file.path()).unwrap();
        assert_eq!(target.name, "target");
        assert_eq!(target.sequence, "AAAGATCCCC");
    }

    #[test]
    fn test_missing_file() {
        let err = TargetSequence::from_fasta_path("/nonexistent/target.fa").unwrap_err();
        assert!(matches!(err, ProbeError::Io(_)));
        assert!(err.to_string().contains("/nonexistent/target.fa"));
    }
}
