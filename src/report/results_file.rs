//! Results file - an append-only, plain-text log of finished runs.
//!
//! # Record Layout
//! ```text
//! ========================================
//! Algorithm  : FIFO
//! Timestamp  : 1718000000
//! Frame Size : 3
//! Page String: 1 2 3 4 1 2 5 1 2 3 4 5
//! Page Faults: 9
//! Fault Rate : 0.75
//! Hit Rate   : 0.25
//! Eviction Log:
//!   Step 1: page 1 loaded into empty frame
//!   ...
//! Checksum   : 5c1d07a2
//! ========================================
//! ```
//!
//! # Checksum
//! CRC32 over every record line before the `Checksum` line, newlines
//! included. Lets a reader detect records that were truncated or edited.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::common::config::RESULTS_FILE_NAME;
use crate::common::PageId;
use crate::error::{Error, Result};
use crate::sim::RunResult;

const SEPARATOR: &str = "========================================";
const CHECKSUM_PREFIX: &str = "Checksum   : ";

/// Handle to a results file on disk.
///
/// The file is opened per call, so a handle can outlive any number of
/// appends and reads.
#[derive(Debug, Clone)]
pub struct ResultsFile {
    path: PathBuf,
}

impl ResultsFile {
    /// Results file at `path`. Nothing is created until the first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Results file named [`RESULTS_FILE_NAME`] in the working directory.
    pub fn default_location() -> Self {
        Self::new(RESULTS_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record for `result`, creating the file if needed.
    ///
    /// Returns the record's checksum.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be opened or written.
    pub fn append(&self, reference: &[PageId], result: &RunResult) -> Result<u32> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.append_at(reference, result, timestamp)
    }

    /// Append a record stamped with `timestamp` (seconds since the Unix epoch).
    pub fn append_at(&self, reference: &[PageId], result: &RunResult, timestamp: u64) -> Result<u32> {
        let body = format_record(reference, result, timestamp);
        let checksum = crc32fast::hash(body.as_bytes());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(
            file,
            "\n{}\n{}{}{:08x}\n{}\n",
            SEPARATOR, body, CHECKSUM_PREFIX, checksum, SEPARATOR
        )?;
        file.flush()?;

        Ok(checksum)
    }

    /// Every record in the file, oldest first.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be read.
    pub fn read_records(&self) -> Result<Vec<String>> {
        let mut contents = String::new();
        File::open(&self.path)?.read_to_string(&mut contents)?;
        Ok(parse_records(&contents))
    }
}

/// Record body: every line up to, not including, the checksum line.
pub fn format_record(reference: &[PageId], result: &RunResult, timestamp: u64) -> String {
    let page_string = reference
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut body = format!(
        "Algorithm  : {}\n\
         Timestamp  : {}\n\
         Frame Size : {}\n\
         Page String: {}\n\
         Page Faults: {}\n\
         Fault Rate : {:.2}\n\
         Hit Rate   : {:.2}\n\
         Eviction Log:\n",
        result.policy(),
        timestamp,
        result.frame_size(),
        page_string,
        result.faults(),
        result.fault_rate(),
        result.hit_rate()
    );
    for entry in result.eviction_log().iter() {
        body.push_str("  ");
        body.push_str(entry);
        body.push('\n');
    }
    body
}

/// Split file contents into records (the text between separator lines).
pub fn parse_records(contents: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut current: Option<String> = None;

    for line in contents.lines() {
        if line == SEPARATOR {
            match current.take() {
                Some(record) => records.push(record),
                None => current = Some(String::new()),
            }
        } else if let Some(record) = current.as_mut() {
            record.push_str(line);
            record.push('\n');
        }
    }
    records
}

/// Check a record against its trailing checksum line.
///
/// # Errors
/// - `Error::Parse` if the checksum line is missing or malformed
/// - `Error::ChecksumMismatch` if the body does not hash to the stored value
pub fn verify_record(record: &str) -> Result<()> {
    let start = record
        .rfind(CHECKSUM_PREFIX)
        .ok_or_else(|| Error::Parse("record has no checksum line".into()))?;
    let (body, checksum_line) = record.split_at(start);

    let hex = checksum_line[CHECKSUM_PREFIX.len()..].trim();
    let stored = u32::from_str_radix(hex, 16)
        .map_err(|e| Error::Parse(format!("bad checksum '{}': {}", hex, e)))?;
    let computed = crc32fast::hash(body.as_bytes());

    if stored == computed {
        Ok(())
    } else {
        Err(Error::ChecksumMismatch { stored, computed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;
    use crate::sim::{run_once, Policy};
    use tempfile::tempdir;

    #[test]
    fn test_format_record() {
        let reference = pages(&[1, 2, 1]);
        let result = run_once(Policy::Lru, &reference, 1).unwrap();
        let body = format_record(&reference, &result, 42);

        assert_eq!(
            body,
            "Algorithm  : LRU\n\
             Timestamp  : 42\n\
             Frame Size : 1\n\
             Page String: 1 2 1\n\
             Page Faults: 3\n\
             Fault Rate : 1.00\n\
             Hit Rate   : 0.00\n\
             Eviction Log:\n  \
             Step 1: page 1 loaded into empty frame\n  \
             Step 2: page 2 replaced page 1 (LRU)\n  \
             Step 3: page 1 replaced page 2 (LRU)\n"
        );
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = tempdir().unwrap();
        let file = ResultsFile::new(dir.path().join("results.txt"));
        let reference = pages(&[1, 2, 3, 1]);

        let fifo = run_once(Policy::Fifo, &reference, 2).unwrap();
        let opt = run_once(Policy::Optimal, &reference, 2).unwrap();
        file.append_at(&reference, &fifo, 1).unwrap();
        file.append_at(&reference, &opt, 2).unwrap();

        let records = file.read_records().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].starts_with("Algorithm  : FIFO\n"));
        assert!(records[1].starts_with("Algorithm  : Optimal\n"));
        for record in &records {
            verify_record(record).unwrap();
        }
    }

    #[test]
    fn test_tampered_record_fails_verification() {
        let dir = tempdir().unwrap();
        let file = ResultsFile::new(dir.path().join("results.txt"));
        let reference = pages(&[4, 4]);
        let result = run_once(Policy::Fifo, &reference, 1).unwrap();
        file.append_at(&reference, &result, 7).unwrap();

        let record = file.read_records().unwrap().remove(0);
        let tampered = record.replace("Page Faults: 1", "Page Faults: 0");

        assert!(matches!(
            verify_record(&tampered),
            Err(Error::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_record_without_checksum() {
        assert!(matches!(
            verify_record("Algorithm  : FIFO\n"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let file = ResultsFile::new(dir.path().join("absent.txt"));
        assert!(matches!(file.read_records(), Err(Error::Io(_))));
    }

    #[test]
    fn test_default_location() {
        assert_eq!(
            ResultsFile::default_location().path(),
            Path::new(RESULTS_FILE_NAME)
        );
    }
}
