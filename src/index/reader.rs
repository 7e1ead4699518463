use super::record::{IndexRecord, RECORD_WIDTH};
use crate::core::{DebarError, DebarResult};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Sequential reader over the records of an index file
pub struct IndexReader {
    reader: BufReader<File>,
    path: PathBuf,
    buf: [u8; RECORD_WIDTH],
}

impl IndexReader {
    /// Open an index file for a scan from its first record
    pub fn open(path: &Path) -> DebarResult<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                DebarError::corrupt_index(path, "index file is missing")
            } else {
                DebarError::corrupt_index(path, format!("cannot open index: {}", e))
            }
        })?;

        Ok(Self {
            reader: BufReader::with_capacity(64 * RECORD_WIDTH, file),
            path: path.to_path_buf(),
            buf: [0u8; RECORD_WIDTH],
        })
    }

    /// Read the next record without decoding it
    ///
    /// Returns `Ok(None)` at a clean end of file. A trailing partial record
    /// is reported as a corrupt index.
    pub fn next_raw(&mut self) -> DebarResult<Option<&[u8; RECORD_WIDTH]>> {
        let mut filled = 0;
        while filled < RECORD_WIDTH {
            match self.reader.read(&mut self.buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        match filled {
            0 => Ok(None),
            RECORD_WIDTH => Ok(Some(&self.buf)),
            n => Err(DebarError::corrupt_index(
                &self.path,
                format!("trailing partial record of {} bytes", n),
            )),
        }
    }

    /// Decode a raw record, attributing failures to this index file
    pub fn decode(&self, raw: &[u8; RECORD_WIDTH]) -> DebarResult<IndexRecord> {
        IndexRecord::decode(raw).map_err(|reason| DebarError::corrupt_index(&self.path, reason))
    }
}

impl Iterator for IndexReader {
    type Item = DebarResult<IndexRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = match self.next_raw() {
            Ok(Some(raw)) => *raw,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };
        Some(self.decode(&raw))
    }
}
