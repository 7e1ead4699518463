//! Debian control stanzas as they appear in a repository `Packages` file.
//!
//! A stanza is a block of `Field: value` lines terminated by a blank line.
//! Only the fields Debar needs are kept; everything else is skipped.

mod relation;

pub use relation::parse_relations;

use serde::{Deserialize, Serialize};
use std::io::BufRead;
use thiserror::Error;

/// Errors produced while reading a single stanza.
#[derive(Error, Debug)]
pub enum StanzaError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid Size field '{0}'")]
    InvalidSize(String),
}

/// The fields of one package stanza.
///
/// `depends` and `suggests` hold raw package names, one per alternation
/// group, in source order. They are not resolved against the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlStanza {
    pub name: String,
    pub version: String,
    pub description: String,
    pub filename: String,
    pub size: u64,
    pub checksum: String,
    pub depends: Vec<String>,
    pub suggests: Vec<String>,
}

impl ControlStanza {
    /// Read the stanza starting at the reader's current position.
    ///
    /// Reading stops at the first blank line after a field or at end of
    /// input. Returns `Ok(None)` if the input holds no field at all.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Option<Self>, StanzaError> {
        let mut stanza = ControlStanza::default();
        let mut sha256 = None;
        let mut seen_field = false;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);

            if line.trim().is_empty() {
                if seen_field {
                    break;
                }
                continue;
            }
            // Continuation of a multi-line field (long Description).
            if line.starts_with(' ') || line.starts_with('\t') {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            seen_field = true;
            let value = value.trim();

            match key {
                "Package" => stanza.name = value.to_string(),
                "Version" => stanza.version = value.to_string(),
                "Filename" => stanza.filename = value.to_string(),
                "Size" => {
                    stanza.size = value
                        .parse()
                        .map_err(|_| StanzaError::InvalidSize(value.to_string()))?
                }
                "MD5sum" => stanza.checksum = value.to_string(),
                "SHA256" => sha256 = Some(value.to_string()),
                "Description" => stanza.description = value.to_string(),
                "Depends" => stanza.depends = parse_relations(value),
                "Suggests" => stanza.suggests = parse_relations(value),
                _ => {}
            }
        }

        if !seen_field {
            return Ok(None);
        }
        if stanza.checksum.is_empty() {
            if let Some(sha256) = sha256 {
                stanza.checksum = sha256;
            }
        }
        Ok(Some(stanza))
    }
}
