use crate::core::{DebarError, DebarResult};

/// Width of the name and component fields, including the NUL terminator.
pub const FIELD_WIDTH: usize = 128;

/// Longest name or component that fits a field.
pub const MAX_KEY_LEN: usize = FIELD_WIDTH - 1;

/// Width of the little-endian stanza offset.
pub const OFFSET_WIDTH: usize = 8;

/// Width of one record on disk.
pub const RECORD_WIDTH: usize = 2 * FIELD_WIDTH + OFFSET_WIDTH;

/// Location of one package stanza.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub name: String,
    pub component: String,
    /// Byte offset of the stanza's `Package:` line in the component file
    pub offset: i64,
}

impl IndexRecord {
    /// Create a record, rejecting keys that do not fit their field
    pub fn new(
        name: impl Into<String>,
        component: impl Into<String>,
        offset: i64,
    ) -> DebarResult<Self> {
        let record = Self {
            name: name.into(),
            component: component.into(),
            offset,
        };
        record.check_keys()?;
        Ok(record)
    }

    fn check_keys(&self) -> DebarResult<()> {
        check_key("package name", &self.name)?;
        check_key("component", &self.component)
    }

    /// Encode into the on-disk layout
    pub fn encode(&self) -> DebarResult<[u8; RECORD_WIDTH]> {
        self.check_keys()?;

        let mut buf = [0u8; RECORD_WIDTH];
        buf[..self.name.len()].copy_from_slice(self.name.as_bytes());
        buf[FIELD_WIDTH..FIELD_WIDTH + self.component.len()]
            .copy_from_slice(self.component.as_bytes());
        buf[2 * FIELD_WIDTH..].copy_from_slice(&self.offset.to_le_bytes());
        Ok(buf)
    }

    /// Decode a record read from disk
    ///
    /// Returns a description of the problem when a field is not valid UTF-8.
    pub fn decode(buf: &[u8; RECORD_WIDTH]) -> Result<Self, String> {
        let name = decode_field(&buf[..FIELD_WIDTH]).map_err(|e| format!("name field: {}", e))?;
        let component = decode_field(&buf[FIELD_WIDTH..2 * FIELD_WIDTH])
            .map_err(|e| format!("component field: {}", e))?;

        let mut offset = [0u8; OFFSET_WIDTH];
        offset.copy_from_slice(&buf[2 * FIELD_WIDTH..]);

        Ok(Self {
            name,
            component,
            offset: i64::from_le_bytes(offset),
        })
    }
}

fn check_key(field: &'static str, value: &str) -> DebarResult<()> {
    if value.len() > MAX_KEY_LEN {
        return Err(DebarError::OversizedKey {
            field,
            value: value.to_string(),
            len: value.len(),
            max: MAX_KEY_LEN,
        });
    }
    Ok(())
}

fn decode_field(field: &[u8]) -> Result<String, std::str::Utf8Error> {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    std::str::from_utf8(&field[..end]).map(str::to_string)
}

/// Compare the name field of a raw record without decoding it
pub fn name_matches(buf: &[u8; RECORD_WIDTH], name: &str) -> bool {
    let name = name.as_bytes();
    name.len() <= MAX_KEY_LEN && &buf[..name.len()] == name && buf[name.len()] == 0
}
