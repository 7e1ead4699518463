use crate::core::{DebarError, DebarResult};
use crate::di::Decompressor;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Decompresses `Packages.gz` files with flate2
#[derive(Debug, Clone, Copy, Default)]
pub struct GzDecompressor;

impl Decompressor for GzDecompressor {
    fn decompress(&self, path: &Path) -> DebarResult<PathBuf> {
        let failed = |reason: &dyn std::fmt::Display| {
            DebarError::transfer(path.display().to_string(), reason.to_string())
        };

        if path.extension().and_then(|e| e.to_str()) != Some("gz") {
            return Err(failed(&"not a .gz file"));
        }
        let output = path.with_extension("");

        let file = File::open(path).map_err(|e| failed(&e))?;
        // Mirrors may ship Packages.gz as several concatenated members
        let mut decoder = MultiGzDecoder::new(BufReader::new(file));
        let mut writer = BufWriter::new(File::create(&output).map_err(|e| failed(&e))?);

        io::copy(&mut decoder, &mut writer).map_err(|e| failed(&e))?;
        writer.flush().map_err(|e| failed(&e))?;

        Ok(output)
    }
}
