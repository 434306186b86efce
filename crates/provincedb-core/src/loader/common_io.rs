// crates/provincedb-core/src/loader/common_io.rs
use crate::error::{ProvinceError, Result};
use crate::model::CACHE_SUFFIX;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Opens a file, buffers it, and transparently unwraps gzip.
///
/// Compression is detected from the magic bytes, not the extension, so
/// `provinces.json`, `provinces.json.gz` and gzipped snapshots all work.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        ProvinceError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let mut reader = BufReader::new(file);
    if reader.fill_buf()?.starts_with(&GZIP_MAGIC) {
        return decompress(reader);
    }
    Ok(Box::new(reader))
}

#[cfg(feature = "compact")]
fn decompress<R: Read + 'static>(reader: R) -> Result<Box<dyn Read>> {
    Ok(Box::new(GzDecoder::new(reader)))
}

#[cfg(not(feature = "compact"))]
fn decompress<R: Read + 'static>(_reader: R) -> Result<Box<dyn Read>> {
    Err(ProvinceError::InvalidData(
        "gzip input requires the 'compact' feature".into(),
    ))
}

/// `data/provinces.json` -> `data/provinces.json.provincedb.bin`
pub fn get_cache_path(source: &Path) -> PathBuf {
    let mut name = source
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(CACHE_SUFFIX);
    source.with_file_name(name)
}

/// Snapshots are recognized by their `.bin` extension.
pub fn is_snapshot(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "bin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_sits_next_to_source() {
        let p = get_cache_path(Path::new("/tmp/data/provinces.json.gz"));
        assert_eq!(p, Path::new("/tmp/data/provinces.json.gz.provincedb.bin"));
        assert!(is_snapshot(&p));
        assert!(!is_snapshot(Path::new("provinces.json")));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.json"))
            .err()
            .expect("open should fail");
        assert!(matches!(err, ProvinceError::NotFound(_)));
    }
}
