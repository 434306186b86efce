// crates/provincedb-core/src/loader/standard.rs
use super::common_io;
use crate::error::Result;
use crate::model::load::snapshot_options;
use crate::model::ProvinceDb;
use bincode::Options;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl Default for CompressionMode {
    /// Gzip when the `compact` feature is on.
    fn default() -> Self {
        if cfg!(feature = "compact") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

impl ProvinceDb {
    /// Loads a bincode snapshot (plain or gzipped) written by [`ProvinceDb::save_as`].
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut stream = common_io::open_stream(path)?;

        let mut data = Vec::new();
        stream.read_to_end(&mut data)?;

        let db = Self::from_bincode_bytes(&data)?;
        log::info!(
            "Loaded province snapshot {} ({} records)",
            path.display(),
            db.len()
        );
        Ok(db)
    }

    /// Writes a snapshot with the default [`CompressionMode`].
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with(path, CompressionMode::default())
    }

    pub fn save_with(&self, path: impl AsRef<Path>, compression: CompressionMode) -> Result<()> {
        write_generic(path.as_ref(), self, compression)
    }
}

/// Writes any serializable value as a bincode snapshot.
fn write_generic<T: Serialize>(path: &Path, value: &T, compression: CompressionMode) -> Result<()> {
    let file = File::create(path)?;
    write_snapshot(BufWriter::new(file), value, compression)?;
    log::debug!("Wrote snapshot {} ({:?})", path.display(), compression);
    Ok(())
}

/// Encodes `value` into `writer` and flushes it. Errors from the final
/// writes (gzip trailer, buffered bytes) are returned, not dropped.
fn write_snapshot<W: Write, T: Serialize>(
    mut writer: W,
    value: &T,
    compression: CompressionMode,
) -> Result<()> {
    match compression {
        CompressionMode::Gzip => write_gzip(writer, value),
        CompressionMode::None => {
            snapshot_options().serialize_into(&mut writer, value)?;
            writer.flush()?;
            Ok(())
        }
    }
}

#[cfg(feature = "compact")]
fn write_gzip<W: Write, T: Serialize>(writer: W, value: &T) -> Result<()> {
    let mut encoder = GzEncoder::new(writer, Compression::default());
    snapshot_options().serialize_into(&mut encoder, value)?;
    let mut inner = encoder.finish()?;
    inner.flush()?;
    Ok(())
}

#[cfg(not(feature = "compact"))]
fn write_gzip<W: Write, T: Serialize>(_writer: W, _value: &T) -> Result<()> {
    Err(crate::error::ProvinceError::InvalidData(
        "Gzip requested but 'compact' disabled".into(),
    ))
}
