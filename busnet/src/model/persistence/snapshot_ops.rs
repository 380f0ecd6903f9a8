use super::{PersistenceError, Snapshot};
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// writes `snapshot` as gzip-compressed JSON.
pub fn write_snapshot<W: Write>(writer: W, snapshot: &Snapshot) -> Result<(), PersistenceError> {
    let mut encoder = GzEncoder::new(writer, Compression::default());
    serde_json::to_writer(&mut encoder, snapshot)?;
    encoder.finish()?.flush()?;
    Ok(())
}

pub fn read_snapshot<R: Read>(reader: R) -> Result<Snapshot, PersistenceError> {
    let decoder = GzDecoder::new(reader);
    let snapshot = serde_json::from_reader(BufReader::new(decoder))?;
    Ok(snapshot)
}

/// saves a snapshot to `path`, refusing to replace an existing file unless
/// `overwrite` is set.
pub fn save_to_file<P: AsRef<Path>>(
    path: P,
    snapshot: &Snapshot,
    overwrite: bool,
) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    if path.exists() && !overwrite {
        return Err(PersistenceError::FileExists(path.display().to_string()));
    }
    let file = File::create(path)?;
    write_snapshot(BufWriter::new(file), snapshot)?;
    log::info!("wrote snapshot to {}", path.display());
    Ok(())
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Snapshot, PersistenceError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let snapshot = read_snapshot(file)?;
    log::info!("read snapshot from {}", path.display());
    Ok(snapshot)
}
