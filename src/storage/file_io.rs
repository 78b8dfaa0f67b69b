//! JSON store files
//!
//! Reads tolerate a missing file. Writes go through a sibling `.json.tmp`
//! file that is synced and renamed over the target, so a store file is either
//! the old version or the new one.

use std::fmt::Display;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::FinsightError;

fn storage_error(action: &str, path: &Path, err: impl Display) -> FinsightError {
    FinsightError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read a store file, or `T::default()` when it does not exist yet
pub fn read_json<T, P>(path: P) -> Result<T, FinsightError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "store file missing, starting empty");
            return Ok(T::default());
        }
        Err(e) => return Err(storage_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

fn write_and_replace<T: Serialize>(tmp: &Path, path: &Path, data: &T) -> Result<(), FinsightError> {
    let mut out =
        BufWriter::new(fs::File::create(tmp).map_err(|e| storage_error("create", tmp, e))?);
    serde_json::to_writer_pretty(&mut out, data).map_err(|e| storage_error("serialize", path, e))?;
    out.flush().map_err(|e| storage_error("flush", tmp, e))?;
    out.get_ref()
        .sync_all()
        .map_err(|e| storage_error("sync", tmp, e))?;
    fs::rename(tmp, path).map_err(|e| storage_error("replace", path, e))
}

/// Replace a store file with the pretty-printed JSON of `data`
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FinsightError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create directory", dir, e))?;
    }

    // Must share the target's directory for rename to be atomic
    let tmp = path.with_extension("json.tmp");

    let result = write_and_replace(&tmp, path, data);
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result?;

    debug!(path = %path.display(), "store file written");
    Ok(())
}
