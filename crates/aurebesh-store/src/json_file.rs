//! Pretty-printed JSON files with atomic replacement.

use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write as _},
    path::Path,
};

use log::debug;
use serde::{Serialize, de::DeserializeOwned};
use tempfile::NamedTempFile;

use crate::StoreError;

/// Reads `path`, or returns `T::default()` if it does not exist.
pub(crate) fn load_or_default<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} not found, using defaults", path.display());
            return Ok(T::default());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_owned(),
                source,
            });
        }
    };
    let value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        StoreError::Parse {
            path: path.to_owned(),
            source,
        }
    })?;
    debug!("loaded {}", path.display());
    Ok(value)
}

/// Writes `value` to a temporary file next to `path`, then moves it over
/// `path`.
pub(crate) fn save<T>(path: &Path, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
{
    let write_error = |source| StoreError::Write {
        path: path.to_owned(),
        source,
    };

    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(write_error)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(write_error)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, value).map_err(|source| {
            StoreError::Serialize {
                path: path.to_owned(),
                source,
            }
        })?;
        writer.write_all(b"\n").map_err(write_error)?;
        writer.flush().map_err(write_error)?;
    }
    temp.persist(path).map_err(|e| write_error(e.error))?;
    debug!("saved {}", path.display());
    Ok(())
}
