use std::{
    any::type_name,
    io::{self, Write},
    path::Path,
};

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};

/// Reads and parses a whole file, naming the file and the target type on failure.
fn read_parsed<T, E>(path: &Path, parse: impl FnOnce(&str) -> Result<T, E>) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let text = fs_err::read_to_string(path)?;
    parse(&text)
        .with_context(|| format!("While trying to parse {path:?} as {}", type_name::<T>()))
}

pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    read_parsed(path.as_ref(), |text| serde_json::from_str(text))
}

/// A missing file yields `T::default()`; any other problem is an error.
pub fn read_toml_or_default<T>(path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: Default + DeserializeOwned,
{
    let path = path.as_ref();
    match read_parsed(path, |text| toml::from_str(text)) {
        Err(e) if is_not_found(&e) => Ok(T::default()),
        result => result,
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

/// Writes `contents` next to `path` under a temporary name and renames it into place,
/// so that `path` either does not exist or holds the complete contents.
pub fn write_atomically(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("While creating a temporary file in {dir:?}"))?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path)
        .with_context(|| format!("While moving the temporary file to {path:?}"))?;
    Ok(())
}

pub fn write_json_atomically<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    write_atomically(path, &serde_json::to_vec_pretty(value)?)
}
