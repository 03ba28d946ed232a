//! Durable key-value slots.

use std::{
    fs, io,
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::StorageError;

/// A set of named slots, each holding one serialized blob.
///
/// Implementations decide where the bytes live. Writes replace the whole slot.
pub trait Storage {
    /// Read a slot. A slot that was never written is `Ok(None)`.
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Replace the contents of a slot.
    fn write(&self, slot: &str, contents: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, contents: &str) -> Result<(), StorageError> {
        (**self).write(slot, contents)
    }
}

impl<S: Storage + ?Sized> Storage for Rc<S> {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, contents: &str) -> Result<(), StorageError> {
        (**self).write(slot, contents)
    }
}

/// Stores each slot as `<slot>.json` inside a directory.
///
/// Writes go to a temporary file that is then renamed over the slot, so a
/// crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` for all slots. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the directory holding the slots.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `slot`.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }

    fn io_error(slot: &str, source: io::Error) -> StorageError {
        StorageError::Io {
            slot: slot.to_string(),
            source,
        }
    }
}

impl Storage for FileStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::io_error(slot, err)),
        }
    }

    fn write(&self, slot: &str, contents: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|err| Self::io_error(slot, err))?;

        let tmp = self.dir.join(format!(".{slot}.json.tmp"));
        fs::write(&tmp, contents).map_err(|err| Self::io_error(slot, err))?;
        fs::rename(&tmp, self.slot_path(slot)).map_err(|err| Self::io_error(slot, err))?;

        tracing::trace!(slot, bytes = contents.len(), "wrote slot");
        Ok(())
    }
}
