//! FileMirror — whole-file JSON persistence for a record store.
//!
//! The mirror keeps one flat file as a full copy of a store's collection:
//! every save serializes the entire collection and overwrites the file, and
//! load reads it back in one piece. No locking, no atomic rename — the
//! store's write lock is the only serialization, which holds for the
//! single-process deployments this targets.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Error type for mirror load/save operations.
#[derive(Debug)]
pub enum MirrorError {
    /// The mirror file exists but cannot be parsed. Fatal at startup.
    Corrupt { path: PathBuf, detail: String },
    /// Reading or writing the mirror file failed.
    Io { path: PathBuf, source: io::Error },
    /// A record failed to serialize.
    Serde(String),
}

impl fmt::Display for MirrorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MirrorError::Corrupt { path, detail } => {
                write!(f, "corrupt mirror file {}: {}", path.display(), detail)
            }
            MirrorError::Io { path, source } => {
                write!(f, "mirror io error on {}: {}", path.display(), source)
            }
            MirrorError::Serde(msg) => write!(f, "mirror serialization failed: {}", msg),
        }
    }
}

impl Error for MirrorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MirrorError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A single flat file mirroring one store's full collection.
#[derive(Debug)]
pub struct FileMirror {
    path: PathBuf,
}

impl FileMirror {
    /// Create a mirror targeting `path`. Nothing is read or written until
    /// `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deserialize the file's entire contents as the collection state.
    ///
    /// An absent file means an empty collection. A present but unparseable
    /// file is `Corrupt` — callers in the startup path treat that as fatal
    /// rather than discarding data.
    pub fn load<R: DeserializeOwned>(&self) -> Result<Vec<R>, MirrorError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| MirrorError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| MirrorError::Corrupt {
            path: self.path.clone(),
            detail: e.to_string(),
        })
    }

    /// Serialize the entire collection and overwrite the file.
    ///
    /// O(collection size) per call — the whole-file rewrite is a documented
    /// simplification, not an accident.
    pub fn save<R: Serialize>(&self, records: &[R]) -> Result<(), MirrorError> {
        let contents =
            serde_json::to_string(records).map_err(|e| MirrorError::Serde(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| MirrorError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        debug!(path = %self.path.display(), count = records.len(), "mirror rewritten");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: String,
        value: i32,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: "a".into(),
                value: 1,
            },
            Row {
                id: "b".into(),
                value: 2,
            },
        ]
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = FileMirror::new(dir.path().join("rows.json"));
        let loaded: Vec<Row> = mirror.load().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = FileMirror::new(dir.path().join("rows.json"));

        mirror.save(&rows()).unwrap();
        let loaded: Vec<Row> = mirror.load().unwrap();
        assert_eq!(loaded, rows());
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = FileMirror::new(dir.path().join("rows.json"));

        mirror.save(&rows()).unwrap();
        let shorter = vec![Row {
            id: "c".into(),
            value: 3,
        }];
        mirror.save(&shorter).unwrap();

        let loaded: Vec<Row> = mirror.load().unwrap();
        assert_eq!(loaded, shorter);
    }

    #[test]
    fn load_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        std::fs::write(&path, "not json at all").unwrap();

        let mirror = FileMirror::new(&path);
        let err = mirror.load::<Row>().unwrap_err();
        assert!(matches!(err, MirrorError::Corrupt { .. }));
    }

    #[test]
    fn file_layout_is_a_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        let mirror = FileMirror::new(&path);

        mirror.save(&rows()).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_array());
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }
}
