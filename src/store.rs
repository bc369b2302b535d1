//! Store — the authoritative in-memory ordered collection for one record type.

use std::sync::{Arc, RwLock};

use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::StoreError;
use crate::mirror::FileMirror;
use crate::record::Record;

/// In-memory ordered collection of validated records.
///
/// The store owns its records: callers get clones, never aliases into
/// storage, so nothing mutates stored data outside `insert`. Iteration
/// order is insertion order, and no delete operation exists, so positional
/// indexes are stable for the life of the process.
///
/// Clone-friendly via `Arc` — all clones share one collection. The write
/// lock covers append plus mirror rewrite, so concurrent handlers never
/// observe a torn collection or interleaved file writes.
#[derive(Clone, Debug)]
pub struct Store<R: Record> {
    records: Arc<RwLock<Vec<R>>>,
    mirror: Option<Arc<FileMirror>>,
}

impl<R: Record> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Store<R> {
    /// Create an empty, memory-only store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            mirror: None,
        }
    }

    /// Create a store mirrored to a file, seeded from its current contents.
    ///
    /// An absent file starts the store empty. A present but unparseable
    /// file fails with `Mirror(Corrupt)` — callers in the startup path
    /// treat that as fatal.
    pub fn with_mirror(mirror: FileMirror) -> Result<Self, StoreError> {
        let records = mirror.load::<R>()?;
        info!(
            entity = R::ENTITY,
            count = records.len(),
            path = %mirror.path().display(),
            "loaded mirrored records"
        );
        Ok(Self {
            records: Arc::new(RwLock::new(records)),
            mirror: Some(Arc::new(mirror)),
        })
    }

    /// Append a validated record, assigning a fresh identifier.
    ///
    /// Any caller-supplied identifier is overwritten. Returns the stored
    /// record including its assigned identifier. If a mirror is configured
    /// the full collection is rewritten before the lock is released; a
    /// failed rewrite rolls the append back so memory never runs ahead of
    /// the file.
    pub fn insert(&self, mut record: R) -> Result<R, StoreError> {
        record.assign_id(fresh_id());

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;
        records.push(record.clone());

        if let Some(mirror) = &self.mirror {
            if let Err(e) = mirror.save(&records) {
                records.pop();
                return Err(e.into());
            }
        }

        debug!(entity = R::ENTITY, len = records.len(), "record inserted");
        Ok(record)
    }

    /// The full collection in insertion order, as an owned snapshot.
    pub fn list(&self) -> Result<Vec<R>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;
        Ok(records.clone())
    }

    /// The record at 0-based position `index` in insertion order.
    ///
    /// Takes `i64` so a negative supplied index is reported verbatim in
    /// the `OutOfRange` error alongside the current length.
    pub fn get_by_index(&self, index: i64) -> Result<R, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("get_by_index"))?;
        usize::try_from(index)
            .ok()
            .and_then(|i| records.get(i))
            .cloned()
            .ok_or(StoreError::OutOfRange {
                index,
                len: records.len(),
            })
    }

    /// Linear scan for the record whose identifier equals `id`.
    pub fn get_by_id(&self, id: &str) -> Result<R, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("get_by_id"))?;
        records
            .iter()
            .find(|r| r.id() == Some(id))
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// One record chosen uniformly at random.
    ///
    /// Fails with `EmptyStore` on an empty collection rather than
    /// returning an empty sentinel.
    pub fn get_random(&self) -> Result<R, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("get_random"))?;
        if records.is_empty() {
            return Err(StoreError::EmptyStore);
        }
        let i = rand::thread_rng().gen_range(0..records.len());
        Ok(records[i].clone())
    }

    /// Number of records currently held.
    pub fn len(&self) -> Result<usize, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(records.len())
    }

    /// True when the collection holds no records.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

/// Fresh 128-bit random token, 32 hex chars. Never derived from content,
/// never reused.
fn fresh_id() -> String {
    Uuid::new_v4().simple().to_string()
}
