//! Whole-collection persistence for timetable data.
//!
//! Each entity kind lives under a fixed namespace as one JSON document. Loads
//! of a missing namespace yield an empty collection; saves replace the whole
//! document. There are no partial updates and no transactions.
//!
//! The scheduler never touches storage; callers load its inputs here and
//! save its outputs back.

use crate::data::{Classroom, ConflictInfo, Faculty, ScheduleEntry, Subject};
use crate::error::{StorageError, StorageResult};
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// The persisted entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Faculty,
    Subjects,
    Classrooms,
    Schedule,
    Conflicts,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Faculty,
        Collection::Subjects,
        Collection::Classrooms,
        Collection::Schedule,
        Collection::Conflicts,
    ];

    pub fn namespace(&self) -> &'static str {
        match self {
            Collection::Faculty => "timetable-faculty",
            Collection::Subjects => "timetable-subjects",
            Collection::Classrooms => "timetable-classrooms",
            Collection::Schedule => "timetable-schedule",
            Collection::Conflicts => "timetable-conflicts",
        }
    }
}

/// Raw key-value backend holding one JSON document per namespace.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, namespace: &str) -> StorageResult<Option<String>>;
    fn put(&self, namespace: &str, value: String) -> StorageResult<()>;
    /// Removing a missing namespace is not an error.
    fn remove(&self, namespace: &str) -> StorageResult<()>;
}

/// In-process store, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, namespace: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(namespace).cloned())
    }

    fn put(&self, namespace: &str, value: String) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.insert(namespace.to_string(), value);
        Ok(())
    }

    fn remove(&self, namespace: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.remove(namespace);
        Ok(())
    }
}

/// One `<namespace>.json` file per namespace inside a directory.
///
/// Writes land in a sibling temp file first and are renamed into place, so a
/// reader never sees a half-written document.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            namespace: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, namespace: &str) -> PathBuf {
        self.dir.join(format!("{}.json", namespace))
    }
}

fn io_error(namespace: &str) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        namespace: namespace.to_string(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, namespace: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(namespace)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(namespace)(e)),
        }
    }

    fn put(&self, namespace: &str, value: String) -> StorageResult<()> {
        let path = self.path_for(namespace);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(io_error(namespace))?;
        fs::rename(&tmp, &path).map_err(io_error(namespace))
    }

    fn remove(&self, namespace: &str) -> StorageResult<()> {
        match fs::remove_file(self.path_for(namespace)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(namespace)(e)),
        }
    }
}

/// Typed, per-collection access on top of a [`KeyValueStore`].
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn KeyValueStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn load_faculty(&self) -> StorageResult<Vec<Faculty>> {
        self.load(Collection::Faculty)
    }

    pub fn save_faculty(&self, faculty: &[Faculty]) -> StorageResult<()> {
        self.save_all(Collection::Faculty, faculty)
    }

    pub fn load_subjects(&self) -> StorageResult<Vec<Subject>> {
        self.load(Collection::Subjects)
    }

    pub fn save_subjects(&self, subjects: &[Subject]) -> StorageResult<()> {
        self.save_all(Collection::Subjects, subjects)
    }

    pub fn load_classrooms(&self) -> StorageResult<Vec<Classroom>> {
        self.load(Collection::Classrooms)
    }

    pub fn save_classrooms(&self, classrooms: &[Classroom]) -> StorageResult<()> {
        self.save_all(Collection::Classrooms, classrooms)
    }

    pub fn load_schedule(&self) -> StorageResult<Vec<ScheduleEntry>> {
        self.load(Collection::Schedule)
    }

    pub fn save_schedule(&self, schedule: &[ScheduleEntry]) -> StorageResult<()> {
        self.save_all(Collection::Schedule, schedule)
    }

    pub fn load_conflicts(&self) -> StorageResult<Vec<ConflictInfo>> {
        self.load(Collection::Conflicts)
    }

    pub fn save_conflicts(&self, conflicts: &[ConflictInfo]) -> StorageResult<()> {
        self.save_all(Collection::Conflicts, conflicts)
    }

    /// Loads a whole collection; a missing namespace is an empty collection.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> StorageResult<Vec<T>> {
        let namespace = collection.namespace();
        match self.store.get(namespace)? {
            Some(json) => serde_json::from_str(&json).map_err(|source| StorageError::Json {
                namespace: namespace.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Replaces a whole collection.
    pub fn save_all<T: Serialize>(&self, collection: Collection, items: &[T]) -> StorageResult<()> {
        let namespace = collection.namespace();
        let json = serde_json::to_string(items).map_err(|source| StorageError::Json {
            namespace: namespace.to_string(),
            source,
        })?;
        debug!("Saving {} items to {}", items.len(), namespace);
        self.store.put(namespace, json)
    }

    pub fn clear(&self, collection: Collection) -> StorageResult<()> {
        self.store.remove(collection.namespace())
    }

    /// Removes every namespace.
    pub fn clear_all(&self) -> StorageResult<()> {
        for collection in Collection::ALL {
            self.clear(collection)?;
        }
        Ok(())
    }
}
