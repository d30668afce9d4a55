use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::errors::ServiceError;

/// Generic JSON file-backed key-value map store.
///
/// Persists a `BTreeMap<K, V>` to a JSON file after every mutation. Readers and
/// writers are serialized through an `RwLock`; the file is rewritten while the
/// write lock is held so the on-disk copy never lags a committed mutation.
pub struct JsonMapStore<K, V> {
    inner: RwLock<BTreeMap<K, V>>,
    file_path: PathBuf,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Ord + Clone + Serialize + DeserializeOwned,
    V: Clone + Serialize + DeserializeOwned,
{
    /// Open the store at `path`. Creates parent directories and an empty file if missing.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(ServiceError::storage)?;
        }

        let map: BTreeMap<K, V> = if file_path.exists() {
            let bytes = fs::read(&file_path).map_err(ServiceError::storage)?;
            if bytes.is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_slice(&bytes).map_err(|e| {
                    ServiceError::Storage(format!("corrupt store file {}: {e}", file_path.display()))
                })?
            }
        } else {
            let empty = BTreeMap::new();
            write_json(&file_path, &empty)?;
            empty
        };
        debug!(path = %file_path.display(), entries = map.len(), "json_map_store_opened");

        Ok(Self { inner: RwLock::new(map), file_path })
    }

    pub fn path(&self) -> &Path { &self.file_path }

    /// List all values in key order.
    pub fn values(&self) -> Result<Vec<V>, ServiceError> {
        Ok(self.read()?.values().cloned().collect())
    }

    /// Read-only access to the map.
    pub fn with_map<T>(&self, f: impl FnOnce(&BTreeMap<K, V>) -> T) -> Result<T, ServiceError> {
        let map = self.read()?;
        Ok(f(&*map))
    }

    /// Apply a mutation and persist. The mutation runs on a copy that only
    /// replaces the live map once the file write succeeded, so a failure in
    /// either `f` or the write leaves memory and disk unchanged.
    pub fn update_map<T, F>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut BTreeMap<K, V>) -> Result<T, ServiceError>,
    {
        let mut map = self.inner.write().map_err(|_| ServiceError::storage("json store lock poisoned"))?;
        let mut next = map.clone();
        let out = f(&mut next)?;
        write_json(&self.file_path, &next)?;
        *map = next;
        Ok(out)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<K, V>>, ServiceError> {
        self.inner.read().map_err(|_| ServiceError::storage("json store lock poisoned"))
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ServiceError> {
    let data = serde_json::to_vec_pretty(value).map_err(ServiceError::storage)?;
    fs::write(path, data).map_err(ServiceError::storage)
}
