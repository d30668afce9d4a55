use std::path::{Path, PathBuf};

use models::Entity;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::{find_in, remove_from, upsert_into};
use crate::crud::data_service::CrudDataService;
use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

/// Data service persisting one entity type as a JSON object keyed by id.
pub struct JsonFileDataService<E: Entity> {
    store: JsonMapStore<E::Id, E>,
}

impl<E> JsonFileDataService<E>
where
    E: Entity + Serialize + DeserializeOwned,
    E::Id: Serialize + DeserializeOwned,
{
    /// Open or create the backing file.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let store = JsonMapStore::open(path)?;
        Ok(Self { store })
    }

    pub fn path(&self) -> &Path { self.store.path() }
}

impl<E> CrudDataService<E, E::Id> for JsonFileDataService<E>
where
    E: Entity + Serialize + DeserializeOwned,
    E::Id: Serialize + DeserializeOwned,
{
    fn clear(&self) -> Result<(), ServiceError> {
        self.store.update_map(|map| {
            debug!(entity = E::NAME, removed = map.len(), "clearing json store");
            map.clear();
            Ok(())
        })
    }

    fn get_all(&self) -> Result<Vec<E>, ServiceError> { self.store.values() }

    fn get_by_id(&self, id: &E::Id) -> Result<E, ServiceError> {
        self.store.with_map(|map| find_in::<E>(map, id))?
    }

    fn upsert(&self, entity: E) -> Result<E, ServiceError> {
        self.store.update_map(|map| upsert_into::<E>(map, entity))
    }

    fn delete(&self, id: &E::Id) -> Result<(), ServiceError> {
        self.store.update_map(|map| remove_from::<E>(map, id))
    }
}
