use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use models::Entity;
use tracing::debug;

use super::{find_in, remove_from, upsert_into};
use crate::crud::data_service::CrudDataService;
use crate::errors::ServiceError;

/// Process-local data service keeping entities ordered by id.
pub struct InMemoryDataService<E: Entity> {
    items: RwLock<BTreeMap<E::Id, E>>,
}

impl<E: Entity> Default for InMemoryDataService<E> {
    fn default() -> Self { Self { items: RwLock::new(BTreeMap::new()) } }
}

impl<E: Entity> InMemoryDataService<E> {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> Result<usize, ServiceError> { Ok(self.read()?.len()) }

    pub fn is_empty(&self) -> Result<bool, ServiceError> { Ok(self.read()?.is_empty()) }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<E::Id, E>>, ServiceError> {
        self.items.read().map_err(|_| ServiceError::storage("in-memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<E::Id, E>>, ServiceError> {
        self.items.write().map_err(|_| ServiceError::storage("in-memory store lock poisoned"))
    }
}

impl<E: Entity> CrudDataService<E, E::Id> for InMemoryDataService<E> {
    fn clear(&self) -> Result<(), ServiceError> {
        let mut items = self.write()?;
        debug!(entity = E::NAME, removed = items.len(), "clearing in-memory store");
        items.clear();
        Ok(())
    }

    fn get_all(&self) -> Result<Vec<E>, ServiceError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn get_by_id(&self, id: &E::Id) -> Result<E, ServiceError> {
        find_in::<E>(&*self.read()?, id)
    }

    fn upsert(&self, entity: E) -> Result<E, ServiceError> {
        upsert_into::<E>(&mut *self.write()?, entity)
    }

    fn delete(&self, id: &E::Id) -> Result<(), ServiceError> {
        remove_from::<E>(&mut *self.write()?, id)
    }
}
