//! Bundled `CrudDataService` implementations.
//!
//! Both stores share the same write rules: an entity without an id is inserted
//! under a freshly generated one, an entity with an id replaces the stored
//! entity and fails with `NotFound` when there is none.

use std::collections::BTreeMap;

use chrono::Utc;
use models::Entity;
use tracing::debug;

use crate::errors::ServiceError;

pub mod json_file;
pub mod memory;

/// Apply insert-or-update rules to `map` and return the stored entity.
pub(crate) fn upsert_into<E: Entity>(map: &mut BTreeMap<E::Id, E>, entity: E) -> Result<E, ServiceError> {
    entity.validate()?;
    let (id, mut stored) = match entity.id() {
        Some(id) => {
            if !map.contains_key(&id) {
                return Err(ServiceError::not_found(E::NAME, &id));
            }
            debug!(entity = E::NAME, %id, "updating");
            (id, entity)
        }
        None => {
            let id = <E::Id as models::GeneratedId>::next_after(map.keys().next_back())?;
            debug!(entity = E::NAME, %id, "creating");
            (id.clone(), entity.with_id(id))
        }
    };
    stored.touch(Utc::now());
    map.insert(id, stored.clone());
    Ok(stored)
}

pub(crate) fn remove_from<E: Entity>(map: &mut BTreeMap<E::Id, E>, id: &E::Id) -> Result<(), ServiceError> {
    map.remove(id).map(|_| ()).ok_or_else(|| ServiceError::not_found(E::NAME, id))
}

pub(crate) fn find_in<E: Entity>(map: &BTreeMap<E::Id, E>, id: &E::Id) -> Result<E, ServiceError> {
    map.get(id).cloned().ok_or_else(|| ServiceError::not_found(E::NAME, id))
}
