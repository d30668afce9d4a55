use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::crud::data_service::CrudDataService;
use crate::errors::ServiceError;

/// Generic CRUD service for entities of type `E` addressed by `ID`.
///
/// Every operation forwards to exactly one call on the bound data service and
/// returns its result or error unchanged. The only failure raised here is
/// [`ServiceError::NullArgument`] from `upsert(None)`, which never reaches the
/// data service.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use models::Review;
/// use service::crud::{CrudService, repo::memory::InMemoryDataService};
///
/// let svc: CrudService<Review, i64, _> = CrudService::new(Arc::new(InMemoryDataService::new()));
/// let saved = svc.upsert(Some(Review::new(1, 2, "Great flat white"))).unwrap();
/// assert_eq!(svc.get_by_id(&saved.id.unwrap()).unwrap(), saved);
/// assert!(svc.upsert(None).is_err());
/// ```
pub struct CrudService<E, ID, D: ?Sized> {
    data_service: Arc<D>,
    entity: &'static str,
    _marker: PhantomData<fn() -> (E, ID)>,
}

impl<E, ID, D> CrudService<E, ID, D>
where
    D: CrudDataService<E, ID> + ?Sized,
    ID: Debug,
{
    pub fn new(data_service: Arc<D>) -> Self {
        Self::with_entity_name(data_service, short_type_name::<E>())
    }

    /// Same as [`new`](Self::new) with an explicit name for log fields.
    pub fn with_entity_name(data_service: Arc<D>, entity: &'static str) -> Self {
        Self { data_service, entity, _marker: PhantomData }
    }

    pub fn data_service(&self) -> &Arc<D> { &self.data_service }

    pub fn entity_name(&self) -> &'static str { self.entity }

    #[instrument(level = "debug", skip(self), fields(entity = self.entity))]
    pub fn clear(&self) -> Result<(), ServiceError> {
        self.data_service.clear()?;
        info!(entity = self.entity, "entities_cleared");
        Ok(())
    }

    #[instrument(level = "debug", skip(self), fields(entity = self.entity))]
    pub fn get_all(&self) -> Result<Vec<E>, ServiceError> {
        let all = self.data_service.get_all()?;
        debug!(entity = self.entity, count = all.len(), "entities_listed");
        Ok(all)
    }

    #[instrument(level = "debug", skip(self), fields(entity = self.entity))]
    pub fn get_by_id(&self, id: &ID) -> Result<E, ServiceError> {
        self.data_service.get_by_id(id).inspect_err(|e| self.log_failure("get_by_id", e))
    }

    /// Insert or update `entity`; `None` fails before the data service is called.
    #[instrument(level = "debug", skip(self, entity), fields(entity = self.entity))]
    pub fn upsert(&self, entity: Option<E>) -> Result<E, ServiceError> {
        let entity = entity.ok_or(ServiceError::NullArgument("entity"))?;
        let saved = self.data_service.upsert(entity).inspect_err(|e| self.log_failure("upsert", e))?;
        info!(entity = self.entity, "entity_upserted");
        Ok(saved)
    }

    #[instrument(level = "debug", skip(self), fields(entity = self.entity))]
    pub fn delete(&self, id: &ID) -> Result<(), ServiceError> {
        self.data_service.delete(id).inspect_err(|e| self.log_failure("delete", e))?;
        info!(entity = self.entity, id = ?id, "entity_deleted");
        Ok(())
    }

    fn log_failure(&self, op: &'static str, err: &ServiceError) {
        match err {
            ServiceError::NotFound { id, .. } => warn!(entity = self.entity, op, %id, "entity_not_found"),
            other => warn!(entity = self.entity, op, error = %other, code = other.code(), "data_service_failed"),
        }
    }
}

impl<E, ID, D: ?Sized> Clone for CrudService<E, ID, D> {
    fn clone(&self) -> Self {
        Self { data_service: Arc::clone(&self.data_service), entity: self.entity, _marker: PhantomData }
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
