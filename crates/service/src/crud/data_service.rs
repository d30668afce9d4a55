use crate::errors::ServiceError;

/// Data-access abstraction consumed by [`CrudService`](super::CrudService).
///
/// Implementations own persistence, identifier validity, and thread safety.
/// `get_by_id` and `delete` report unknown identifiers as
/// [`ServiceError::NotFound`].
pub trait CrudDataService<E, ID> {
    /// Remove every entity of this type.
    fn clear(&self) -> Result<(), ServiceError>;
    fn get_all(&self) -> Result<Vec<E>, ServiceError>;
    fn get_by_id(&self, id: &ID) -> Result<E, ServiceError>;
    /// Insert or update, returning the entity as persisted.
    fn upsert(&self, entity: E) -> Result<E, ServiceError>;
    fn delete(&self, id: &ID) -> Result<(), ServiceError>;
}
