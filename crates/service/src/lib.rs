//! Service layer providing generic CRUD operations on top of models.
//! - `crud::CrudService` forwards every call to an injected `CrudDataService`.
//! - Bundled data services keep entities in memory or in a JSON file.
//! - Errors are reported through `errors::ServiceError` and passed through unchanged.

pub mod errors;
pub mod crud;
pub mod storage;
pub mod runtime;
#[cfg(test)]
pub mod test_support;

pub use crud::{CrudDataService, CrudService};
pub use errors::ServiceError;
