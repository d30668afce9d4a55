//! Generic CRUD module: collaborator contract, service, and bundled collaborators.
//!
//! `CrudService` owns no state besides a shared handle to its `CrudDataService`;
//! every operation is a single pass-through call.

pub mod data_service;
pub mod service;
pub mod repo;

pub use data_service::CrudDataService;
pub use service::CrudService;
