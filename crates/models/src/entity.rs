//! Entity abstraction shared by every persisted domain object.
//!
//! The CRUD service itself never looks inside an entity; these traits exist for
//! the data-access side, which needs to read and assign identifiers.

use std::fmt::{Debug, Display};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::ModelError;

/// A persisted domain object addressed by a unique identifier.
///
/// `id()` is `None` until the entity has been stored for the first time.
pub trait Entity: Clone + Debug {
    type Id: GeneratedId;

    /// Human readable type name used in errors and logs, e.g. `"Review"`.
    const NAME: &'static str;

    fn id(&self) -> Option<Self::Id>;

    /// Return a copy carrying the given identifier.
    fn with_id(self, id: Self::Id) -> Self;

    /// Domain validation run by data services before a write.
    fn validate(&self) -> Result<(), ModelError> { Ok(()) }

    /// Stamp bookkeeping fields on write.
    fn touch(&mut self, _now: DateTime<Utc>) {}
}

/// Identifier types that a store can mint on insert.
pub trait GeneratedId: Clone + Ord + Debug + Display {
    /// Next identifier given the greatest one currently in use.
    /// Fails when the id space above `max` is used up.
    fn next_after(max: Option<&Self>) -> Result<Self, ModelError>;
}

macro_rules! sequential_id {
    ($($t:ty),*) => {$(
        impl GeneratedId for $t {
            fn next_after(max: Option<&Self>) -> Result<Self, ModelError> {
                match max {
                    None => Ok(1),
                    Some(m) => m.checked_add(1).ok_or(ModelError::IdExhausted(stringify!($t))),
                }
            }
        }
    )*};
}

sequential_id!(i64, u64);

impl GeneratedId for Uuid {
    fn next_after(_max: Option<&Self>) -> Result<Self, ModelError> { Ok(Uuid::new_v4()) }
}
