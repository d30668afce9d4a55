#![cfg(test)]
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use models::Review;

use crate::crud::data_service::CrudDataService;
use crate::errors::ServiceError;

/// One recorded invocation on [`RecordingDataService`].
#[derive(Clone, Debug, PartialEq)]
pub enum Call<E, ID> {
    Clear,
    GetAll,
    GetById(ID),
    Upsert(E),
    Delete(ID),
}

/// Hand-written test double: records every call with its arguments and answers
/// from stubs. Unstubbed calls behave like an empty store that echoes upserts.
pub struct RecordingDataService<E, ID> {
    entity: &'static str,
    calls: Mutex<Vec<Call<E, ID>>>,
    get_all: Mutex<Option<Result<Vec<E>, ServiceError>>>,
    get_by_id: Mutex<HashMap<ID, Result<E, ServiceError>>>,
    upsert: Mutex<Option<Result<E, ServiceError>>>,
    delete: Mutex<HashMap<ID, Result<(), ServiceError>>>,
}

impl<E, ID> RecordingDataService<E, ID>
where
    E: Clone,
    ID: Clone + Eq + Hash + Display,
{
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            calls: Mutex::new(Vec::new()),
            get_all: Mutex::new(None),
            get_by_id: Mutex::new(HashMap::new()),
            upsert: Mutex::new(None),
            delete: Mutex::new(HashMap::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call<E, ID>> { self.calls.lock().unwrap().clone() }

    pub fn stub_get_all(&self, result: Result<Vec<E>, ServiceError>) {
        *self.get_all.lock().unwrap() = Some(result);
    }

    pub fn stub_get_by_id(&self, id: ID, result: Result<E, ServiceError>) {
        self.get_by_id.lock().unwrap().insert(id, result);
    }

    pub fn stub_upsert(&self, result: Result<E, ServiceError>) {
        *self.upsert.lock().unwrap() = Some(result);
    }

    pub fn stub_delete(&self, id: ID, result: Result<(), ServiceError>) {
        self.delete.lock().unwrap().insert(id, result);
    }

    fn record(&self, call: Call<E, ID>) { self.calls.lock().unwrap().push(call); }
}

impl<E, ID> CrudDataService<E, ID> for RecordingDataService<E, ID>
where
    E: Clone,
    ID: Clone + Eq + Hash + Display,
{
    fn clear(&self) -> Result<(), ServiceError> {
        self.record(Call::Clear);
        Ok(())
    }

    fn get_all(&self) -> Result<Vec<E>, ServiceError> {
        self.record(Call::GetAll);
        self.get_all.lock().unwrap().clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    fn get_by_id(&self, id: &ID) -> Result<E, ServiceError> {
        self.record(Call::GetById(id.clone()));
        self.get_by_id
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or_else(|| Err(ServiceError::not_found(self.entity, id)))
    }

    fn upsert(&self, entity: E) -> Result<E, ServiceError> {
        self.record(Call::Upsert(entity.clone()));
        self.upsert.lock().unwrap().clone().unwrap_or(Ok(entity))
    }

    fn delete(&self, id: &ID) -> Result<(), ServiceError> {
        self.record(Call::Delete(id.clone()));
        self.delete.lock().unwrap().get(id).cloned().unwrap_or(Ok(()))
    }
}

/// Persisted reviews with stable ids and timestamps.
pub fn review_fixtures() -> Vec<Review> {
    let at = Utc.with_ymd_and_hms(2025, 6, 3, 12, 0, 0).unwrap();
    let texts = ["Great espresso, friendly staff.", "Too crowded at lunch.", "Best oat latte on campus."];
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let n = i as i64 + 1;
            Review {
                id: Some(n),
                pos_id: n,
                author_id: 10 + n,
                review: (*text).to_string(),
                approval_count: i as u32,
                approved: false,
                created_at: Some(at),
                updated_at: Some(at),
            }
        })
        .collect()
}
