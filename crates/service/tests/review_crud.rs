use std::sync::Arc;
use std::thread;

use models::Review;
use service::crud::repo::{json_file::JsonFileDataService, memory::InMemoryDataService};
use service::{CrudDataService, CrudService, ServiceError};

type MemoryReviews = CrudService<Review, i64, InMemoryDataService<Review>>;

fn memory_service() -> MemoryReviews {
    CrudService::new(Arc::new(InMemoryDataService::new()))
}

fn seed(svc: &MemoryReviews) -> Result<(Review, Review), ServiceError> {
    let r1 = svc.upsert(Some(Review::new(1, 11, "Great espresso, friendly staff.")))?;
    let r2 = svc.upsert(Some(Review::new(2, 12, "Too crowded at lunch.")))?;
    Ok((r1, r2))
}

#[test]
fn get_all_returns_every_stored_review() -> Result<(), anyhow::Error> {
    let svc = memory_service();
    let (r1, r2) = seed(&svc)?;

    assert_eq!(svc.get_all()?, vec![r1, r2]);
    Ok(())
}

#[test]
fn get_all_on_empty_store_is_empty() -> Result<(), anyhow::Error> {
    let svc = memory_service();
    assert!(svc.get_all()?.is_empty());
    Ok(())
}

#[test]
fn missing_ids_surface_not_found() {
    let svc = memory_service();

    assert_eq!(svc.get_by_id(&999), Err(ServiceError::not_found("Review", 999)));
    assert_eq!(svc.delete(&42), Err(ServiceError::not_found("Review", 42)));
}

#[test]
fn upsert_none_leaves_store_untouched() -> Result<(), anyhow::Error> {
    let svc = memory_service();
    seed(&svc)?;

    assert_eq!(svc.upsert(None), Err(ServiceError::NullArgument("entity")));
    assert_eq!(svc.data_service().get_all()?.len(), 2);
    Ok(())
}

#[test]
fn full_lifecycle_through_the_service() -> Result<(), anyhow::Error> {
    let svc = memory_service();
    let (mut r1, r2) = seed(&svc)?;

    r1.approval_count = 3;
    r1.update_approval(3);
    let updated = svc.upsert(Some(r1.clone()))?;
    assert!(updated.approved);
    assert_eq!(svc.get_by_id(&updated.id.unwrap_or_default())?, updated);

    svc.delete(&r2.id.unwrap_or_default())?;
    assert_eq!(svc.get_all()?, vec![updated]);

    svc.clear()?;
    assert!(svc.get_all()?.is_empty());
    Ok(())
}

#[test]
fn json_file_backend_behaves_like_memory() -> Result<(), anyhow::Error> {
    let path = std::env::temp_dir().join(format!("review_crud_{}.json", uuid::Uuid::new_v4()));
    let data: Arc<dyn CrudDataService<Review, i64>> = Arc::new(JsonFileDataService::<Review>::open(&path)?);
    let svc = CrudService::<Review, i64, _>::new(data);

    let saved = svc.upsert(Some(Review::new(4, 14, "Best oat latte on campus.")))?;
    assert_eq!(svc.get_all()?, vec![saved.clone()]);
    assert_eq!(svc.get_by_id(&999), Err(ServiceError::not_found("Review", 999)));

    let invalid = svc.upsert(Some(Review::new(4, 14, " ")));
    assert!(matches!(invalid, Err(ServiceError::Model(_))));

    svc.delete(&saved.id.unwrap_or_default())?;
    assert!(svc.get_all()?.is_empty());

    let _ = std::fs::remove_file(&path);
    Ok(())
}

#[test]
fn concurrent_inserts_get_distinct_ids() -> Result<(), anyhow::Error> {
    let svc = memory_service();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let svc = svc.clone();
            thread::spawn(move || svc.upsert(Some(Review::new(1, 20 + i, format!("review {i}")))))
        })
        .collect();
    for h in handles {
        h.join().map_err(|_| anyhow::anyhow!("worker panicked"))??;
    }

    let mut ids: Vec<i64> = svc.get_all()?.into_iter().filter_map(|r| r.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    Ok(())
}
