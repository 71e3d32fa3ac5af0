//! Integration tests for the Hospital repository using in-memory
//! SurrealDB.

use medika_core::error::MedikaError;
use medika_core::models::hospital::CreateHospital;
use medika_core::repository::HospitalRepository;
use medika_db::repository::SurrealHospitalRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    medika_db::run_migrations(&db).await.unwrap();
    db
}

#[tokio::test]
async fn create_and_get_hospital() {
    let db = setup().await;
    let repo = SurrealHospitalRepository::new(db);

    let created = repo
        .create(CreateHospital {
            name: "Bangkok General".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.name, "Bangkok General");

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Bangkok General");
}

#[tokio::test]
async fn timestamps_are_set_server_side() {
    let db = setup().await;
    let repo = SurrealHospitalRepository::new(db);

    let before = chrono::Utc::now() - chrono::Duration::seconds(5);
    let created = repo
        .create(CreateHospital {
            name: "Chiang Mai Clinic".into(),
        })
        .await
        .unwrap();
    assert!(created.created_at > before);
    assert!(created.updated_at > before);
}

#[tokio::test]
async fn names_need_not_be_unique() {
    let db = setup().await;
    let repo = SurrealHospitalRepository::new(db);

    let a = repo
        .create(CreateHospital {
            name: "St. Mary".into(),
        })
        .await
        .unwrap();
    let b = repo
        .create(CreateHospital {
            name: "St. Mary".into(),
        })
        .await
        .unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn get_missing_hospital_is_not_found() {
    let db = setup().await;
    let repo = SurrealHospitalRepository::new(db);

    let err = repo.get_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, MedikaError::NotFound { .. }));
}
