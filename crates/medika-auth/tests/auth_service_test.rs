//! Integration tests for the authentication service wired to the
//! SurrealDB staff repository (in-memory engine).

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use medika_auth::{AccessTokenClaims, AuthConfig, AuthService, RegisterStaffInput};
use medika_core::error::MedikaError;
use medika_core::models::hospital::CreateHospital;
use medika_core::repository::HospitalRepository;
use medika_db::repository::{SurrealHospitalRepository, SurrealStaffRepository};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

type TestAuthService = AuthService<SurrealStaffRepository<surrealdb::engine::local::Db>>;

fn test_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "integration-test-secret".into(),
        ..AuthConfig::default()
    }
}

async fn setup_with(config: AuthConfig) -> (TestAuthService, Uuid) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    medika_db::run_migrations(&db).await.unwrap();

    let hospital = SurrealHospitalRepository::new(db.clone())
        .create(CreateHospital {
            name: "Test Hospital".into(),
        })
        .await
        .unwrap();

    let service = AuthService::new(SurrealStaffRepository::new(db), config);
    (service, hospital.id)
}

async fn setup() -> (TestAuthService, Uuid) {
    setup_with(test_config()).await
}

fn register_input(hospital_id: Uuid, username: &str, password: &str) -> RegisterStaffInput {
    RegisterStaffInput {
        hospital_id,
        username: username.into(),
        password: password.into(),
    }
}

/// Sign a token with the service secret but arbitrary subject and
/// lifetime (negative = already expired).
fn forged_token(config: &AuthConfig, sub: &str, lifetime_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = AccessTokenClaims {
        sub: sub.into(),
        iat: now - 7200,
        exp: now + lifetime_secs,
    };
    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key).unwrap()
}

#[tokio::test]
async fn register_then_login_issues_token_for_staff() {
    let (service, hospital_id) = setup().await;

    let staff = service
        .register(register_input(hospital_id, "alice", "correct horse battery"))
        .await
        .unwrap();
    assert_ne!(staff.password_hash, "correct horse battery");

    let token = service
        .login(hospital_id, "alice", "correct horse battery")
        .await
        .unwrap();

    let context = service
        .authenticate(Some(&format!("Bearer {token}")))
        .await
        .unwrap();
    assert_eq!(context.staff_id, staff.id);
    assert_eq!(context.hospital_id, hospital_id);
}

#[tokio::test]
async fn unknown_user_and_wrong_password_are_indistinguishable() {
    let (service, hospital_id) = setup().await;

    service
        .register(register_input(hospital_id, "alice", "correct horse battery"))
        .await
        .unwrap();

    let wrong_password = service
        .login(hospital_id, "alice", "wrong password!")
        .await
        .unwrap_err();
    let unknown_user = service
        .login(hospital_id, "nobody", "wrong password!")
        .await
        .unwrap_err();

    assert!(matches!(
        wrong_password,
        MedikaError::AuthenticationFailed { .. }
    ));
    // Same variant, same message: responses must not reveal whether
    // the username exists.
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[tokio::test]
async fn duplicate_registration_is_reported() {
    let (service, hospital_id) = setup().await;

    service
        .register(register_input(hospital_id, "alice", "first password"))
        .await
        .unwrap();
    let err = service
        .register(register_input(hospital_id, "alice", "second password"))
        .await
        .unwrap_err();
    assert!(matches!(err, MedikaError::AlreadyExists { .. }));
}

#[tokio::test]
async fn registration_enforces_password_policy() {
    let (service, hospital_id) = setup().await;

    let err = service
        .register(register_input(hospital_id, "alice", "short"))
        .await
        .unwrap_err();
    assert!(matches!(err, MedikaError::Validation { .. }));

    let err = service
        .register(register_input(hospital_id, "   ", "long enough password"))
        .await
        .unwrap_err();
    assert!(matches!(err, MedikaError::Validation { .. }));
}

#[tokio::test]
async fn login_is_hospital_scoped() {
    let (service, hospital_id) = setup().await;

    service
        .register(register_input(hospital_id, "alice", "correct horse battery"))
        .await
        .unwrap();

    let err = service
        .login(Uuid::new_v4(), "alice", "correct horse battery")
        .await
        .unwrap_err();
    assert!(matches!(err, MedikaError::AuthenticationFailed { .. }));
}

#[tokio::test]
async fn authenticate_rejects_bad_credentials() {
    let (service, hospital_id) = setup().await;

    service
        .register(register_input(hospital_id, "alice", "correct horse battery"))
        .await
        .unwrap();
    let token = service
        .login(hospital_id, "alice", "correct horse battery")
        .await
        .unwrap();

    // No header at all.
    let err = service.authenticate(None).await.unwrap_err();
    assert!(matches!(err, MedikaError::AuthenticationFailed { .. }));

    // Wrong scheme.
    let err = service
        .authenticate(Some(&format!("Basic {token}")))
        .await
        .unwrap_err();
    assert!(matches!(err, MedikaError::AuthenticationFailed { .. }));

    // Tampered token.
    let err = service
        .authenticate(Some(&format!("Bearer {token}x")))
        .await
        .unwrap_err();
    assert!(matches!(err, MedikaError::AuthenticationFailed { .. }));
}

#[tokio::test]
async fn verified_token_without_backing_staff_is_denied() {
    let (service, _hospital_id) = setup().await;

    // Signed with the right secret, but the subject was never
    // registered.
    let token =
        medika_auth::token::issue_access_token(Uuid::new_v4(), service.config()).unwrap();
    let err = service
        .authenticate(Some(&format!("Bearer {token}")))
        .await
        .unwrap_err();
    assert!(matches!(err, MedikaError::AuthorizationDenied { .. }));
}

#[tokio::test]
async fn token_with_unusable_subject_is_an_authentication_failure() {
    let (service, _hospital_id) = setup().await;

    // Correctly signed, but the subject cannot name a staff member.
    let token = forged_token(service.config(), "not-a-uuid", 600);
    let err = service
        .authenticate(Some(&format!("Bearer {token}")))
        .await
        .unwrap_err();
    assert!(matches!(err, MedikaError::AuthenticationFailed { .. }));
}

#[tokio::test]
async fn gate_rejections_share_one_generic_message() {
    let (service, hospital_id) = setup().await;

    service
        .register(register_input(hospital_id, "alice", "correct horse battery"))
        .await
        .unwrap();
    let token = service
        .login(hospital_id, "alice", "correct horse battery")
        .await
        .unwrap();

    let expired = forged_token(service.config(), &Uuid::new_v4().to_string(), -3600);
    let bad_subject = forged_token(service.config(), "not-a-uuid", 600);

    let headers = [
        None,
        Some(format!("Basic {token}")),
        Some(format!("Bearer {token}x")),
        Some(format!("Bearer {expired}")),
        Some(format!("Bearer {bad_subject}")),
    ];

    let mut messages = Vec::new();
    for header in &headers {
        let err = service.authenticate(header.as_deref()).await.unwrap_err();
        assert!(matches!(err, MedikaError::AuthenticationFailed { .. }));
        messages.push(err.to_string());
    }
    messages.dedup();
    assert_eq!(
        messages.len(),
        1,
        "rejections must not reveal which verification step failed"
    );
}

#[tokio::test]
async fn usernames_are_stored_trimmed() {
    let (service, hospital_id) = setup().await;

    let staff = service
        .register(register_input(hospital_id, "  alice  ", "correct horse battery"))
        .await
        .unwrap();
    assert_eq!(staff.username, "alice");

    // The padded spelling is the same credential, both ways.
    let err = service
        .register(register_input(hospital_id, "alice", "another password!"))
        .await
        .unwrap_err();
    assert!(matches!(err, MedikaError::AlreadyExists { .. }));

    assert!(
        service
            .login(hospital_id, "alice ", "correct horse battery")
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn empty_secret_fails_login_as_misconfigured() {
    let config = AuthConfig {
        jwt_secret: String::new(),
        ..AuthConfig::default()
    };
    let (service, hospital_id) = setup_with(config).await;

    service
        .register(register_input(hospital_id, "alice", "correct horse battery"))
        .await
        .unwrap();
    let err = service
        .login(hospital_id, "alice", "correct horse battery")
        .await
        .unwrap_err();
    assert!(matches!(err, MedikaError::Misconfigured(_)));
}

#[tokio::test]
async fn pepper_change_invalidates_stored_hashes() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    medika_db::run_migrations(&db).await.unwrap();

    let hospital_id = SurrealHospitalRepository::new(db.clone())
        .create(CreateHospital {
            name: "Test Hospital".into(),
        })
        .await
        .unwrap()
        .id;
    let staff_repo = SurrealStaffRepository::new(db);

    let peppered = AuthService::new(
        staff_repo.clone(),
        AuthConfig {
            pepper: Some("pepper-a".into()),
            ..test_config()
        },
    );
    peppered
        .register(register_input(hospital_id, "alice", "correct horse battery"))
        .await
        .unwrap();
    assert!(
        peppered
            .login(hospital_id, "alice", "correct horse battery")
            .await
            .is_ok()
    );

    // Same store, different pepper: previously stored hashes no
    // longer verify.
    let repeppered = AuthService::new(
        staff_repo,
        AuthConfig {
            pepper: Some("pepper-b".into()),
            ..test_config()
        },
    );
    let err = repeppered
        .login(hospital_id, "alice", "correct horse battery")
        .await
        .unwrap_err();
    assert!(matches!(err, MedikaError::AuthenticationFailed { .. }));
}
