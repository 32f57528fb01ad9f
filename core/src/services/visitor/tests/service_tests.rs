//! Unit tests for visitor verification

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use resume_shared::config::JwtSchemeConfig;

use crate::domain::entities::profile::Profile;
use crate::domain::entities::visitor_access::{AccessType, NewVisitorAccess};
use crate::errors::{AuthError, DomainError, ErrorKind};
use crate::repositories::{MockProfileRepository, MockVisitorAccessRepository};
use crate::services::clock::FixedClock;
use crate::services::token::VisitorTokenScheme;
use crate::services::visitor::VisitorService;

type Service = VisitorService<MockVisitorAccessRepository, MockProfileRepository>;

async fn service() -> (Service, Arc<VisitorTokenScheme>) {
    let access = Arc::new(MockVisitorAccessRepository::with_default_password().await);
    let profile = Arc::new(MockProfileRepository::with_profile(Profile {
        id: 1,
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "13800000000".to_string(),
        ..Profile::default()
    }));
    let clock = Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
    ));
    let scheme = Arc::new(VisitorTokenScheme::new(
        &JwtSchemeConfig::new("visitor-test-secret"),
        clock,
    ));

    (VisitorService::new(access, profile, scheme.clone()), scheme)
}

#[tokio::test]
async fn test_password_verification_binds_access_key() {
    let (service, scheme) = service().await;

    let token = service.verify("password", "default_password").await.unwrap();
    let claims = scheme.verify(&token).unwrap();

    assert_eq!(claims.access_key, "visitor_key");
    assert_eq!(claims.token_type, "visitor");
}

#[tokio::test]
async fn test_profile_field_verification() {
    let (service, scheme) = service().await;

    let token = service.verify("email", "ada@example.com").await.unwrap();
    assert_eq!(
        scheme.verify(&token).unwrap().access_key,
        "email_ada@example.com"
    );

    let token = service.verify("name", "Ada Lovelace").await.unwrap();
    assert_eq!(scheme.verify(&token).unwrap().access_key, "name_Ada Lovelace");
}

#[tokio::test]
async fn test_wrong_value_fails_verification() {
    let (service, _) = service().await;

    for (kind, value) in [
        ("password", "guess"),
        ("phone", "0000"),
        ("name", "ada lovelace"),
    ] {
        let err = service.verify(kind, value).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::VerificationFailed)));
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }
}

#[tokio::test]
async fn test_unknown_type_is_bad_request() {
    let (service, _) = service().await;

    let err = service.verify("fingerprint", "x").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);
}

#[tokio::test]
async fn test_type_checked_before_value() {
    let (service, _) = service().await;

    let err = service.verify("fingerprint", "").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidVerificationType { .. })
    ));
}

#[tokio::test]
async fn test_empty_value_is_bad_request() {
    let (service, _) = service().await;

    let err = service.verify("password", "").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::EmptyVerificationValue)));
}

#[tokio::test]
async fn test_add_only_password_entries() {
    let (service, _) = service().await;

    let result = service
        .add_access(NewVisitorAccess {
            access_type: AccessType::Email,
            value: "someone@example.com".to_string(),
            access_key: "k".to_string(),
        })
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    let added = service
        .add_access(NewVisitorAccess {
            access_type: AccessType::Password,
            value: "recruiter-2024".to_string(),
            access_key: "recruiter".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(added.access_key, "recruiter");

    assert!(service.verify("password", "recruiter-2024").await.is_ok());
    assert_eq!(service.list_access().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_access() {
    let (service, _) = service().await;
    let id = service.list_access().await.unwrap()[0].id;

    service.delete_access(id).await.unwrap();

    assert!(matches!(
        service.delete_access(id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(service.verify("password", "default_password").await.is_err());
}
