//! SQLite tests for profile and content repositories

mod common;

use chrono::{TimeZone, Utc};
use resume_core::domain::entities::{
    Certificate, Experience, Metric, Profile, ProfileField, Project, Skill,
};
use resume_core::errors::DomainError;
use resume_core::repositories::{ProfileRepository, ResourceRepository, SkillCategoryRepository};
use resume_infra::{
    SqliteCertificateRepository, SqliteExperienceRepository, SqliteProfileRepository,
    SqliteProjectRepository, SqliteSkillRepository,
};

#[tokio::test]
async fn test_profile_absent_then_upserted() {
    let pool = common::test_pool().await;
    let repo = SqliteProfileRepository::new(pool.pool().clone());

    assert!(repo.get().await.unwrap().is_none());

    let stamped = Utc.with_ymd_and_hms(2024, 5, 4, 3, 2, 1).unwrap();
    let first = repo
        .upsert(Profile {
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            email: "ada@example.com".to_string(),
            years_of_exp: 8,
            last_updated: Some(stamped),
            ..Profile::default()
        })
        .await
        .unwrap();

    let second = repo
        .upsert(Profile {
            name: "Ada L.".to_string(),
            title: "Engineer".to_string(),
            ..Profile::default()
        })
        .await
        .unwrap();

    assert_eq!(first.id, second.id);

    let stored = repo.get().await.unwrap().unwrap();
    assert_eq!(stored.name, "Ada L.");
    assert_eq!(stored.email, "");
    assert!(stored.last_updated.is_none());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profile")
        .fetch_one(pool.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_profile_timestamp_round_trips() {
    let pool = common::test_pool().await;
    let repo = SqliteProfileRepository::new(pool.pool().clone());
    let stamped = Utc.with_ymd_and_hms(2024, 5, 4, 3, 2, 1).unwrap();

    repo.upsert(Profile {
        name: "Ada".to_string(),
        last_updated: Some(stamped),
        ..Profile::default()
    })
    .await
    .unwrap();

    assert_eq!(repo.get().await.unwrap().unwrap().last_updated, Some(stamped));
}

#[tokio::test]
async fn test_profile_field_matching() {
    let pool = common::test_pool().await;
    let repo = SqliteProfileRepository::new(pool.pool().clone());
    repo.upsert(Profile {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        phone: "13800000000".to_string(),
        ..Profile::default()
    })
    .await
    .unwrap();

    assert!(repo.field_matches(ProfileField::Name, "Ada").await.unwrap());
    assert!(repo.field_matches(ProfileField::Email, "ada@example.com").await.unwrap());
    assert!(repo.field_matches(ProfileField::Phone, "13800000000").await.unwrap());
    assert!(!repo.field_matches(ProfileField::Name, "ada").await.unwrap());
    assert!(!repo.field_matches(ProfileField::Email, "x@example.com").await.unwrap());
    // Each field is compared against its own column only.
    assert!(!repo.field_matches(ProfileField::Email, "Ada").await.unwrap());
    assert!(!repo.field_matches(ProfileField::Phone, "ada@example.com").await.unwrap());
}

#[tokio::test]
async fn test_profile_field_value_is_bound_not_interpolated() {
    let pool = common::test_pool().await;
    let repo = SqliteProfileRepository::new(pool.pool().clone());
    repo.upsert(Profile {
        name: "Ada".to_string(),
        ..Profile::default()
    })
    .await
    .unwrap();

    for value in ["' OR '1'='1", "x' OR 1=1 --", "Ada' --"] {
        assert!(
            !repo.field_matches(ProfileField::Name, value).await.unwrap(),
            "matched {:?}",
            value
        );
    }
}

#[tokio::test]
async fn test_project_crud_with_json_columns() {
    let pool = common::test_pool().await;
    let repo = SqliteProjectRepository::new(pool.pool().clone());

    let created = repo
        .create(Project {
            title: "Resume API".to_string(),
            show_architecture: true,
            metrics: vec![Metric {
                value: "99.9%".to_string(),
                label: "uptime".to_string(),
            }],
            key_points: vec!["auth".to_string()],
            tech_stack: vec!["Rust".to_string(), "SQLite".to_string()],
            ..Project::default()
        })
        .await
        .unwrap();

    let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let updated = repo
        .update(
            created.id,
            Project {
                title: "Resume API v2".to_string(),
                ..fetched.clone()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(repo.list().await.unwrap()[0].title, "Resume API v2");

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_ids_report_absence() {
    let pool = common::test_pool().await;
    let repo = SqliteProjectRepository::new(pool.pool().clone());

    assert!(repo.find_by_id(9999).await.unwrap().is_none());
    assert!(repo.update(9999, Project::default()).await.unwrap().is_none());
    assert!(!repo.delete(9999).await.unwrap());
}

#[tokio::test]
async fn test_null_json_columns_decode_empty() {
    let pool = common::test_pool().await;
    sqlx::query("INSERT INTO experiences (period, title, company) VALUES ('2020', 'Dev', 'Acme')")
        .execute(pool.pool())
        .await
        .unwrap();
    let repo = SqliteExperienceRepository::new(pool.pool().clone());

    let list = repo.list().await.unwrap();
    assert_eq!(list.len(), 1);
    assert!(list[0].responsibilities.is_empty());
    assert!(list[0].technologies.is_empty());
    assert_eq!(list[0].sort_order, 0);
}

#[tokio::test]
async fn test_corrupt_json_column_is_internal_error() {
    let pool = common::test_pool().await;
    sqlx::query(
        "INSERT INTO experiences (period, title, company, achievements) VALUES ('2020', 'Dev', 'Acme', '{not json')",
    )
    .execute(pool.pool())
    .await
    .unwrap();
    let repo = SqliteExperienceRepository::new(pool.pool().clone());

    assert!(matches!(
        repo.list().await,
        Err(DomainError::Internal { .. })
    ));
}

#[tokio::test]
async fn test_experiences_ordered_by_sort_order_then_id() {
    let pool = common::test_pool().await;
    let repo = SqliteExperienceRepository::new(pool.pool().clone());

    for (title, sort_order) in [("c", 2), ("a", 1), ("b", 1)] {
        repo.create(Experience {
            period: "2020".to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            sort_order,
            ..Experience::default()
        })
        .await
        .unwrap();
    }

    let titles: Vec<String> = repo.list().await.unwrap().into_iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_certificate_update_and_delete() {
    let pool = common::test_pool().await;
    let repo = SqliteCertificateRepository::new(pool.pool().clone());

    let created = repo
        .create(Certificate {
            name: "CKA".to_string(),
            organization: "CNCF".to_string(),
            ..Certificate::default()
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            Certificate {
                name: "CKAD".to_string(),
                ..Certificate::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "CKAD");
    assert_eq!(repo.find_by_id(created.id).await.unwrap().unwrap().organization, "");
    assert!(repo.delete(created.id).await.unwrap());
}

#[tokio::test]
async fn test_skills_grouped_by_category() {
    let pool = common::test_pool().await;
    let repo = SqliteSkillRepository::new(pool.pool().clone());

    let skill = repo
        .create(Skill {
            category_id: 1,
            name: "Rust".to_string(),
            level: 90,
            tags: vec!["systems".to_string()],
            ..Skill::default()
        })
        .await
        .unwrap();

    let categories = repo.list_categories().await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Backend");
    assert_eq!(categories[0].skills, vec![skill]);
}

#[tokio::test]
async fn test_skill_with_unknown_category_is_rejected() {
    let pool = common::test_pool().await;
    let repo = SqliteSkillRepository::new(pool.pool().clone());

    let result = repo
        .create(Skill {
            category_id: 42,
            name: "Cobol".to_string(),
            ..Skill::default()
        })
        .await;

    assert!(matches!(result, Err(DomainError::Validation { .. })));
}
