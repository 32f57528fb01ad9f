//! Unit tests for the in-memory content repositories

use crate::domain::entities::{Certificate, Project, Skill, SkillCategory};
use crate::repositories::resource::{
    InMemoryResourceRepository, MockSkillRepository, ResourceRepository, SkillCategoryRepository,
};

fn project(title: &str, sort_order: i64) -> Project {
    Project {
        title: title.to_string(),
        sort_order,
        ..Project::default()
    }
}

#[tokio::test]
async fn test_create_assigns_id() {
    let repo = InMemoryResourceRepository::<Project>::new();

    let first = repo.create(project("a", 0)).await.unwrap();
    let second = repo.create(Project { id: 77, ..project("b", 0) }).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn test_list_orders_by_sort_order_then_id() {
    let repo = InMemoryResourceRepository::<Project>::new();
    repo.create(project("late", 2)).await.unwrap();
    repo.create(project("early", 1)).await.unwrap();
    repo.create(project("early-too", 1)).await.unwrap();

    let titles: Vec<String> = repo.list().await.unwrap().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["early", "early-too", "late"]);
}

#[tokio::test]
async fn test_update_missing_returns_none() {
    let repo = InMemoryResourceRepository::<Certificate>::new();

    let result = repo.update(9999, Certificate::default()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_uses_path_id() {
    let repo = InMemoryResourceRepository::<Certificate>::new();
    let created = repo.create(Certificate::default()).await.unwrap();

    let updated = repo
        .update(
            created.id,
            Certificate {
                id: 500,
                name: "CKA".to_string(),
                ..Certificate::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(repo.find_by_id(created.id).await.unwrap().unwrap().name, "CKA");
    assert!(repo.find_by_id(500).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_returns_false() {
    let repo = InMemoryResourceRepository::<Project>::new();
    assert!(!repo.delete(9999).await.unwrap());
}

#[tokio::test]
async fn test_skills_grouped_under_categories() {
    let repo = MockSkillRepository::with_categories(vec![
        SkillCategory {
            id: 2,
            name: "Backend".to_string(),
            skills: vec![Skill {
                id: 10,
                category_id: 2,
                name: "Rust".to_string(),
                ..Skill::default()
            }],
            ..SkillCategory::default()
        },
        SkillCategory {
            id: 1,
            name: "Frontend".to_string(),
            ..SkillCategory::default()
        },
    ]);

    repo.create(Skill {
        category_id: 1,
        name: "Vue".to_string(),
        ..Skill::default()
    })
    .await
    .unwrap();

    let categories = repo.list_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Frontend");
    assert_eq!(categories[0].skills[0].name, "Vue");
    assert_eq!(categories[1].skills[0].name, "Rust");
    assert_eq!(categories[0].skills[0].id, 11);
}
