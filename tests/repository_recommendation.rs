use recommendations::domain::entities::RecommendationAttributes;
use recommendations::domain::repositories::RecommendationRepository;
use recommendations::error::AppError;
use recommendations::infrastructure::persistence::PgRecommendationRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn attributes(who: &str) -> RecommendationAttributes {
    RecommendationAttributes::new(
        "Always ships on time.",
        who,
        "Acme Corp",
        "https://acme.example.com",
    )
    .with_company("Acme Corp")
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_recommendation(pool: PgPool) {
    let repo = PgRecommendationRepository::new(Arc::new(pool));

    let created = repo
        .create(attributes("Jane Doe").with_who_url("https://janedoe.example.com"))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.attributes.who, "Jane Doe");
    assert_eq!(created.attributes.r#where, "Acme Corp");
    assert_eq!(
        created.attributes.who_url.as_deref(),
        Some("https://janedoe.example.com")
    );
    assert!(created.attributes.position.is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgRecommendationRepository::new(Arc::new(pool));
    let created = repo.create(attributes("Jane Doe")).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));

    let missing = repo.find_by_id(999_999).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_newest_first_and_count(pool: PgPool) {
    let repo = PgRecommendationRepository::new(Arc::new(pool));

    for who in ["First", "Second", "Third"] {
        repo.create(attributes(who)).await.unwrap();
    }

    let page = repo.list(0, 2).await.unwrap();
    let names: Vec<&str> = page.iter().map(|r| r.attributes.who.as_str()).collect();
    assert_eq!(names, vec!["Third", "Second"]);

    let rest = repo.list(2, 2).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].attributes.who, "First");

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_replaces_attributes(pool: PgPool) {
    let repo = PgRecommendationRepository::new(Arc::new(pool));
    let created = repo.create(attributes("Jane Doe")).await.unwrap();

    let mut changed = created.attributes.clone();
    changed.who = "Janet Doe".to_string();
    changed.company = None;

    let updated = repo.update(created.id, changed).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.attributes.who, "Janet Doe");
    assert!(updated.attributes.company.is_none());
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing_is_not_found(pool: PgPool) {
    let repo = PgRecommendationRepository::new(Arc::new(pool));

    let result = repo.update(424_242, attributes("Nobody")).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete(pool: PgPool) {
    let repo = PgRecommendationRepository::new(Arc::new(pool));
    let created = repo.create(attributes("Jane Doe")).await.unwrap();

    repo.delete(created.id).await.unwrap();
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());

    let again = repo.delete(created.id).await;
    assert!(matches!(again, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = PgRecommendationRepository::new(Arc::new(pool));
    assert!(repo.ping().await.is_ok());
}
