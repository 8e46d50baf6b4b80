//! Integration tests for entry persistence.

use learning_log_db::models::entry::CreateEntry;
use learning_log_db::models::topic::CreateTopic;
use learning_log_db::models::user::CreateUser;
use learning_log_db::repositories::{EntryRepo, TopicRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn topic_fixture(pool: &PgPool) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: "alice".to_string(),
            password_hash: "not-a-real-hash".to_string(),
        },
    )
    .await
    .unwrap();
    let topic = TopicRepo::create(
        pool,
        &CreateTopic {
            owner_id: user.id,
            text: "Chess".to_string(),
            public: false,
        },
    )
    .await
    .unwrap();
    topic.id
}

async fn new_entry(pool: &PgPool, topic_id: i64, text: &str) -> i64 {
    let input = CreateEntry {
        topic_id,
        text: text.to_string(),
    };
    EntryRepo::create(pool, &input).await.unwrap().id
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_entries_listed_most_recent_first(pool: PgPool) {
    let topic_id = topic_fixture(&pool).await;
    new_entry(&pool, topic_id, "opening").await;
    new_entry(&pool, topic_id, "middlegame").await;
    new_entry(&pool, topic_id, "endgame").await;

    let entries = EntryRepo::list_by_topic(&pool, topic_id).await.unwrap();
    let texts: Vec<_> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, ["endgame", "middlegame", "opening"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_text_keeps_identity_and_parent(pool: PgPool) {
    let topic_id = topic_fixture(&pool).await;
    let id = new_entry(&pool, topic_id, "a").await;

    let updated = EntryRepo::update_text(&pool, id, "b")
        .await
        .unwrap()
        .expect("entry should exist");
    assert_eq!(updated.id, id);
    assert_eq!(updated.topic_id, topic_id);
    assert_eq!(updated.text, "b");
    assert!(updated.updated_at >= updated.created_at);
    assert_eq!(EntryRepo::count_by_topic(&pool, topic_id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_entry_returns_none(pool: PgPool) {
    let updated = EntryRepo::update_text(&pool, 123456, "b").await.unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_entries_of_other_topics_are_not_listed(pool: PgPool) {
    let topic_id = topic_fixture(&pool).await;
    let topic = TopicRepo::find_by_id(&pool, topic_id).await.unwrap().unwrap();
    let other = TopicRepo::create(
        &pool,
        &CreateTopic {
            owner_id: topic.owner_id,
            text: "Go".to_string(),
            public: true,
        },
    )
    .await
    .unwrap();
    new_entry(&pool, topic_id, "chess note").await;
    new_entry(&pool, other.id, "go note").await;

    let entries = EntryRepo::list_by_topic(&pool, other.id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "go note");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_excerpt_of_stored_entry(pool: PgPool) {
    let topic_id = topic_fixture(&pool).await;
    let long = "x".repeat(80);
    let id = new_entry(&pool, topic_id, &long).await;

    let entry = EntryRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(entry.excerpt(), format!("{}...", "x".repeat(50)));
}
