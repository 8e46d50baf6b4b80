//! Integration tests for topic persistence and visibility filtering.

use learning_log_core::visibility::TopicScope;
use learning_log_db::models::topic::CreateTopic;
use learning_log_db::models::user::CreateUser;
use learning_log_db::repositories::{TopicRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, username: &str) -> i64 {
    let input = CreateUser {
        username: username.to_string(),
        password_hash: "not-a-real-hash".to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

async fn new_topic(pool: &PgPool, owner_id: i64, text: &str, public: bool) -> i64 {
    let input = CreateTopic {
        owner_id,
        text: text.to_string(),
        public,
    };
    TopicRepo::create(pool, &input).await.unwrap().id
}

fn texts(topics: &[learning_log_db::models::topic::Topic]) -> Vec<&str> {
    topics.iter().map(|t| t.text.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_topic(pool: PgPool) {
    let owner = new_user(&pool, "alice").await;
    let id = new_topic(&pool, owner, "Chess", true).await;

    let topic = TopicRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(topic.text, "Chess");
    assert!(topic.public);
    assert_eq!(topic.owner_id, owner);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_topic_returns_none(pool: PgPool) {
    let topic = TopicRepo::find_by_id(&pool, 424242).await.unwrap();
    assert!(topic.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_only_scope_hides_private_topics(pool: PgPool) {
    let alice = new_user(&pool, "alice").await;
    new_topic(&pool, alice, "Public chess", true).await;
    new_topic(&pool, alice, "Private diary", false).await;

    let topics = TopicRepo::list_visible(&pool, TopicScope::PublicOnly)
        .await
        .unwrap();
    assert_eq!(texts(&topics), ["Public chess"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_owner_scope_adds_own_private_topics_only(pool: PgPool) {
    let alice = new_user(&pool, "alice").await;
    let bob = new_user(&pool, "bob").await;
    new_topic(&pool, alice, "Alice public", true).await;
    new_topic(&pool, alice, "Alice private", false).await;
    new_topic(&pool, bob, "Bob private", false).await;
    new_topic(&pool, bob, "Bob public", true).await;

    let topics = TopicRepo::list_visible(&pool, TopicScope::PublicOrOwnedBy(alice))
        .await
        .unwrap();
    assert_eq!(texts(&topics), ["Alice public", "Alice private", "Bob public"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_ordered_oldest_first(pool: PgPool) {
    let alice = new_user(&pool, "alice").await;
    for text in ["first", "second", "third"] {
        new_topic(&pool, alice, text, true).await;
    }

    let topics = TopicRepo::list_visible(&pool, TopicScope::PublicOnly)
        .await
        .unwrap();
    assert_eq!(texts(&topics), ["first", "second", "third"]);
    assert!(topics.windows(2).all(|w| w[0].created_at <= w[1].created_at));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_by_owner(pool: PgPool) {
    let alice = new_user(&pool, "alice").await;
    let bob = new_user(&pool, "bob").await;
    new_topic(&pool, alice, "a", false).await;
    new_topic(&pool, alice, "b", true).await;

    assert_eq!(TopicRepo::count_by_owner(&pool, alice).await.unwrap(), 2);
    assert_eq!(TopicRepo::count_by_owner(&pool, bob).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_topic_requires_existing_owner(pool: PgPool) {
    let input = CreateTopic {
        owner_id: 999_999,
        text: "Orphan".to_string(),
        public: true,
    };
    let result = TopicRepo::create(&pool, &input).await;
    assert!(result.is_err(), "foreign key on owner_id must be enforced");
}
