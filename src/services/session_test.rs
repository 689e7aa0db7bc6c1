use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionStore
// =============================================================================

fn store() -> SessionStore {
    SessionStore::new(std::time::Duration::from_secs(3600))
}

#[tokio::test]
async fn create_then_validate_returns_user() {
    let store = store();
    let user_id = Uuid::new_v4();
    let token = store.create(user_id).await;
    assert_eq!(store.validate(&token).await, Some(user_id));
}

#[tokio::test]
async fn validate_unknown_or_empty_token_is_none() {
    let store = store();
    assert_eq!(store.validate("nope").await, None);
    assert_eq!(store.validate("").await, None);
}

#[tokio::test]
async fn revoke_invalidates_token() {
    let store = store();
    let token = store.create(Uuid::new_v4()).await;
    assert!(store.revoke(&token).await);
    assert_eq!(store.validate(&token).await, None);
    assert!(!store.revoke(&token).await);
}

#[tokio::test]
async fn expired_session_is_rejected_and_removed() {
    let store = store();
    let now = OffsetDateTime::now_utc();
    let token = store.create_at(Uuid::new_v4(), now).await;
    let later = now + time::Duration::hours(2);
    assert_eq!(store.validate_at(&token, later).await, None);
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn session_is_valid_until_expiry() {
    let store = store();
    let now = OffsetDateTime::now_utc();
    let user_id = Uuid::new_v4();
    let token = store.create_at(user_id, now).await;
    let almost = now + time::Duration::minutes(59);
    assert_eq!(store.validate_at(&token, almost).await, Some(user_id));
}

#[tokio::test]
async fn purge_removes_only_expired() {
    let store = store();
    let now = OffsetDateTime::now_utc();
    store.create_at(Uuid::new_v4(), now - time::Duration::hours(2)).await;
    let live = store.create_at(Uuid::new_v4(), now).await;
    assert_eq!(store.purge_expired_at(now).await, 1);
    assert_eq!(store.len().await, 1);
    assert!(store.validate_at(&live, now).await.is_some());
}

#[test]
fn oversized_ttl_falls_back_to_one_day() {
    let store = SessionStore::new(std::time::Duration::MAX);
    assert_eq!(store.ttl(), time::Duration::DAY);
}
