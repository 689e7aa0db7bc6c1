//! In-memory session store.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses opaque random tokens stored in an HttpOnly cookie. Tokens
//! map to a user id and an absolute expiry. Expired entries are rejected on
//! lookup and purged in bulk by a background sweeper.
//!
//! TRADE-OFFS
//! ==========
//! Sessions do not survive a restart; everyone signs in again. Persistence is
//! owned by the external data layer, not this service.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SessionRecord {
    user_id: Uuid,
    expires_at: OffsetDateTime,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SessionRecord>>>,
    ttl: time::Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl: time::Duration::try_from(ttl).unwrap_or(time::Duration::DAY),
        }
    }

    /// Lifetime of newly created sessions.
    #[must_use]
    pub fn ttl(&self) -> time::Duration {
        self.ttl
    }

    /// Create a session for the given user, returning the token.
    pub async fn create(&self, user_id: Uuid) -> String {
        self.create_at(user_id, OffsetDateTime::now_utc()).await
    }

    async fn create_at(&self, user_id: Uuid, now: OffsetDateTime) -> String {
        let token = generate_token();
        let record = SessionRecord { user_id, expires_at: now + self.ttl };
        self.inner.write().await.insert(token.clone(), record);
        token
    }

    /// Validate a session token and return the associated user id.
    pub async fn validate(&self, token: &str) -> Option<Uuid> {
        self.validate_at(token, OffsetDateTime::now_utc()).await
    }

    async fn validate_at(&self, token: &str, now: OffsetDateTime) -> Option<Uuid> {
        if token.is_empty() {
            return None;
        }
        let record = self.inner.read().await.get(token).copied()?;
        if record.expires_at <= now {
            self.inner.write().await.remove(token);
            return None;
        }
        Some(record.user_id)
    }

    /// Delete a session by token. Returns whether it existed.
    pub async fn revoke(&self, token: &str) -> bool {
        self.inner.write().await.remove(token).is_some()
    }

    /// Drop every expired session, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        self.purge_expired_at(OffsetDateTime::now_utc()).await
    }

    async fn purge_expired_at(&self, now: OffsetDateTime) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, record| record.expires_at > now);
        before - sessions.len()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// Spawn the background task that periodically purges expired sessions.
pub fn spawn_session_sweeper(store: SessionStore, every: std::time::Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let removed = store.purge_expired().await;
            if removed > 0 {
                tracing::debug!(removed, "purged expired sessions");
            }
        }
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
