//! Session registry - live review sessions keyed by (guild, user).
//!
//! # Concurrency
//!
//! Each key owns an async mutex. A step handler acquires the key's lock
//! through `get` / `get_or_create` and keeps it (as a `SessionGuard`) for the
//! whole step, including awaits on stores and notifiers. Interactions for the
//! same key are therefore applied one after another in lock order, while
//! different keys never share a lock.
//!
//! The key map sits behind an `RwLock` that is only held for map lookups and
//! edits, never while waiting on a session lock.
//!
//! # Guard semantics
//!
//! While a `SessionGuard` is alive the session lives in the guard; dropping
//! the guard writes it back into its slot (even if the handler future was
//! cancelled mid-step). `SessionGuard::finish` removes the session instead.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::domain::foundation::Timestamp;
use crate::domain::review::{ReviewError, ReviewSession, ReviewStep, SessionKey};

type Slot = Arc<Mutex<Option<ReviewSession>>>;
type SlotMap = Arc<RwLock<HashMap<SessionKey, Slot>>>;

/// In-memory registry of in-flight review sessions.
///
/// Cheap to clone; clones share the same sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    slots: SlotMap,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the session for `key`, creating it at the `Rating` step if absent.
    ///
    /// `display_name` is only used when a new session is created.
    pub async fn get_or_create(&self, key: &SessionKey, display_name: &str) -> SessionGuard {
        loop {
            let slot = {
                let mut slots = self.slots.write().await;
                slots
                    .entry(key.clone())
                    .or_insert_with(|| Arc::new(Mutex::new(None)))
                    .clone()
            };

            let mut cell = slot.clone().lock_owned().await;
            let session = match cell.take() {
                Some(session) => session,
                None => {
                    // Slot was removed while we waited for it; start over on the live one.
                    if !self.is_current(key, &slot).await {
                        continue;
                    }
                    let session = ReviewSession::new(key.clone(), display_name);
                    tracing::debug!(
                        session_id = %session.id(),
                        guild_id = %key.guild_id,
                        user_id = %key.user_id,
                        "Review session created"
                    );
                    session
                }
            };

            return SessionGuard::new(key.clone(), session, slot, cell, self.slots.clone());
        }
    }

    /// Locks the existing session for `key`.
    ///
    /// # Errors
    ///
    /// - `SessionExpired` if there is no session for the key
    pub async fn get(&self, key: &SessionKey) -> Result<SessionGuard, ReviewError> {
        let slot = self
            .slots
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or(ReviewError::SessionExpired)?;

        let mut cell = slot.clone().lock_owned().await;
        let session = cell.take().ok_or(ReviewError::SessionExpired)?;
        Ok(SessionGuard::new(key.clone(), session, slot, cell, self.slots.clone()))
    }

    /// Removes the session for `key`. Removing a missing key is a no-op.
    pub async fn delete(&self, key: &SessionKey) {
        let slot = self.slots.read().await.get(key).cloned();
        if let Some(slot) = slot {
            let mut cell = slot.clone().lock_owned().await;
            cell.take();
            remove_if_current(&self.slots, key, &slot).await;
        }
    }

    /// Number of keys currently tracked.
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drops sessions untouched for longer than `max_idle`.
    ///
    /// Sessions locked by a running handler are skipped. Returns how many
    /// entries were removed.
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let cutoff = Timestamp::now().minus(max_idle);
        let mut slots = self.slots.write().await;
        let before = slots.len();

        slots.retain(|_, slot| match slot.try_lock() {
            Ok(mut cell) => match cell.as_ref() {
                Some(session) if session.updated_at() >= &cutoff => true,
                _ => {
                    cell.take();
                    false
                }
            },
            Err(_) => true,
        });

        let evicted = before - slots.len();
        if evicted > 0 {
            tracing::info!(evicted, "Evicted idle review sessions");
        }
        evicted
    }

    async fn is_current(&self, key: &SessionKey, slot: &Slot) -> bool {
        self.slots
            .read()
            .await
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, slot))
    }
}

async fn remove_if_current(slots: &SlotMap, key: &SessionKey, slot: &Slot) {
    let mut slots = slots.write().await;
    if slots.get(key).is_some_and(|current| Arc::ptr_eq(current, slot)) {
        slots.remove(key);
    }
}

/// Exclusive access to one live session.
pub struct SessionGuard {
    key: SessionKey,
    session: ReviewSession,
    slot: Slot,
    cell: OwnedMutexGuard<Option<ReviewSession>>,
    slots: SlotMap,
    finished: bool,
}

impl SessionGuard {
    fn new(
        key: SessionKey,
        session: ReviewSession,
        slot: Slot,
        cell: OwnedMutexGuard<Option<ReviewSession>>,
        slots: SlotMap,
    ) -> Self {
        Self {
            key,
            session,
            slot,
            cell,
            slots,
            finished: false,
        }
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn session(&self) -> &ReviewSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ReviewSession {
        &mut self.session
    }

    /// Copy of the session for rendering after the lock is released.
    pub fn snapshot(&self) -> ReviewSession {
        self.session.clone()
    }

    /// Ends the session and removes its key from the registry.
    pub async fn finish(mut self) {
        self.finished = true;
        remove_if_current(&self.slots, &self.key, &self.slot).await;
        tracing::debug!(
            session_id = %self.session.id(),
            guild_id = %self.key.guild_id,
            user_id = %self.key.user_id,
            "Review session finished"
        );
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if self.session.step() == ReviewStep::Complete {
            // A commit was interrupted once the review may already be stored.
            // Leave the slot empty so the next input starts a fresh session.
            if let Ok(mut slots) = self.slots.try_write() {
                if slots
                    .get(&self.key)
                    .is_some_and(|current| Arc::ptr_eq(current, &self.slot))
                {
                    slots.remove(&self.key);
                }
            }
            tracing::warn!(
                session_id = %self.session.id(),
                guild_id = %self.key.guild_id,
                user_id = %self.key.user_id,
                "Review commit interrupted; session discarded"
            );
            return;
        }
        *self.cell = Some(self.session.clone());
    }
}

impl std::fmt::Debug for SessionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGuard")
            .field("key", &self.key)
            .field("session", &self.session)
            .field("finished", &self.finished)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{GuildId, UserId};
    use crate::domain::review::{Comment, CommentBounds, Rating, ReviewStep};
    use std::time::Duration as StdDuration;

    fn key(guild: &str, user: &str) -> SessionKey {
        SessionKey::new(GuildId::new(guild).unwrap(), UserId::new(user).unwrap())
    }

    #[tokio::test]
    async fn get_or_create_creates_session_at_rating() {
        let registry = SessionRegistry::new();
        let guard = registry.get_or_create(&key("g1", "u1"), "Alice").await;
        assert_eq!(guard.session().step(), ReviewStep::Rating);
        assert_eq!(guard.session().display_name(), "Alice");
        drop(guard);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn get_on_missing_key_is_session_expired() {
        let registry = SessionRegistry::new();
        let err = registry.get(&key("g1", "u1")).await.unwrap_err();
        assert_eq!(err, ReviewError::SessionExpired);
    }

    #[tokio::test]
    async fn mutations_are_written_back_on_drop() {
        let registry = SessionRegistry::new();
        let k = key("g1", "u1");
        {
            let mut guard = registry.get_or_create(&k, "Alice").await;
            guard
                .session_mut()
                .choose_rating(Rating::new(4).unwrap())
                .unwrap();
        }
        let guard = registry.get(&k).await.unwrap();
        assert_eq!(guard.session().step(), ReviewStep::Comment);
        assert_eq!(guard.session().rating(), Some(Rating::new(4).unwrap()));
    }

    #[tokio::test]
    async fn unfinished_complete_session_is_discarded_on_drop() {
        let registry = SessionRegistry::new();
        let k = key("g1", "u1");
        {
            let mut guard = registry.get_or_create(&k, "Alice").await;
            let session = guard.session_mut();
            session.choose_rating(Rating::new(5).unwrap()).unwrap();
            let comment =
                Comment::new("Great service, very happy", CommentBounds::default()).unwrap();
            session.submit_comment(comment).unwrap();
            session.select_product("Widget").unwrap();
        }

        assert_eq!(registry.get(&k).await.unwrap_err(), ReviewError::SessionExpired);
        assert!(registry.is_empty().await);
        let guard = registry.get_or_create(&k, "Alice").await;
        assert_eq!(guard.session().step(), ReviewStep::Rating);
    }

    #[tokio::test]
    async fn display_name_is_kept_from_first_creation() {
        let registry = SessionRegistry::new();
        let k = key("g1", "u1");
        drop(registry.get_or_create(&k, "Alice").await);
        let guard = registry.get_or_create(&k, "Renamed").await;
        assert_eq!(guard.session().display_name(), "Alice");
    }

    #[tokio::test]
    async fn finish_removes_the_key() {
        let registry = SessionRegistry::new();
        let k = key("g1", "u1");
        let guard = registry.get_or_create(&k, "Alice").await;
        guard.finish().await;
        assert!(registry.get(&k).await.is_err());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn delete_twice_is_a_no_op() {
        let registry = SessionRegistry::new();
        let k = key("g1", "u1");
        drop(registry.get_or_create(&k, "Alice").await);

        registry.delete(&k).await;
        registry.delete(&k).await;
        assert!(registry.get(&k).await.is_err());
    }

    #[tokio::test]
    async fn same_user_in_two_guilds_has_two_sessions() {
        let registry = SessionRegistry::new();
        {
            let mut a = registry.get_or_create(&key("g1", "u1"), "Alice").await;
            a.session_mut().choose_rating(Rating::new(1).unwrap()).unwrap();
        }
        {
            let mut b = registry.get_or_create(&key("g2", "u1"), "Alice").await;
            b.session_mut().choose_rating(Rating::new(5).unwrap()).unwrap();
        }
        let a = registry.get(&key("g1", "u1")).await.unwrap();
        let b = registry.get(&key("g2", "u1")).await.unwrap();
        assert_eq!(a.session().rating().unwrap().value(), 1);
        assert_eq!(b.session().rating().unwrap().value(), 5);
    }

    #[tokio::test]
    async fn same_key_waits_for_the_holder_and_sees_its_writes() {
        let registry = SessionRegistry::new();
        let k = key("g1", "u1");
        let mut first = registry.get_or_create(&k, "Alice").await;

        let waiter = {
            let registry = registry.clone();
            let k = k.clone();
            tokio::spawn(async move {
                let guard = registry.get(&k).await.unwrap();
                guard.session().step()
            })
        };

        tokio::time::sleep(StdDuration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        first
            .session_mut()
            .choose_rating(Rating::new(3).unwrap())
            .unwrap();
        first
            .session_mut()
            .submit_comment(Comment::new("Pretty decent overall", CommentBounds::default()).unwrap())
            .unwrap();
        drop(first);

        assert_eq!(waiter.await.unwrap(), ReviewStep::Product);
    }

    #[tokio::test]
    async fn waiter_sees_expired_after_holder_finishes() {
        let registry = SessionRegistry::new();
        let k = key("g1", "u1");
        let first = registry.get_or_create(&k, "Alice").await;

        let waiter = {
            let registry = registry.clone();
            let k = k.clone();
            tokio::spawn(async move { registry.get(&k).await.map(|_| ()) })
        };

        tokio::time::sleep(StdDuration::from_millis(20)).await;
        first.finish().await;

        assert_eq!(waiter.await.unwrap(), Err(ReviewError::SessionExpired));
    }

    #[tokio::test]
    async fn get_or_create_after_concurrent_finish_starts_fresh() {
        let registry = SessionRegistry::new();
        let k = key("g1", "u1");
        let mut first = registry.get_or_create(&k, "Alice").await;
        first
            .session_mut()
            .choose_rating(Rating::new(2).unwrap())
            .unwrap();

        let waiter = {
            let registry = registry.clone();
            let k = k.clone();
            tokio::spawn(async move {
                let guard = registry.get_or_create(&k, "Alice").await;
                (guard.session().step(), guard.session().rating())
            })
        };

        tokio::time::sleep(StdDuration::from_millis(20)).await;
        first.finish().await;

        assert_eq!(waiter.await.unwrap(), (ReviewStep::Rating, None));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn evict_idle_skips_fresh_and_locked_sessions() {
        let registry = SessionRegistry::new();
        drop(registry.get_or_create(&key("g1", "idle"), "Idle").await);
        let busy = registry.get_or_create(&key("g1", "busy"), "Busy").await;

        assert_eq!(registry.evict_idle(Duration::hours(1)).await, 0);
        assert_eq!(registry.evict_idle(Duration::zero() - Duration::seconds(1)).await, 1);

        assert!(registry.get(&key("g1", "idle")).await.is_err());
        drop(busy);
        assert!(registry.get(&key("g1", "busy")).await.is_ok());
    }
}
