use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{SessionSnapshot, SessionState};

/// Session slot shared between the dispatch thread and the render thread.
///
/// Writers hold the write lock for a whole handler, so readers never see a
/// chip count without its matching timestamp. The slot is empty before start
/// and after shutdown; every operation on an empty slot is a no-op.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<Option<SessionState>>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, state: SessionState) {
        *self.write() = Some(state);
    }

    pub fn clear(&self) {
        *self.write() = None;
    }

    pub fn is_installed(&self) -> bool {
        self.read().is_some()
    }

    /// Mutate the session under one write lock. Returns `None` when no session
    /// is installed.
    pub fn update<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        self.write().as_mut().map(f)
    }

    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.read().as_ref().map(SessionState::snapshot)
    }

    // Fields are assigned whole, so a poisoned lock still holds a valid session.
    fn read(&self) -> RwLockReadGuard<'_, Option<SessionState>> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<SessionState>> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_slot_is_noop() {
        let shared = SharedSession::new();
        assert!(!shared.is_installed());
        assert_eq!(shared.update(|s| s.total_chipped()), None);
        assert_eq!(shared.snapshot(), None);
    }

    #[test]
    fn test_clones_share_one_session() {
        let shared = SharedSession::new();
        shared.install(SessionState::new());
        let reader = shared.clone();

        let now = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        shared.update(|s| s.record_chip(now));

        let snapshot = reader.snapshot().unwrap();
        assert_eq!(snapshot.total_chipped, 1);
        assert_eq!(snapshot.last_activity_at, Some(now));

        shared.clear();
        assert_eq!(reader.snapshot(), None);
    }
}
