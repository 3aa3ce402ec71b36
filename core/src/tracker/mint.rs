use crate::session::{RuneKind, SessionState};

/// Add a rune-creation notification to the session tallies.
///
/// Untracked item ids, non-positive quantities and mints outside an active
/// session are ignored. Never touches the activity timestamp.
pub fn record_rune_mint(session: &mut SessionState, item_id: i32, quantity: i32) -> Option<RuneKind> {
    let kind = RuneKind::from_item_id(item_id)?;
    if quantity <= 0 || !session.is_active() {
        return None;
    }

    session.add_runes(kind, quantity as u64);
    tracing::debug!(?kind, quantity, total = session.runes_created(kind), "runes minted");
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_ids::item_id;
    use chrono::NaiveDate;

    fn active_session() -> SessionState {
        let mut session = SessionState::new();
        session.record_chip(
            NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        );
        session
    }

    #[test]
    fn test_mints_accumulate_per_kind() {
        let mut session = active_session();
        let before = session.last_activity_at();

        record_rune_mint(&mut session, item_id::SOUL_RUNE, 2);
        record_rune_mint(&mut session, item_id::BLOOD_RUNE, 1);
        record_rune_mint(&mut session, item_id::SOUL_RUNE, 3);

        assert_eq!(session.runes_created(RuneKind::Soul), 5);
        assert_eq!(session.runes_created(RuneKind::Blood), 1);
        assert_eq!(session.last_activity_at(), before);
        assert_eq!(session.total_chipped(), 1);
    }

    #[test]
    fn test_invalid_mints_are_ignored() {
        let mut session = active_session();

        assert_eq!(record_rune_mint(&mut session, item_id::SOUL_RUNE, 0), None);
        assert_eq!(record_rune_mint(&mut session, item_id::BLOOD_RUNE, -4), None);
        assert_eq!(record_rune_mint(&mut session, item_id::LAW_RUNE, 10), None);

        assert!(RuneKind::ALL.iter().all(|k| session.runes_created(*k) == 0));
    }

    #[test]
    fn test_mint_without_session_is_ignored() {
        let mut session = SessionState::new();
        assert_eq!(record_rune_mint(&mut session, item_id::SOUL_RUNE, 3), None);
        assert_eq!(session, SessionState::new());
    }
}
