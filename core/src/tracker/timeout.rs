use chrono::{Duration, NaiveDateTime};
use runecraft_types::RunecraftConfig;

use crate::session::SessionState;

/// Inactivity window after which session stats reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTimeout {
    minutes: u32,
}

impl StatTimeout {
    /// Zero is clamped to one minute.
    pub fn from_minutes(minutes: u32) -> Self {
        Self {
            minutes: minutes.max(1),
        }
    }

    pub fn from_config(config: &RunecraftConfig) -> Self {
        if config.stat_timeout_clamped() {
            tracing::warn!(
                configured = config.stat_timeout,
                "stat timeout below one minute, clamping"
            );
        }
        Self::from_minutes(config.stat_timeout_minutes())
    }

    pub fn minutes(self) -> u32 {
        self.minutes
    }

    pub fn as_duration(self) -> Duration {
        Duration::minutes(i64::from(self.minutes))
    }
}

impl Default for StatTimeout {
    fn default() -> Self {
        Self::from_config(&RunecraftConfig::default())
    }
}

/// Reset the session if nothing was chipped within `timeout`.
///
/// Returns true when a reset happened. Callers gate this on the player being
/// logged in.
pub fn sweep_inactive_session(
    session: &mut SessionState,
    now: NaiveDateTime,
    timeout: StatTimeout,
) -> bool {
    let Some(last_activity) = session.last_activity_at() else {
        return false;
    };

    let idle = now.signed_duration_since(last_activity);
    if idle < timeout.as_duration() {
        return false;
    }

    tracing::info!(
        total_chipped = session.total_chipped(),
        idle_secs = idle.num_seconds(),
        "chipping session timed out, resetting stats"
    );
    session.reset();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::RuneKind;
    use chrono::NaiveDate;

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_idle_session_is_untouched() {
        let mut session = SessionState::new();
        assert!(!sweep_inactive_session(&mut session, t0(), StatTimeout::from_minutes(1)));
    }

    #[test]
    fn test_resets_exactly_at_timeout() {
        let mut session = SessionState::new();
        session.record_chip(t0());
        session.add_runes(RuneKind::Blood, 3);
        let timeout = StatTimeout::from_minutes(1);

        assert!(!sweep_inactive_session(&mut session, t0() + Duration::seconds(59), timeout));
        assert_eq!(session.total_chipped(), 1);

        assert!(sweep_inactive_session(&mut session, t0() + Duration::seconds(60), timeout));
        assert_eq!(session, SessionState::new());
    }

    #[test]
    fn test_timeout_clamps() {
        assert_eq!(StatTimeout::from_minutes(0).minutes(), 1);

        let config = RunecraftConfig {
            stat_timeout: -2,
            ..RunecraftConfig::default()
        };
        assert_eq!(StatTimeout::from_config(&config).minutes(), 1);
        assert_eq!(StatTimeout::default().minutes(), 5);
    }
}
