use chrono::NaiveDateTime;
use hashbrown::HashMap;
use phf::phf_map;
use serde::Serialize;

/// Rune kinds whose creation is tallied per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuneKind {
    Soul,
    Blood,
}

static RUNE_KINDS_BY_ITEM: phf::Map<i32, RuneKind> = phf_map! {
    566_i32 => RuneKind::Soul,
    565_i32 => RuneKind::Blood,
};

impl RuneKind {
    pub const ALL: [RuneKind; 2] = [RuneKind::Soul, RuneKind::Blood];

    pub fn from_item_id(item_id: i32) -> Option<Self> {
        RUNE_KINDS_BY_ITEM.get(&item_id).copied()
    }

    pub fn item_id(self) -> i32 {
        use crate::game_ids::item_id;
        match self {
            Self::Soul => item_id::SOUL_RUNE,
            Self::Blood => item_id::BLOOD_RUNE,
        }
    }
}

/// Counters for one dense-essence chipping session.
///
/// `last_activity_at`, `total_chipped` and `runes_created` are only ever
/// zeroed together by [`SessionState::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    last_activity_at: Option<NaiveDateTime>,
    total_chipped: u64,
    runes_created: HashMap<RuneKind, u64>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one chip at `now`.
    pub fn record_chip(&mut self, now: NaiveDateTime) {
        self.total_chipped += 1;
        // Never move backwards if the wall clock does
        self.last_activity_at = Some(match self.last_activity_at {
            Some(prev) if prev > now => prev,
            _ => now,
        });
    }

    pub fn add_runes(&mut self, kind: RuneKind, quantity: u64) {
        *self.runes_created.entry(kind).or_insert(0) += quantity;
    }

    pub fn reset(&mut self) {
        self.last_activity_at = None;
        self.total_chipped = 0;
        self.runes_created.clear();
    }

    pub fn is_active(&self) -> bool {
        self.last_activity_at.is_some()
    }

    pub fn last_activity_at(&self) -> Option<NaiveDateTime> {
        self.last_activity_at
    }

    pub fn total_chipped(&self) -> u64 {
        self.total_chipped
    }

    pub fn runes_created(&self, kind: RuneKind) -> u64 {
        self.runes_created.get(&kind).copied().unwrap_or(0)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            last_activity_at: self.last_activity_at,
            total_chipped: self.total_chipped,
            soul_runes: self.runes_created(RuneKind::Soul),
            blood_runes: self.runes_created(RuneKind::Blood),
        }
    }
}

/// Immutable copy of the session handed to readers outside the dispatch thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub last_activity_at: Option<NaiveDateTime>,
    pub total_chipped: u64,
    pub soul_runes: u64,
    pub blood_runes: u64,
}

impl SessionSnapshot {
    pub fn is_active(&self) -> bool {
        self.last_activity_at.is_some()
    }

    pub fn runes_created(&self, kind: RuneKind) -> u64 {
        match kind {
            RuneKind::Soul => self.soul_runes,
            RuneKind::Blood => self.blood_runes,
        }
    }
}
