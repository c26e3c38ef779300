use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::UserId;
use crate::store::state::UsersState;

/// Hands out ids for locally created users.
///
/// Ids are wall-clock milliseconds, bumped forward when two users are
/// created within the same millisecond or when the clock value is already
/// taken by a fetched record.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, existing: &UsersState) -> UserId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        self.next_from(now, existing)
    }

    fn next_from(&mut self, now_ms: u64, existing: &UsersState) -> UserId {
        let mut candidate = now_ms.max(self.last.saturating_add(1));
        while existing.contains(&UserId::Number(candidate)) {
            candidate = candidate.saturating_add(1);
        }
        self.last = candidate;
        UserId::Number(candidate)
    }
}
