// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, FixedOffset};
use once_cell::sync::Lazy;
use scriptorium_core::application::ports::time::Clock;
use std::sync::Mutex;

/// テスト用の固定タイムスタンプ (+07:00)
static FIXED_NOW: Lazy<DateTime<FixedOffset>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T09:00:00+07:00")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
});

/// 決定論的なタイムスタンプを返す
pub fn fixed_now() -> DateTime<FixedOffset> {
    *FIXED_NOW
}

/// 手動で進められる時計
pub struct FixedClock {
    now: Mutex<DateTime<FixedOffset>>,
}

impl FixedClock {
    pub fn new() -> Self {
        Self::at(fixed_now())
    }

    pub fn at(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock().unwrap()
    }
}
