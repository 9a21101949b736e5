use crate::application::ports::time::Clock;
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Wall clock reporting instants in a fixed, configured offset.
#[derive(Clone)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(Utc.fix())
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_uses_configured_offset() {
        let offset = FixedOffset::east_opt(7 * 3600).unwrap();
        let clock = SystemClock::new(offset);
        assert_eq!(*clock.now().offset(), offset);
    }
}
