// src/application/ports/time.rs
use chrono::{DateTime, FixedOffset};

/// Source of the current instant, expressed in the service's configured offset.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}
