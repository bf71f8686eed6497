use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Operator-facing session label. Carries no protocol meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionNumber(u64);

impl SessionNumber {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out session numbers starting at 1.
#[derive(Debug)]
pub struct SessionCounter {
    next: AtomicU64,
}

impl Default for SessionCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCounter {
    pub fn new() -> Self {
        Self { next: AtomicU64::new(1) }
    }

    pub fn next_number(&self) -> SessionNumber {
        SessionNumber(self.next.fetch_add(1, Ordering::Relaxed))
    }

    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed) - 1
    }
}
