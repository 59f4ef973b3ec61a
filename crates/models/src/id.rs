use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use configs::IdStrategy;
use uuid::Uuid;

/// Issues ids for newly added catalog items.
///
/// The timestamp strategy keeps the historical format (epoch milliseconds as
/// a decimal string) but never issues the same value twice: when the clock
/// has not moved past the last id, the last id plus one is used instead.
#[derive(Debug)]
pub struct IdGenerator {
    strategy: IdStrategy,
    last_millis: AtomicI64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy, last_millis: AtomicI64::new(i64::MIN) }
    }

    pub fn next_id(&self) -> String {
        match self.strategy {
            IdStrategy::Timestamp => self.next_millis(Utc::now().timestamp_millis()).to_string(),
            IdStrategy::Uuid => Uuid::new_v4().to_string(),
        }
    }

    fn next_millis(&self, now: i64) -> i64 {
        let mut last = self.last_millis.load(Ordering::Relaxed);
        loop {
            let candidate = if now > last { now } else { last + 1 };
            match self.last_millis.compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_tick_ids_are_bumped() {
        let ids = IdGenerator::new(IdStrategy::Timestamp);
        assert_eq!(ids.next_millis(1_000), 1_000);
        assert_eq!(ids.next_millis(1_000), 1_001);
        assert_eq!(ids.next_millis(999), 1_002);
        assert_eq!(ids.next_millis(5_000), 5_000);
    }

    #[test]
    fn timestamp_ids_are_numeric_and_unique_in_a_burst() {
        let ids = IdGenerator::new(IdStrategy::Timestamp);
        let issued: Vec<String> = (0..500).map(|_| ids.next_id()).collect();
        assert!(issued.iter().all(|id| id.parse::<i64>().is_ok()));
        let unique: HashSet<_> = issued.iter().collect();
        assert_eq!(unique.len(), issued.len());
    }

    #[test]
    fn uuid_ids_parse_as_uuid() {
        let ids = IdGenerator::new(IdStrategy::Uuid);
        let id = ids.next_id();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_ne!(id, ids.next_id());
    }
}
