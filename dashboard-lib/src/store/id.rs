//! Table config id generation

use chrono::Utc;

/// Hands out timestamp-derived ids that never repeat.
///
/// Ids are the current Unix time in milliseconds. Two calls within the same
/// millisecond (or after the clock steps back) get the previous id plus one.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id.
    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        let id = if now > self.last { now } else { self.last + 1 };
        self.last = id;
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sequential_ids_are_unique_and_increasing() {
        let mut ids = IdGenerator::new();
        let generated: Vec<i64> = (0..1000)
            .map(|_| ids.next_id().parse().unwrap())
            .collect();

        assert!(generated.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(generated.iter().collect::<HashSet<_>>().len(), 1000);
    }

    #[test]
    fn test_ids_track_wall_clock() {
        let before = Utc::now().timestamp_millis();
        let id: i64 = IdGenerator::new().next_id().parse().unwrap();
        assert!(id >= before);
    }
}
