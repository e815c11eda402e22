use super::EntityId;

/// Генератор идентификаторов записей.
///
/// ID берётся из текущего времени в миллисекундах, но никогда не повторяется:
/// если часы не сдвинулись (или ушли назад), выдаётся `last + 1`.
/// После `i64::MAX` ID больше не выдаются.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: EntityId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Продолжить нумерацию после уже существующих ID
    pub fn starting_after(last: EntityId) -> Self {
        Self { last }
    }

    pub fn last(&self) -> EntityId {
        self.last
    }

    /// Выдать следующий ID для момента `now_millis`
    pub fn next_at(&mut self, now_millis: i64) -> Option<EntityId> {
        let id = now_millis.max(self.last.checked_add(1)?);
        self.last = id;
        Some(id)
    }

    /// Выдать следующий ID по системным часам
    pub fn next(&mut self) -> Option<EntityId> {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_gives_distinct_ids() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(1_700_000_000_000).unwrap();
        let b = ids.next_at(1_700_000_000_000).unwrap();
        let c = ids.next_at(1_700_000_000_000).unwrap();
        assert_eq!(a, 1_700_000_000_000);
        assert_eq!(b, a + 1);
        assert_eq!(c, a + 2);
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut ids = IdGenerator::starting_after(500);
        assert_eq!(ids.next_at(100), Some(501));
        assert_eq!(ids.next_at(1_000), Some(1_000));
        assert_eq!(ids.last(), 1_000);
    }

    #[test]
    fn test_wall_clock_ids_increase() {
        let mut ids = IdGenerator::new();
        let a = ids.next();
        let b = ids.next();
        assert!(a.is_some());
        assert!(b > a);
    }

    #[test]
    fn test_exhausted_after_max() {
        let mut ids = IdGenerator::starting_after(i64::MAX - 1);
        assert_eq!(ids.next_at(0), Some(i64::MAX));
        assert_eq!(ids.next_at(0), None);
        assert_eq!(ids.next(), None);
        assert_eq!(ids.last(), i64::MAX);
    }
}
