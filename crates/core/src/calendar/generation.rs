//! Generation token allocation

/// Monotonic counter identifying the most recently issued fetch.
///
/// Zero means "nothing issued in this session"; the first request of a
/// session is generation 1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationCounter {
    latest: u64,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next generation and make it current.
    pub fn advance(&mut self) -> u64 {
        self.latest = self.latest.saturating_add(1);
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation != 0 && generation == self.latest
    }

    /// Back to zero for the next session.
    pub fn reset(&mut self) {
        self.latest = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_strictly() {
        let mut counter = GenerationCounter::new();
        let mut previous = counter.latest();
        for _ in 0..50 {
            let next = counter.advance();
            assert!(next > previous);
            assert!(counter.is_current(next));
            assert!(!counter.is_current(previous));
            previous = next;
        }
    }

    #[test]
    fn zero_is_never_current() {
        let counter = GenerationCounter::new();
        assert!(!counter.is_current(0));
    }

    #[test]
    fn reset_restarts_at_one() {
        let mut counter = GenerationCounter::new();
        counter.advance();
        counter.advance();
        counter.reset();
        assert_eq!(counter.latest(), 0);
        assert_eq!(counter.advance(), 1);
    }
}
