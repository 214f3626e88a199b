/// Clamped step counter for the multi-step explanation sections.
///
/// One shape, instantiated per section with its own bound (RNN=3, LSTM=4,
/// Time Series=3). Steps are 1-based to match the on-screen "Step i of n"
/// label. No wraparound; re-entering a section gets a fresh walker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepWalker {
    current: usize,
    total: usize,
}

impl StepWalker {
    pub fn new(total: usize) -> Self {
        debug_assert!(total >= 1);
        Self { current: 1, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn next(&mut self) {
        if self.current < self.total {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    pub fn at_start(&self) -> bool {
        self.current == 1
    }

    pub fn at_end(&self) -> bool {
        self.current == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walker_clamps_at_both_bounds() {
        let mut w = StepWalker::new(3);
        let before = w;
        w.previous();
        assert_eq!(w, before, "previous at step 1 must be a no-op");

        w.next();
        w.next();
        assert_eq!(w.current(), 3);
        let before = w;
        w.next();
        assert_eq!(w, before, "next at the last step must be a no-op");
    }

    #[test]
    fn test_walker_never_leaves_range() {
        for total in [3usize, 4] {
            let mut w = StepWalker::new(total);
            for i in 0..50 {
                if i % 3 == 0 {
                    w.previous();
                } else {
                    w.next();
                }
                assert!(w.current() >= 1 && w.current() <= total);
            }
        }
    }

    #[test]
    fn test_reset_returns_to_step_one() {
        let mut w = StepWalker::new(4);
        w.next();
        w.next();
        w.reset();
        assert!(w.at_start());
        assert!(!w.at_end());
    }
}
