//! Timed step sequences
//!
//! A [`Sequence`] is a linear list of `{delay, action}` pairs. Each step's
//! delay is measured from the moment the previous step fired (the first
//! step's delay from the start). The owner advances the sequence with the
//! frame delta time and receives the actions that became due, in order.
//!
//! Sequences never call back into the owner. Whatever reacts to a fired
//! action decides for itself whether that action still applies, which is
//! what lets a screen that has already been left ignore a late step.

use std::time::Duration;

/// One entry of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<A> {
    /// Time after the previous step before this one fires.
    pub delay: Duration,
    pub action: A,
}

impl<A> Step<A> {
    pub fn new(delay: Duration, action: A) -> Self {
        Self { delay, action }
    }

    /// A step that fires as soon as the sequence is advanced.
    pub fn immediately(action: A) -> Self {
        Self::new(Duration::ZERO, action)
    }
}

#[derive(Debug, Clone)]
pub struct Sequence<A> {
    steps: Vec<Step<A>>,
    /// Index of the next step to fire.
    next: usize,
    /// Time accumulated since the last step fired (or since the start).
    since_last: Duration,
}

impl<A: Clone> Sequence<A> {
    pub fn new(steps: Vec<Step<A>>) -> Self {
        Self {
            steps,
            next: 0,
            since_last: Duration::ZERO,
        }
    }

    /// Advance by `dt` and return every action that became due.
    ///
    /// Several steps can fire in one call when `dt` spans their delays;
    /// leftover time carries into the next step.
    pub fn advance(&mut self, dt: Duration) -> Vec<A> {
        self.since_last += dt;
        let mut fired = Vec::new();
        while let Some(step) = self.steps.get(self.next) {
            if self.since_last < step.delay {
                break;
            }
            self.since_last -= step.delay;
            fired.push(step.action.clone());
            self.next += 1;
        }
        fired
    }

    /// Make the step at `index` fire on the next [`advance`](Self::advance),
    /// skipping everything before it. Out-of-range indices finish the
    /// sequence.
    pub fn jump_to(&mut self, index: usize) {
        match self.steps.get(index) {
            Some(step) => {
                self.next = index;
                self.since_last = step.delay;
            }
            None => {
                self.next = self.steps.len();
                self.since_last = Duration::ZERO;
            }
        }
    }

    /// Time since the most recent step fired.
    pub fn since_last_step(&self) -> Duration {
        self.since_last
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn abc() -> Sequence<char> {
        Sequence::new(vec![
            Step::immediately('a'),
            Step::new(ms(100), 'b'),
            Step::new(ms(200), 'c'),
        ])
    }

    #[test]
    fn test_delays_are_relative() {
        let mut seq = abc();
        assert_eq!(seq.advance(Duration::ZERO), vec!['a']);
        assert_eq!(seq.advance(ms(99)), Vec::<char>::new());
        assert_eq!(seq.advance(ms(1)), vec!['b']);
        assert_eq!(seq.advance(ms(150)), Vec::<char>::new());
        assert_eq!(seq.since_last_step(), ms(150));
        assert_eq!(seq.advance(ms(50)), vec!['c']);
        assert!(seq.is_finished());
    }

    #[test]
    fn test_large_dt_fires_in_order() {
        let mut seq = abc();
        assert_eq!(seq.advance(ms(1000)), vec!['a', 'b', 'c']);
        assert_eq!(seq.since_last_step(), ms(700));
    }

    #[test]
    fn test_finished_sequence_fires_nothing() {
        let mut seq = abc();
        seq.advance(ms(300));
        assert!(seq.is_finished());
        assert!(seq.advance(ms(10_000)).is_empty());
    }

    #[test]
    fn test_leftover_time_carries_over() {
        let mut seq = abc();
        assert_eq!(seq.advance(ms(150)), vec!['a', 'b']);
        assert_eq!(seq.since_last_step(), ms(50));
        assert_eq!(seq.advance(ms(150)), vec!['c']);
    }

    #[test]
    fn test_jump_to_fires_target_next() {
        let mut seq = abc();
        seq.advance(Duration::ZERO);
        seq.jump_to(2);
        assert_eq!(seq.advance(Duration::ZERO), vec!['c']);
        assert!(seq.is_finished());
    }

    #[test]
    fn test_jump_past_end_finishes() {
        let mut seq = abc();
        seq.jump_to(10);
        assert!(seq.is_finished());
        assert!(seq.advance(ms(500)).is_empty());
    }

    #[test]
    fn test_empty_sequence_is_finished() {
        let mut seq = Sequence::<u8>::new(Vec::new());
        assert!(seq.is_finished());
        assert!(seq.advance(ms(100)).is_empty());
    }
}
