//! Navigation stack and button press feedback
//!
//! Every push hands out a fresh [`ScreenToken`]. Anything scheduled from a
//! screen (a press animation ending in navigation) remembers the token it
//! was started under and is dropped if that screen is no longer on top
//! when the step fires.

use std::time::Duration;
use tradecore::animation::{progress, Easing};
use tradecore::{Sequence, Step};

/// Identity of one visit to one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenToken(u64);

#[derive(Debug)]
struct StackEntry<S> {
    token: ScreenToken,
    screen: S,
}

/// A stack of screens. The bottom screen (the root) is never popped.
#[derive(Debug)]
pub struct Navigator<S> {
    stack: Vec<StackEntry<S>>,
    next_token: u64,
}

impl<S> Navigator<S> {
    pub fn new(root: S) -> Self {
        let mut nav = Self { stack: Vec::new(), next_token: 0 };
        nav.push(root);
        nav
    }

    pub fn push(&mut self, screen: S) -> ScreenToken {
        let token = ScreenToken(self.next_token);
        self.next_token += 1;
        self.stack.push(StackEntry { token, screen });
        token
    }

    /// Pop the top screen. Returns `None` at the root.
    pub fn pop(&mut self) -> Option<S> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop().map(|entry| entry.screen)
    }

    pub fn current(&self) -> &S {
        &self.top().screen
    }

    pub fn current_mut(&mut self) -> &mut S {
        let last = self.stack.len() - 1;
        &mut self.stack[last].screen
    }

    pub fn current_token(&self) -> ScreenToken {
        self.top().token
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Screens from root to top.
    pub fn screens(&self) -> impl Iterator<Item = &S> {
        self.stack.iter().map(|entry| &entry.screen)
    }

    fn top(&self) -> &StackEntry<S> {
        // `new` pushes the root and `pop` never removes it.
        &self.stack[self.stack.len() - 1]
    }
}

/// Pressed for 220 ms, released over 120 ms, navigate at 360 ms.
pub const PRESS_HOLD: Duration = Duration::from_millis(220);
pub const PRESS_RELEASE: Duration = Duration::from_millis(120);
const PRESS_SETTLE: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressStep {
    Release,
    Navigate,
}

/// A pressed button waiting to navigate to `target`.
#[derive(Debug, Clone)]
pub struct PendingPress<T> {
    origin: ScreenToken,
    button: String,
    target: T,
    sequence: Sequence<PressStep>,
    released: bool,
}

/// What happened when a press was advanced.
#[derive(Debug, Clone, PartialEq)]
pub enum PressOutcome<T> {
    /// Still animating.
    Pending,
    /// Time to navigate.
    Navigate(T),
    /// The origin screen is gone; nothing to do.
    Stale,
}

impl<T: Clone> PendingPress<T> {
    pub fn new(origin: ScreenToken, button: impl Into<String>, target: T) -> Self {
        Self {
            origin,
            button: button.into(),
            target,
            sequence: Sequence::new(vec![
                Step::new(PRESS_HOLD, PressStep::Release),
                Step::new(PRESS_RELEASE + PRESS_SETTLE, PressStep::Navigate),
            ]),
            released: false,
        }
    }

    pub fn button(&self) -> &str {
        &self.button
    }

    /// Advance the animation. `current` is the token of the screen on top.
    pub fn advance(&mut self, dt: Duration, current: ScreenToken) -> PressOutcome<T> {
        for step in self.sequence.advance(dt) {
            match step {
                PressStep::Release => self.released = true,
                PressStep::Navigate => {
                    if current != self.origin {
                        return PressOutcome::Stale;
                    }
                    return PressOutcome::Navigate(self.target.clone());
                }
            }
        }
        PressOutcome::Pending
    }

    /// Visual press amount: 1.0 while held, easing back to 0.0 on release.
    pub fn pressed_amount(&self) -> f32 {
        if !self.released {
            return 1.0;
        }
        let t = progress(self.sequence.since_last_step(), PRESS_RELEASE);
        1.0 - Easing::EaseOut.apply(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_push_pop_tokens() {
        let mut nav = Navigator::new("menu");
        let root = nav.current_token();
        assert!(!nav.can_go_back());

        let list = nav.push("list");
        assert_ne!(list, root);
        assert_eq!(*nav.current(), "list");
        assert_eq!(nav.current_token(), list);

        assert_eq!(nav.pop(), Some("list"));
        assert_eq!(nav.current_token(), root);
        assert_eq!(nav.pop(), None);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_revisit_gets_new_token() {
        let mut nav = Navigator::new("menu");
        let first = nav.push("delta");
        nav.pop();
        let second = nav.push("delta");
        assert_ne!(first, second);
        assert_eq!(nav.current_token(), second);
    }

    #[test]
    fn test_press_navigates_at_360ms() {
        let nav = Navigator::new("menu");
        let token = nav.current_token();
        let mut press = PendingPress::new(token, "hvac", "list");

        assert_eq!(press.pressed_amount(), 1.0);
        assert_eq!(press.advance(ms(219), token), PressOutcome::Pending);
        assert_eq!(press.advance(ms(1), token), PressOutcome::Pending);
        assert_eq!(press.pressed_amount(), 1.0);

        press.advance(ms(60), token);
        let mid = press.pressed_amount();
        assert!(mid > 0.0 && mid < 1.0);

        assert_eq!(press.advance(ms(79), token), PressOutcome::Pending);
        assert_eq!(press.advance(ms(1), token), PressOutcome::Navigate("list"));
    }

    #[test]
    fn test_press_released_fully_before_navigation() {
        let nav = Navigator::new("menu");
        let token = nav.current_token();
        let mut press = PendingPress::new(token, "hvac", "list");
        assert_eq!(press.advance(ms(340), token), PressOutcome::Pending);
        assert_eq!(press.pressed_amount(), 0.0);
    }

    #[test]
    fn test_press_from_dismissed_screen_is_stale() {
        let mut nav = Navigator::new("menu");
        let list = nav.push("list");
        let mut press = PendingPress::new(list, "delta", "delta");
        press.advance(ms(100), nav.current_token());
        nav.pop();
        assert_eq!(press.advance(ms(1000), nav.current_token()), PressOutcome::Stale);
    }

    #[test]
    fn test_screens_root_to_top() {
        let mut nav = Navigator::new(0);
        nav.push(1);
        nav.push(2);
        assert_eq!(nav.screens().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(nav.depth(), 3);
        assert!(nav.can_go_back());
    }
}
