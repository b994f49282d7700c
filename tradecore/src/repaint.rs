//! Repaint scheduling for TradeBuilt apps
//!
//! egui redraws everything every frame. Most of the time nothing on screen
//! moves, so the app should sleep until the next input event. The
//! exceptions are the splash overlay, button press feedback and the menu
//! laser line, which all need frames at a steady rate while they run.
//!
//! Apps call [`RepaintController::keep_animating`] each frame with whether
//! anything time-driven is still active; the controller turns that into
//! `request_repaint_after` calls at its interval.

use std::time::Duration;

/// Interval between frames while something animates (~30 fps).
const ANIMATION_INTERVAL: Duration = Duration::from_millis(33);

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame, always painted.
    Init,
    /// User input (pointer, key, scroll).
    Input,
    /// An animation asked for this frame.
    Animation,
}

/// Drop this into your app struct and call [`begin_frame`](Self::begin_frame)
/// at the top of `update()` and [`end_frame`](Self::end_frame) at the bottom.
#[derive(Debug)]
pub struct RepaintController {
    animating: bool,
    interval: Duration,
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            animating: false,
            interval: ANIMATION_INTERVAL,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Report whether anything time-driven is still running this frame.
    /// Latest call before [`end_frame`](Self::end_frame) wins.
    pub fn keep_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Call at the **start** of `update()`.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.raw_scroll_delta != egui::Vec2::ZERO
                || i.pointer.is_moving()
        });

        self.reason = if self.frame == 0 {
            RepaintReason::Init
        } else if had_input || !self.animating {
            RepaintReason::Input
        } else {
            RepaintReason::Animation
        };
    }

    /// Call at the **end** of `update()`. Schedules the next frame only
    /// while something is animating; otherwise egui sleeps until input.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        if self.animating {
            ctx.request_repaint_after(self.interval);
        }
    }
}
