//! Startup splash overlay
//!
//! Four timed steps: fade the content in, hold while the loading bar fills,
//! fade the whole overlay out, remove it. The overlay covers the main menu
//! with an opaque background so the menu only shows through the fade-out.

use egui::{Align2, Context, FontId, Pos2, Rect, Sense, Stroke};
use std::time::Duration;
use tradecore::animation::{progress, Easing, Fade};
use tradecore::theme::TradeColors;
use tradecore::{Sequence, Step};

use crate::config::SplashConfig;

/// Loading dots advance this often.
const DOT_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    FadeIn,
    Hold,
    FadeOut,
    Done,
}

/// Index of the fade-out step, the target when the splash is skipped.
const FADE_OUT_STEP: usize = 2;

#[derive(Debug, Clone)]
pub struct Splash {
    sequence: Sequence<SplashPhase>,
    phase: SplashPhase,
    config: SplashConfig,
    elapsed: Duration,
    fade_in: Fade,
    fade_out: Fade,
}

impl Splash {
    pub fn new(config: SplashConfig) -> Self {
        if !config.enabled {
            return Self::finished(config);
        }
        let sequence = Sequence::new(vec![
            Step::immediately(SplashPhase::FadeIn),
            Step::new(config.fade_in(), SplashPhase::Hold),
            Step::new(config.hold(), SplashPhase::FadeOut),
            Step::new(config.fade_out(), SplashPhase::Done),
        ]);
        let mut splash = Self {
            sequence,
            phase: SplashPhase::FadeIn,
            fade_in: Fade::fade_in(config.fade_in()),
            fade_out: Fade::fade_out(config.fade_out()),
            config,
            elapsed: Duration::ZERO,
        };
        splash.update(Duration::ZERO);
        splash
    }

    /// A splash that is already gone.
    pub fn finished(config: SplashConfig) -> Self {
        Self {
            sequence: Sequence::new(Vec::new()),
            phase: SplashPhase::Done,
            fade_in: Fade::fade_in(Duration::ZERO),
            fade_out: Fade::fade_out(Duration::ZERO),
            config,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance by the frame delta. Returns true if the phase changed.
    pub fn update(&mut self, dt: Duration) -> bool {
        if self.sequence.is_finished() {
            return false;
        }
        self.elapsed += dt;
        let fired = self.sequence.advance(dt);
        let changed = fired.last().is_some_and(|p| *p != self.phase);
        for phase in fired {
            tracing::debug!(?phase, "splash phase");
            self.phase = phase;
        }
        let in_phase = self.sequence.since_last_step();
        match self.phase {
            SplashPhase::FadeIn => self.fade_in.set_elapsed(in_phase),
            SplashPhase::FadeOut => self.fade_out.set_elapsed(in_phase),
            SplashPhase::Hold | SplashPhase::Done => {}
        }
        changed
    }

    /// Jump straight to the fade-out. No effect once fading out.
    pub fn skip(&mut self) {
        if matches!(self.phase, SplashPhase::FadeIn | SplashPhase::Hold) {
            tracing::debug!("splash skipped");
            self.sequence.jump_to(FADE_OUT_STEP);
            self.update(Duration::ZERO);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.phase != SplashPhase::Done
    }

    /// Opacity of the logo and loading indicators.
    pub fn content_opacity(&self) -> f32 {
        match self.phase {
            SplashPhase::FadeIn => self.fade_in.value(),
            _ => 1.0,
        }
    }

    /// Opacity of the whole overlay, background included.
    pub fn overlay_opacity(&self) -> f32 {
        match self.phase {
            SplashPhase::FadeIn | SplashPhase::Hold => 1.0,
            SplashPhase::FadeOut => self.fade_out.value(),
            SplashPhase::Done => 0.0,
        }
    }

    /// Loading bar fill. Starts with the splash and fills over the hold
    /// duration.
    pub fn loading_progress(&self) -> f32 {
        match self.phase {
            SplashPhase::FadeIn | SplashPhase::Hold => {
                Easing::EaseInOut.apply(progress(self.elapsed, self.config.hold()))
            }
            SplashPhase::FadeOut | SplashPhase::Done => 1.0,
        }
    }

    pub fn loading_dots(&self) -> u8 {
        loading_dots(self.elapsed)
    }

    /// Draw the overlay on top of everything. Clicking it skips ahead.
    pub fn show(&mut self, ctx: &Context) {
        if !self.is_visible() {
            return;
        }
        let overlay = self.overlay_opacity();
        let content = self.content_opacity() * overlay;
        let screen = ctx.screen_rect();

        let clicked = egui::Area::new(egui::Id::new("splash_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let response = ui.allocate_rect(screen, Sense::click());
                let painter = ui.painter();
                painter.rect_filled(screen, 0.0, TradeColors::white_alpha(overlay));

                let ink = TradeColors::black_alpha(content);
                let center_x = screen.center().x;
                let logo_y = screen.center().y - 40.0;
                painter.text(
                    Pos2::new(center_x, logo_y),
                    Align2::CENTER_CENTER,
                    "TradeBuilt",
                    FontId::proportional(40.0),
                    ink,
                );
                painter.text(
                    Pos2::new(center_x, logo_y + 34.0),
                    Align2::CENTER_CENTER,
                    "HVAC field calculators",
                    FontId::proportional(14.0),
                    ink,
                );

                // Loading bar
                let bar = Rect::from_center_size(
                    Pos2::new(center_x, logo_y + 80.0),
                    egui::vec2((screen.width() - 80.0).min(280.0), 8.0),
                );
                painter.rect_stroke(bar, 0.0, Stroke::new(1.0, ink));
                let fill_width = (bar.width() * self.loading_progress()).max(8.0);
                painter.rect_filled(
                    Rect::from_min_size(bar.min, egui::vec2(fill_width, bar.height())),
                    0.0,
                    ink,
                );

                // "Loading" plus three dots, lit up to the current step
                let label_pos = Pos2::new(center_x - 12.0, bar.max.y + 18.0);
                painter.text(label_pos, Align2::RIGHT_CENTER, "Loading", FontId::proportional(12.0), ink);
                let dots = self.loading_dots();
                for i in 0..3u8 {
                    let dot_ink = if i < dots { ink } else { TradeColors::black_alpha(content * 0.2) };
                    painter.circle_filled(
                        Pos2::new(label_pos.x + 6.0 + f32::from(i) * 7.0, label_pos.y + 3.0),
                        2.0,
                        dot_ink,
                    );
                }
                response.clicked()
            })
            .inner;

        if clicked {
            self.skip();
        }
    }
}

#[cfg(test)]
impl Splash {
    pub fn phase(&self) -> SplashPhase {
        self.phase
    }
}

/// Lit dot count: none for the first half second, then 1, 2, 3, 1, ...
pub fn loading_dots(elapsed: Duration) -> u8 {
    let ticks = elapsed.as_millis() / DOT_INTERVAL.as_millis();
    if ticks == 0 {
        0
    } else {
        ((ticks - 1) % 3 + 1) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_four_phase_timeline() {
        let mut splash = Splash::new(SplashConfig::default());
        assert_eq!(splash.phase(), SplashPhase::FadeIn);
        assert!(approx(splash.content_opacity(), 0.0));
        assert!(approx(splash.overlay_opacity(), 1.0));

        splash.update(ms(500));
        assert!(approx(splash.content_opacity(), 0.5));

        assert!(splash.update(ms(500)));
        assert_eq!(splash.phase(), SplashPhase::Hold);
        assert!(approx(splash.content_opacity(), 1.0));

        splash.update(ms(2999));
        assert_eq!(splash.phase(), SplashPhase::Hold);
        assert!(approx(splash.overlay_opacity(), 1.0));

        splash.update(ms(1));
        assert_eq!(splash.phase(), SplashPhase::FadeOut);
        assert!(approx(splash.overlay_opacity(), 1.0));

        splash.update(ms(500));
        assert!(approx(splash.overlay_opacity(), 0.5));
        assert!(splash.is_visible());

        splash.update(ms(500));
        assert_eq!(splash.phase(), SplashPhase::Done);
        assert!(approx(splash.overlay_opacity(), 0.0));
        assert!(!splash.is_visible());
    }

    #[test]
    fn test_one_big_frame_finishes() {
        let mut splash = Splash::new(SplashConfig::default());
        assert!(splash.update(ms(10_000)));
        assert_eq!(splash.phase(), SplashPhase::Done);
        assert!(!splash.update(ms(10_000)));
    }

    #[test]
    fn test_skip_starts_fade_out() {
        let mut splash = Splash::new(SplashConfig::default());
        splash.update(ms(300));
        splash.skip();
        assert_eq!(splash.phase(), SplashPhase::FadeOut);
        assert!(approx(splash.overlay_opacity(), 1.0));
        splash.update(ms(1000));
        assert_eq!(splash.phase(), SplashPhase::Done);
    }

    #[test]
    fn test_skip_during_fade_out_is_ignored() {
        let mut splash = Splash::new(SplashConfig::default());
        splash.update(ms(4500));
        splash.skip();
        assert_eq!(splash.phase(), SplashPhase::FadeOut);
        splash.update(ms(500));
        assert_eq!(splash.phase(), SplashPhase::Done);
    }

    #[test]
    fn test_disabled_splash() {
        let config = SplashConfig { enabled: false, ..SplashConfig::default() };
        let splash = Splash::new(config);
        assert!(!splash.is_visible());
        assert!(approx(splash.overlay_opacity(), 0.0));
    }

    #[test]
    fn test_loading_bar_fills_during_hold() {
        let mut splash = Splash::new(SplashConfig::default());
        assert!(approx(splash.loading_progress(), 0.0));
        splash.update(ms(1500));
        assert!(approx(splash.loading_progress(), 0.5));
        splash.update(ms(1500));
        assert!(approx(splash.loading_progress(), 1.0));
    }

    #[test]
    fn test_loading_dots_cycle() {
        assert_eq!(loading_dots(ms(0)), 0);
        assert_eq!(loading_dots(ms(499)), 0);
        assert_eq!(loading_dots(ms(500)), 1);
        assert_eq!(loading_dots(ms(1000)), 2);
        assert_eq!(loading_dots(ms(1500)), 3);
        assert_eq!(loading_dots(ms(2000)), 1);
        assert_eq!(loading_dots(ms(2600)), 2);
    }
}
