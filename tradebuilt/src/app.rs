//! TradeBuilt application shell: menu bar, navigation, splash, about

use egui::{Context, Key};
use std::time::{Duration, Instant};
use tradecore::repaint::RepaintController;
use tradecore::theme::{consume_zoom_keys, menu_bar, TradeColors};
use tradecore::widgets::{back_button, status_bar};

use crate::catalog::CalculatorSection;
use crate::config::{AppConfig, ConfigSource};
use crate::nav::{Navigator, PendingPress, PressOutcome};
use crate::screens::{FrameContext, Route, Screen, ScreenAction};
use crate::splash::Splash;

/// Frame deltas above this are clamped so a stalled window does not
/// skip whole animation phases on wake-up.
const MAX_FRAME_DT: Duration = Duration::from_millis(250);

pub struct TradeBuiltApp {
    sections: Vec<CalculatorSection>,
    nav: Navigator<Screen>,
    pending: Option<PendingPress<Route>>,
    splash: Splash,
    source: ConfigSource,
    last_update: Instant,
    show_about: bool,
    repaint: RepaintController,
}

impl TradeBuiltApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, source: ConfigSource) -> Self {
        Self::with_config(config, source)
    }

    fn with_config(config: AppConfig, source: ConfigSource) -> Self {
        Self {
            sections: config.sections,
            nav: Navigator::new(Screen::MainMenu),
            pending: None,
            splash: Splash::new(config.splash),
            source,
            last_update: Instant::now(),
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn frame_dt(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now.duration_since(self.last_update).min(MAX_FRAME_DT);
        self.last_update = now;
        dt
    }

    fn open(&mut self, route: Route) {
        let screen = Screen::open(route, &self.sections);
        tracing::debug!(screen = screen.title(), depth = self.nav.depth() + 1, "navigate");
        self.nav.push(screen);
    }

    fn go_back(&mut self) {
        if let Some(screen) = self.nav.pop() {
            tracing::debug!(screen = screen.title(), depth = self.nav.depth(), "back");
        }
    }

    /// Start a press animation unless one is already running.
    fn handle_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::Press { button, target } => {
                if self.pending.is_none() {
                    self.pending = Some(PendingPress::new(self.nav.current_token(), button, target));
                }
            }
        }
    }

    fn advance_pending(&mut self, dt: Duration) {
        let Some(press) = self.pending.as_mut() else {
            return;
        };
        match press.advance(dt, self.nav.current_token()) {
            PressOutcome::Pending => {}
            PressOutcome::Navigate(route) => {
                self.pending = None;
                self.open(route);
            }
            PressOutcome::Stale => {
                tracing::debug!(button = press.button(), "screen left before press finished, ignoring");
                self.pending = None;
            }
        }
    }

    /// Escape peels back one layer: splash, about, screen overlay, screen.
    fn handle_escape(&mut self) {
        if self.splash.is_visible() {
            self.splash.skip();
        } else if self.show_about {
            self.show_about = false;
        } else if !self.nav.current_mut().dismiss_overlay() {
            self.go_back();
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_zoom_keys(ctx);
        let (escape, backspace) = ctx.input(|i| (i.key_pressed(Key::Escape), i.key_pressed(Key::Backspace)));
        let text_focused = ctx.memory(|m| m.focused().is_some());
        if escape {
            self.handle_escape();
        } else if backspace && !text_focused && !self.splash.is_visible() {
            self.go_back();
        }
    }

    fn breadcrumb(&self) -> String {
        self.nav
            .screens()
            .map(|s| s.title().to_lowercase())
            .collect::<Vec<_>>()
            .join(" > ")
    }

    fn render_about(&mut self, ctx: &Context) {
        let screen_rect = ctx.screen_rect();
        let max_h = (screen_rect.height() - 40.0).max(120.0);
        let source = match &self.source {
            ConfigSource::Defaults => "built-in".to_string(),
            ConfigSource::File(path) => path.display().to_string(),
        };
        let resp = egui::Window::new("about TradeBuilt")
            .collapsible(false)
            .resizable(false)
            .default_width(280.0)
            .max_height(max_h)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(max_h - 50.0).show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("TradeBuilt");
                        ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(4.0);
                        ui.label("HVAC field calculators");
                    });
                    ui.add_space(4.0);
                    ui.separator();
                    ui.add_space(2.0);
                    ui.label(format!("catalog: {}", source));
                    ui.add_space(2.0);
                    ui.label("keys:");
                    ui.label("  esc: close / back");
                    ui.label("  backspace: back");
                });
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
        if let Some(r) = &resp {
            tradecore::dither::draw_window_shadow(ctx, r.response.rect);
        }
    }
}

impl eframe::App for TradeBuiltApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        let dt = self.frame_dt();
        tracing::trace!(frame = self.repaint.frame(), reason = ?self.repaint.reason(), "update");

        self.splash.update(dt);
        self.advance_pending(dt);
        self.handle_keys(ctx);

        let mut go_back = false;
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                if self.nav.can_go_back() && back_button(ui).clicked() {
                    go_back = true;
                }
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.strong(self.nav.current().title());
                });
            });
        });
        if go_back {
            self.go_back();
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar(ui, &self.breadcrumb());
        });

        let pressed = self
            .pending
            .as_ref()
            .map(|p| (p.button().to_string(), p.pressed_amount()));
        let action = egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(TradeColors::WHITE).inner_margin(egui::Margin::same(12.0)))
            .show(ctx, |ui| {
                let frame = FrameContext {
                    sections: &self.sections,
                    pressed: pressed.as_ref().map(|(key, amount)| (key.as_str(), *amount)),
                };
                let screen = self.nav.current_mut();
                tradecore::safety::catch_or(None, || screen.show(ui, &frame))
            })
            .inner;
        if let Some(action) = action {
            self.handle_action(action);
        }

        if self.show_about {
            self.render_about(ctx);
        }

        self.splash.show(ctx);

        self.repaint.keep_animating(
            self.splash.is_visible() || self.pending.is_some() || self.nav.current().is_animating(),
        );
        self.repaint.end_frame(ctx);
    }
}
