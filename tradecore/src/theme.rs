//! TradeBuilt theme - high-contrast for outdoor screens
//!
//! Black on white, 1px outlines, dithering instead of greys. Readable in
//! direct sunlight on a job site.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The palette. Everything else is a dither of these two.
pub struct TradeColors;

impl TradeColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);

    /// White with the given opacity (0.0..=1.0), for fades.
    pub fn white_alpha(opacity: f32) -> Color32 {
        Self::WHITE.gamma_multiply(opacity.clamp(0.0, 1.0))
    }

    /// Black with the given opacity (0.0..=1.0), for fades.
    pub fn black_alpha(opacity: f32) -> Color32 {
        Self::BLACK.gamma_multiply(opacity.clamp(0.0, 1.0))
    }
}

/// Theme configuration for TradeBuilt apps
pub struct TradeTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for TradeTheme {
    fn default() -> Self {
        Self {
            font_size_body: 15.0,
            font_size_heading: 24.0,
            font_size_small: 12.0,
            window_padding: 10.0,
            item_spacing: 6.0,
        }
    }
}

impl TradeTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();

        visuals.window_fill = TradeColors::WHITE;
        visuals.panel_fill = TradeColors::WHITE;
        visuals.faint_bg_color = TradeColors::WHITE;
        visuals.extreme_bg_color = TradeColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, TradeColors::BLACK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = TradeColors::WHITE;
            ws.weak_bg_fill = TradeColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, TradeColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, TradeColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.active);
        bw(&mut visuals.widgets.open);
        // Focused text fields get a heavier outline.
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, TradeColors::BLACK);

        // Shadows are dithered by hand.
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        visuals.selection.bg_fill = Color32::from_rgb(160, 160, 160);
        visuals.selection.stroke = Stroke::new(2.0, TradeColors::BLACK);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);

        ctx.set_style(style);
    }

    /// Frame for grouped content: white fill, 1px black outline.
    pub fn card_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(TradeColors::WHITE)
            .stroke(Stroke::new(1.0, TradeColors::BLACK))
            .inner_margin(egui::Margin::same(12.0))
    }

    /// Same as [`card_frame`](Self::card_frame) with a 2px outline, for the
    /// group holding keyboard focus.
    pub fn focused_card_frame() -> egui::Frame {
        Self::card_frame().stroke(Stroke::new(2.0, TradeColors::BLACK))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(TradeColors::WHITE)
        .stroke(Stroke::new(1.0, TradeColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

/// Strip Cmd+/Cmd- so the layout is never zoomed by accident.
/// Call at the start of `update()`.
pub fn consume_zoom_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| {
            !matches!(event,
                egui::Event::Key { key, modifiers, .. }
                    if modifiers.command
                        && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
        });
    });
}
