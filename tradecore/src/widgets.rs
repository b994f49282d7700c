//! Custom widgets - black and white, dithered feedback

use egui::{Align2, FontId, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget};

use crate::animation::lerp;
use crate::dither;
use crate::theme::TradeColors;

/// How far a fully pressed button shrinks.
const PRESS_SHRINK: f32 = 0.04;

/// Scale a rect about its center for press feedback.
/// `pressed` runs from 0.0 (at rest) to 1.0 (fully pressed).
fn pressed_rect(rect: Rect, pressed: f32) -> Rect {
    let scale = 1.0 - PRESS_SHRINK * pressed.clamp(0.0, 1.0);
    Rect::from_center_size(rect.center(), rect.size() * scale)
}

/// Paint the shared button body and return the text colour to use on it.
fn paint_button_body(ui: &Ui, rect: Rect, response: &Response, pressed: f32) -> egui::Color32 {
    let painter = ui.painter();
    let body = pressed_rect(rect, pressed);

    // Shadow sinks as the button goes down.
    let shadow_offset = lerp(4.0, 1.0, pressed.clamp(0.0, 1.0));
    dither::draw_shadow(painter, body, shadow_offset);

    painter.rect_filled(body, 0.0, TradeColors::WHITE);
    painter.rect_stroke(body, 0.0, Stroke::new(1.0, TradeColors::BLACK));

    let down = response.is_pointer_button_down_on() || pressed > 0.5;
    if down {
        dither::draw_pressed(painter, body);
        TradeColors::WHITE
    } else {
        if response.hovered() {
            dither::draw_hover(painter, body);
        }
        TradeColors::BLACK
    }
}

/// A large menu button with animated press feedback.
pub struct PressableButton<'a> {
    text: &'a str,
    size: Vec2,
    pressed: f32,
}

impl<'a> PressableButton<'a> {
    pub fn new(text: &'a str, size: Vec2) -> Self {
        Self { text, size, pressed: 0.0 }
    }

    /// Press amount from 0.0 (at rest) to 1.0 (fully pressed).
    pub fn pressed(mut self, pressed: f32) -> Self {
        self.pressed = pressed;
        self
    }
}

impl<'a> Widget for PressableButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let text_color = paint_button_body(ui, rect, &response, self.pressed);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.text,
                FontId::proportional(17.0),
                text_color,
            );
        }

        response
    }
}

/// Catalog card: icon, title and an optional one-line description.
pub struct CardButton<'a> {
    icon: &'a str,
    title: &'a str,
    description: Option<&'a str>,
    pressed: f32,
}

impl<'a> CardButton<'a> {
    pub fn new(icon: &'a str, title: &'a str) -> Self {
        Self { icon, title, description: None, pressed: 0.0 }
    }

    pub fn description(mut self, description: Option<&'a str>) -> Self {
        self.description = description;
        self
    }

    pub fn pressed(mut self, pressed: f32) -> Self {
        self.pressed = pressed;
        self
    }
}

impl<'a> Widget for CardButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let height = 64.0;
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width() - 6.0, height),
            Sense::click(),
        );

        if ui.is_rect_visible(rect) {
            let text_color = paint_button_body(ui, rect, &response, self.pressed);
            let body = pressed_rect(rect, self.pressed);
            let painter = ui.painter();

            painter.text(
                Pos2::new(body.min.x + 26.0, body.center().y),
                Align2::CENTER_CENTER,
                self.icon,
                FontId::proportional(24.0),
                text_color,
            );

            let text_x = body.min.x + 52.0;
            match self.description {
                Some(desc) => {
                    painter.text(
                        Pos2::new(text_x, body.center().y - 9.0),
                        Align2::LEFT_CENTER,
                        self.title,
                        FontId::proportional(16.0),
                        text_color,
                    );
                    painter.text(
                        Pos2::new(text_x, body.center().y + 11.0),
                        Align2::LEFT_CENTER,
                        desc,
                        FontId::proportional(12.0),
                        text_color,
                    );
                }
                None => {
                    painter.text(
                        Pos2::new(text_x, body.center().y),
                        Align2::LEFT_CENTER,
                        self.title,
                        FontId::proportional(16.0),
                        text_color,
                    );
                }
            }
        }

        response
    }
}

/// Collapsible section header with a chevron. Returns the click response;
/// the caller owns the expanded flag.
pub fn section_header(ui: &mut Ui, title: &str, expanded: bool) -> Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 28.0),
        Sense::click(),
    );

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        if response.hovered() {
            dither::draw_hover(painter, rect);
        }
        let galley_width = ui.fonts(|f| {
            f.layout_no_wrap(title.to_owned(), FontId::proportional(16.0), TradeColors::BLACK)
                .size()
                .x
        });
        let text_left = rect.center().x - (galley_width + 18.0) / 2.0;
        painter.text(
            Pos2::new(text_left, rect.center().y),
            Align2::LEFT_CENTER,
            title,
            FontId::proportional(16.0),
            TradeColors::BLACK,
        );

        // Chevron: points down when expanded, right when collapsed.
        let c = Pos2::new(text_left + galley_width + 12.0, rect.center().y);
        let s = 4.0;
        let stroke = Stroke::new(1.5, TradeColors::BLACK);
        let points = if expanded {
            [c + egui::vec2(-s, -s / 2.0), c + egui::vec2(0.0, s / 2.0), c + egui::vec2(s, -s / 2.0)]
        } else {
            [c + egui::vec2(-s / 2.0, -s), c + egui::vec2(s / 2.0, 0.0), c + egui::vec2(-s / 2.0, s)]
        };
        painter.line_segment([points[0], points[1]], stroke);
        painter.line_segment([points[1], points[2]], stroke);
    }

    response
}

/// Back button for the left of the menu bar.
pub fn back_button(ui: &mut Ui) -> Response {
    let btn_size = egui::vec2(18.0, 18.0);
    let (rect, response) = ui.allocate_exact_size(btn_size, Sense::click());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, TradeColors::WHITE);
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, TradeColors::BLACK));
        if response.hovered() {
            dither::draw_hover(painter, rect);
        }
        let m = 5.0;
        let stroke = Stroke::new(1.5, TradeColors::BLACK);
        let tip = Pos2::new(rect.left() + m, rect.center().y);
        painter.line_segment([Pos2::new(rect.right() - m - 2.0, rect.top() + m), tip], stroke);
        painter.line_segment([tip, Pos2::new(rect.right() - m - 2.0, rect.bottom() - m)], stroke);
    }

    ui.add_space(4.0);
    let sep_height = btn_size.y;
    let (sep_rect, _) = ui.allocate_exact_size(egui::vec2(4.0, sep_height), Sense::hover());
    if ui.is_rect_visible(sep_rect) {
        ui.painter().vline(
            sep_rect.center().x,
            sep_rect.y_range(),
            Stroke::new(1.0, TradeColors::BLACK),
        );
    }
    ui.add_space(4.0);

    response
}

/// Status bar: white bg, 1px black top border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(TradeColors::WHITE)
        .stroke(Stroke::new(1.0, TradeColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}
