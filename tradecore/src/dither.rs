//! Checkerboard dithering for pressed, hovered and shadowed elements.
//!
//! Two colours only: instead of a grey fill we stipple single black pixels,
//! so a label under a pressed card stays readable.

use egui::{Color32, Context, Painter, Pos2, Rect};

/// How tightly the checkerboard is packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    /// Every other pixel. Pressed buttons.
    Dense,
    /// Every other pixel on every other row. Hover and shadows.
    Light,
}

impl Density {
    fn spacing(self) -> i32 {
        match self {
            Density::Dense => 1,
            Density::Light => 2,
        }
    }
}

/// Pixel origins covered by the pattern, all inside `rect`.
pub fn dither_points(rect: Rect, density: Density) -> impl Iterator<Item = Pos2> {
    let step = density.spacing();
    let (x0, y0) = (rect.min.x.ceil() as i32, rect.min.y.ceil() as i32);
    let (x1, y1) = (rect.max.x.floor() as i32, rect.max.y.floor() as i32);

    (y0..y1.max(y0)).step_by(step as usize).flat_map(move |y| {
        let shift = if ((y - y0) / step) % 2 == 0 { 0 } else { step };
        (x0 + shift..x1.max(x0 + shift))
            .step_by((step * 2) as usize)
            .map(move |x| Pos2::new(x as f32, y as f32))
    })
}

pub fn draw_dither(painter: &Painter, rect: Rect, color: Color32, density: Density) {
    let pixel = egui::Vec2::splat(1.0);
    for p in dither_points(rect, density) {
        painter.rect_filled(Rect::from_min_size(p, pixel), 0.0, color);
    }
}

pub fn draw_pressed(painter: &Painter, rect: Rect) {
    draw_dither(painter, rect, Color32::BLACK, Density::Dense);
}

pub fn draw_hover(painter: &Painter, rect: Rect) {
    draw_dither(painter, rect, Color32::BLACK, Density::Light);
}

/// Stippled drop shadow `offset` px down and right of `rect`.
pub fn draw_shadow(painter: &Painter, rect: Rect, offset: f32) {
    if offset <= 0.0 {
        return;
    }
    draw_dither(painter, rect.translate(egui::vec2(offset, offset)), Color32::BLACK, Density::Light);
}

/// Shadow behind a dialog. Call with the rect `egui::Window::show` returned.
pub fn draw_window_shadow(ctx: &Context, window_rect: Rect) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        egui::Id::new("dither_shadows"),
    ));
    draw_shadow(&painter, window_rect, 4.0);
}
