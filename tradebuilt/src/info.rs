//! How-to sheets for taking duct temperatures

use egui::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoSheet {
    ReturnAir,
    SupplyAir,
}

impl InfoSheet {
    pub fn title(self) -> &'static str {
        match self {
            InfoSheet::ReturnAir => "How to measure return air",
            InfoSheet::SupplyAir => "How to measure supply air",
        }
    }

    pub fn steps(self) -> &'static [&'static str] {
        match self {
            InfoSheet::ReturnAir => &[
                "Let the system run at least 10 to 15 minutes so temperatures settle.",
                "Drill or use an existing test port in the return duct, before the filter and the air handler.",
                "Keep the port away from fresh-air intakes, bypass dampers and other returns joining the duct.",
                "Insert the probe to roughly the center of the duct.",
                "Wait for the reading to stop moving, then enter it.",
                "Plug the test port when you are done.",
            ],
            InfoSheet::SupplyAir => &[
                "Let the system run at least 10 to 15 minutes so temperatures settle.",
                "Use a test port in the supply plenum or trunk, past the coil and out of line of sight of it.",
                "Stay clear of the heat exchanger's radiant heat and of elbows close to the coil.",
                "Insert the probe to roughly the center of the duct.",
                "Wait for the reading to stop moving, then enter it.",
                "Plug the test port when you are done.",
            ],
        }
    }

    /// Show the sheet as a window. Returns false once the user closes it.
    pub fn show(self, ctx: &Context) -> bool {
        let mut open = true;
        let mut dismissed = false;
        let screen_rect = ctx.screen_rect();
        let max_h = (screen_rect.height() - 60.0).max(140.0);
        let resp = egui::Window::new(self.title())
            .id(egui::Id::new("info_sheet"))
            .collapsible(false)
            .resizable(false)
            .default_width(320.0)
            .max_height(max_h)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .open(&mut open)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(max_h - 60.0).show(ui, |ui| {
                    for (n, step) in self.steps().iter().enumerate() {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(format!("{}.", n + 1));
                            ui.label(*step);
                        });
                        ui.add_space(2.0);
                    }
                });
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        dismissed = true;
                    }
                });
            });
        if let Some(r) = &resp {
            tradecore::dither::draw_window_shadow(ctx, r.response.rect);
        }
        open && !dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheets_are_distinct() {
        assert_ne!(InfoSheet::ReturnAir.title(), InfoSheet::SupplyAir.title());
        assert!(!InfoSheet::ReturnAir.steps().is_empty());
        assert!(!InfoSheet::SupplyAir.steps().is_empty());
        assert_ne!(InfoSheet::ReturnAir.steps(), InfoSheet::SupplyAir.steps());
    }
}
