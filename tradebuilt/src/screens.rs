//! Screens of the navigation stack and their per-visit view state

use egui::{Align2, FontId, Pos2, Rect, RichText, Stroke, TextEdit, Ui};
use std::time::Duration;
use tradecore::animation::ping_pong;
use tradecore::theme::{TradeColors, TradeTheme};
use tradecore::widgets::{section_header, CardButton, PressableButton};

use crate::catalog::{CalculatorEntry, CalculatorKind, CalculatorSection};
use crate::delta_t::{retain_keypad_chars, DeltaTInput, ParseReadingError, TemperatureReading, UNIT};
use crate::info::InfoSheet;

/// Laser beam sweeps across in this long, then back.
const LASER_PERIOD: Duration = Duration::from_millis(1600);

/// Where a button press leads.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    HvacCalculators,
    Calculator(CalculatorEntry),
}

/// Something a screen asks the shell to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// A button was pressed; animate it, then open `target`.
    Press { button: String, target: Route },
}

/// Read-only per-frame inputs shared by all screens.
pub struct FrameContext<'a> {
    pub sections: &'a [CalculatorSection],
    /// Button currently playing its press animation, with its press amount.
    pub pressed: Option<(&'a str, f32)>,
}

impl<'a> FrameContext<'a> {
    fn press_for(&self, button: &str) -> f32 {
        match self.pressed {
            Some((key, amount)) if key == button => amount,
            _ => 0.0,
        }
    }
}

pub enum Screen {
    MainMenu,
    Hvac(HvacScreen),
    DeltaT(DeltaTScreen),
    Placeholder(CalculatorEntry),
}

impl Screen {
    /// Fresh state for a route. Re-entering a screen always starts clean.
    pub fn open(route: Route, sections: &[CalculatorSection]) -> Self {
        match route {
            Route::HvacCalculators => Screen::Hvac(HvacScreen::new(sections)),
            Route::Calculator(entry) => match entry.kind {
                CalculatorKind::DeltaT => Screen::DeltaT(DeltaTScreen::new(entry.title)),
                CalculatorKind::Placeholder => Screen::Placeholder(entry),
            },
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Screen::MainMenu => "TradeBuilt",
            Screen::Hvac(_) => "HVAC Calculators",
            Screen::DeltaT(screen) => &screen.title,
            Screen::Placeholder(entry) => &entry.title,
        }
    }

    /// Whether this screen draws something that moves on its own.
    pub fn is_animating(&self) -> bool {
        matches!(self, Screen::MainMenu)
    }

    /// Close whatever transient UI the screen has open (info sheet,
    /// keyboard focus). Returns false if there was nothing to close.
    pub fn dismiss_overlay(&mut self) -> bool {
        match self {
            Screen::DeltaT(screen) => screen.dismiss_overlay(),
            _ => false,
        }
    }

    pub fn show(&mut self, ui: &mut Ui, frame: &FrameContext<'_>) -> Option<ScreenAction> {
        match self {
            Screen::MainMenu => show_main_menu(ui, frame),
            Screen::Hvac(screen) => screen.show(ui, frame),
            Screen::DeltaT(screen) => {
                screen.show(ui);
                None
            }
            Screen::Placeholder(entry) => {
                show_placeholder(ui, entry);
                None
            }
        }
    }
}

// ---------------------------------------------------------------- main menu

const TRADES_BUTTON: &str = "menu:trades";

fn show_main_menu(ui: &mut Ui, frame: &FrameContext<'_>) -> Option<ScreenAction> {
    let mut action = None;
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new("TradeBuilt").font(FontId::proportional(44.0)).strong());
        ui.add_space(6.0);
        let width = (ui.available_width() - 40.0).min(320.0);
        draw_laser_line(ui, width);
        ui.add_space(40.0);

        let button = PressableButton::new("Skilled Trades Calculators", egui::vec2(width, 56.0))
            .pressed(frame.press_for(TRADES_BUTTON));
        if ui.add(button).clicked() {
            action = Some(ScreenAction::Press {
                button: TRADES_BUTTON.to_string(),
                target: Route::HvacCalculators,
            });
        }
    });
    action
}

/// Thin track with a short beam sliding back and forth.
fn draw_laser_line(ui: &mut Ui, width: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 4.0), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let elapsed = Duration::from_secs_f64(ui.input(|i| i.time).max(0.0));
    let beam_width = (width * 0.18).max(40.0).min(width);
    let offset = ping_pong(elapsed, LASER_PERIOD) * (width - beam_width);

    let painter = ui.painter();
    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, TradeColors::BLACK));
    let beam = Rect::from_min_size(
        Pos2::new(rect.min.x + offset, rect.min.y),
        egui::vec2(beam_width, rect.height()),
    );
    painter.rect_filled(beam, 0.0, TradeColors::BLACK);
}

// ------------------------------------------------------------- hvac list

pub struct HvacScreen {
    /// One flag per catalog section.
    expanded: Vec<bool>,
}

impl HvacScreen {
    pub fn new(sections: &[CalculatorSection]) -> Self {
        Self { expanded: vec![true; sections.len()] }
    }

    pub fn toggle(&mut self, section: usize) {
        if let Some(flag) = self.expanded.get_mut(section) {
            *flag = !*flag;
        }
    }

    pub fn is_expanded(&self, section: usize) -> bool {
        self.expanded.get(section).copied().unwrap_or(true)
    }

    fn show(&mut self, ui: &mut Ui, frame: &FrameContext<'_>) -> Option<ScreenAction> {
        let mut action = None;
        let mut toggled = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (si, section) in frame.sections.iter().enumerate() {
                ui.add_space(6.0);
                if section_header(ui, &section.title, self.is_expanded(si)).clicked() {
                    toggled = Some(si);
                }
                if !self.is_expanded(si) {
                    continue;
                }
                for (ei, entry) in section.entries.iter().enumerate() {
                    let key = entry_key(si, ei);
                    let card = CardButton::new(entry.glyph(), &entry.title)
                        .description(entry.description.as_deref())
                        .pressed(frame.press_for(&key));
                    if ui.add(card).clicked() {
                        action = Some(ScreenAction::Press {
                            button: key,
                            target: Route::Calculator(entry.clone()),
                        });
                    }
                    ui.add_space(2.0);
                }
            }
            if frame.sections.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.label("no calculators configured");
                });
            }
        });
        if let Some(si) = toggled {
            self.toggle(si);
        }
        action
    }
}

fn entry_key(section: usize, entry: usize) -> String {
    format!("entry:{}:{}", section, entry)
}

// ------------------------------------------------------------- delta-t

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Return,
    Supply,
}

pub struct DeltaTScreen {
    title: String,
    input: DeltaTInput,
    focused: Option<Field>,
    info: Option<InfoSheet>,
    clear_focus: bool,
}

#[cfg(test)]
impl DeltaTScreen {
    pub fn input(&self) -> &DeltaTInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut DeltaTInput {
        &mut self.input
    }
}

struct FieldOutcome {
    has_focus: bool,
    info_clicked: bool,
}

impl DeltaTScreen {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            input: DeltaTInput::default(),
            focused: None,
            info: None,
            clear_focus: false,
        }
    }

    pub fn open_info(&mut self, sheet: InfoSheet) {
        self.info = Some(sheet);
    }

    pub fn info(&self) -> Option<InfoSheet> {
        self.info
    }

    fn dismiss_overlay(&mut self) -> bool {
        if self.info.take().is_some() {
            return true;
        }
        if self.focused.is_some() {
            self.clear_focus = true;
            return true;
        }
        false
    }

    fn show(&mut self, ui: &mut Ui) {
        let clear_focus = std::mem::take(&mut self.clear_focus);
        ui.add_space(12.0);

        let ret = field_row(
            ui,
            "Return Duct Temperature",
            &mut self.input.return_text,
            self.focused == Some(Field::Return),
            clear_focus,
        );
        ui.add_space(8.0);
        let sup = field_row(
            ui,
            "Supply Duct Temperature",
            &mut self.input.supply_text,
            self.focused == Some(Field::Supply),
            clear_focus,
        );

        self.focused = if ret.has_focus {
            Some(Field::Return)
        } else if sup.has_focus {
            Some(Field::Supply)
        } else {
            None
        };
        if ret.info_clicked {
            self.open_info(InfoSheet::ReturnAir);
        } else if sup.info_clicked {
            self.open_info(InfoSheet::SupplyAir);
        }

        ui.add_space(16.0);
        let result = self.input.display();
        ui.vertical_centered(|ui| {
            if self.input.evaluate().is_some() {
                ui.label(RichText::new("ΔT").small());
                TradeTheme::card_frame().show(ui, |ui| {
                    ui.label(RichText::new(result).font(FontId::monospace(40.0)).strong());
                });
            } else {
                ui.add_space(8.0);
                ui.label(result);
            }
        });

        if self.focused.is_some() {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui.button("done").clicked() {
                    self.clear_focus = true;
                }
            });
        }

        if let Some(sheet) = self.info() {
            if !sheet.show(ui.ctx()) {
                self.info = None;
            }
        }
    }
}

fn field_row(ui: &mut Ui, label: &str, text: &mut String, focused: bool, clear_focus: bool) -> FieldOutcome {
    let frame = if focused {
        TradeTheme::focused_card_frame()
    } else {
        TradeTheme::card_frame()
    };
    frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("🌡").size(22.0));
                let edit = ui
                    .vertical(|ui| {
                        ui.label(RichText::new(label).small());
                        let response = ui.add(
                            TextEdit::singleline(text)
                                .hint_text(UNIT)
                                .desired_width(140.0),
                        );
                        if response.changed() {
                            retain_keypad_chars(text);
                        }
                        if let Err(err @ ParseReadingError::Malformed) = TemperatureReading::parse(text) {
                            ui.label(RichText::new(err.to_string()).small());
                        }
                        response
                    })
                    .inner;
                if clear_focus {
                    edit.surrender_focus();
                }
                let info_clicked = ui
                    .with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.button("?").on_hover_text("how to measure").clicked()
                    })
                    .inner;
                FieldOutcome {
                    has_focus: edit.has_focus() && !clear_focus,
                    info_clicked,
                }
            })
            .inner
        })
        .inner
}

// ------------------------------------------------------------- placeholder

fn show_placeholder(ui: &mut Ui, entry: &CalculatorEntry) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(120.0, 120.0), egui::Sense::hover());
        let painter = ui.painter();
        painter.circle_stroke(rect.center(), 60.0, Stroke::new(1.0, TradeColors::BLACK));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            entry.glyph(),
            FontId::proportional(48.0),
            TradeColors::BLACK,
        );
        ui.add_space(16.0);
        ui.heading(&entry.title);
        if let Some(desc) = &entry.description {
            ui.label(desc);
        }
        ui.add_space(4.0);
        ui.label(RichText::new("Calculator coming soon").small());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_sections;
    use crate::delta_t::PROMPT;

    #[test]
    fn test_open_routes() {
        let sections = default_sections();
        assert!(matches!(Screen::open(Route::HvacCalculators, &sections), Screen::Hvac(_)));

        let delta = Screen::open(Route::Calculator(CalculatorEntry::delta_t()), &sections);
        assert!(matches!(delta, Screen::DeltaT(_)));
        assert_eq!(delta.title(), "Delta T (Δ)");

        let cfm = sections[1].entries[0].clone();
        let stub = Screen::open(Route::Calculator(cfm), &sections);
        assert!(matches!(stub, Screen::Placeholder(_)));
        assert_eq!(stub.title(), "CFM Calculator");
    }

    #[test]
    fn test_delta_t_opens_empty() {
        let screen = DeltaTScreen::new("Delta T (Δ)");
        assert_eq!(screen.input(), &DeltaTInput::default());
        assert_eq!(screen.input().display(), PROMPT);
    }

    #[test]
    fn test_dismiss_closes_info_first() {
        let mut screen = Screen::DeltaT(DeltaTScreen::new("Delta T (Δ)"));
        if let Screen::DeltaT(inner) = &mut screen {
            inner.open_info(InfoSheet::SupplyAir);
        }
        assert!(screen.dismiss_overlay());
        if let Screen::DeltaT(inner) = &screen {
            assert_eq!(inner.info(), None);
        }
        assert!(!screen.dismiss_overlay());
    }

    #[test]
    fn test_hvac_sections_toggle() {
        let sections = default_sections();
        let mut screen = HvacScreen::new(&sections);
        assert!(screen.is_expanded(0));
        screen.toggle(0);
        assert!(!screen.is_expanded(0));
        assert!(screen.is_expanded(1));
        screen.toggle(7);
        screen.toggle(0);
        assert!(screen.is_expanded(0));
    }

    #[test]
    fn test_press_lookup() {
        let sections = default_sections();
        let frame = FrameContext { sections: &sections, pressed: Some(("entry:0:0", 0.75)) };
        assert_eq!(frame.press_for("entry:0:0"), 0.75);
        assert_eq!(frame.press_for("entry:1:0"), 0.0);
        assert_eq!(entry_key(1, 3), "entry:1:3");
    }

    #[test]
    fn test_only_main_menu_animates() {
        assert!(Screen::MainMenu.is_animating());
        assert!(!Screen::Placeholder(CalculatorEntry::delta_t()).is_animating());
    }
}
