//! UI module - egui settings and timer controls
//!
//! Provides the interactive UI components using nannou_egui.

use dial_core::{DialSettings, ScaleMode};
use nannou_egui::egui;

/// Result of the timer controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerAction {
    #[default]
    None,
    Start,
    Reset,
}

/// Draw the settings panel; returns true when the dial must be rebuilt
pub fn draw_settings_panel(ctx: &egui::Context, settings: &mut DialSettings) -> bool {
    let mut changed = false;

    egui::Window::new("Dial")
        .collapsible(true)
        .resizable(false)
        .default_width(200.0)
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .show(ctx, |ui| {
            egui::ComboBox::from_label("Scale")
                .selected_text(settings.scale_mode.to_string())
                .show_ui(ui, |ui| {
                    for mode in ScaleMode::ALL {
                        if ui
                            .selectable_value(&mut settings.scale_mode, mode, mode.id())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });

            if ui.checkbox(&mut settings.clockwise, "Clockwise").changed() {
                changed = true;
            }
            ui.separator();
            ui.label("Press C to flip direction");
            ui.label("Press R to restore defaults");
        });

    changed
}

/// Draw start/reset controls
pub fn draw_timer_controls(ctx: &egui::Context, is_running: bool) -> TimerAction {
    let mut action = TimerAction::None;

    egui::TopBottomPanel::bottom("timer_controls")
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if is_running {
                    if ui.button("Reset").clicked() {
                        action = TimerAction::Reset;
                    }
                } else if ui.button("Start").clicked() {
                    action = TimerAction::Start;
                }
                ui.label("Drag the handle to set the duration · Space starts/resets");
            });
        });

    action
}
