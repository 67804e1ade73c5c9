use crate::ui::layout::{ACCENT, centered_panel};
use egui::{Context, RichText, Spinner};

pub fn ui_pending_quiz(ctx: &Context) {
    centered_panel(ctx, 200.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.add(Spinner::new().size(48.0).color(ACCENT));
            ui.add_space(16.0);
            ui.label(RichText::new("Creating your quiz...").color(ACCENT));
        });
    });
}
