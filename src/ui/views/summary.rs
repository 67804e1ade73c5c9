use crate::QuizApp;
use crate::ui::layout::{ACCENT, centered_panel};
use egui::{Button, Context, RichText};

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    let Some(summary) = app.session.summary_view() else {
        return;
    };
    let mut again = false;

    centered_panel(ctx, 220.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Quiz Complete! 🎉");
            ui.add_space(12.0);
            ui.label(RichText::new(summary.label()).size(18.0).strong().color(ACCENT));
            ui.add_space(20.0);
            again = ui
                .add_sized([220.0, 40.0], Button::new("Try Another Quiz"))
                .clicked();
        });
    });

    if again {
        app.reset();
    }
}
