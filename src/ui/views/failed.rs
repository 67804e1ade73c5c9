use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, RichText};

pub fn ui_failed(app: &mut QuizApp, ctx: &Context) {
    let reason = app.session.failure_reason().unwrap_or_default().to_owned();
    let (mut retry, mut start_over) = (false, false);

    centered_panel(ctx, 260.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("We couldn't create your quiz 😕");
            ui.add_space(12.0);
            ui.label(RichText::new(&reason).color(Color32::from_rgb(220, 38, 38)));
            ui.add_space(20.0);

            let btn_w = (ui.available_width() - 8.0) / 2.0;
            ui.horizontal(|ui| {
                retry = ui.add_sized([btn_w, 36.0], Button::new("Try again")).clicked();
                start_over = ui.add_sized([btn_w, 36.0], Button::new("Start over")).clicked();
            });
        });
    });

    if retry {
        app.retry();
    } else if start_over {
        app.reset();
    }
}
