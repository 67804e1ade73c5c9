use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::{badge, centered_panel};
use egui::Context;

const COLUMNS: usize = 4;

pub fn ui_theme_select(app: &mut QuizApp, ctx: &Context) {
    let mut chosen: Option<String> = None;
    let difficulty_name = app
        .session
        .difficulty
        .and_then(|d| app.catalog.difficulty(d))
        .map(|info| info.name.clone());

    centered_panel(ctx, 260.0, 720.0, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Choose Your Theme! 🎯");
            if let Some(name) = &difficulty_name {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    badge(ui, "Difficulty:", name);
                });
            }
        });
        ui.add_space(18.0);

        let btn_w = ((ui.available_width() - 8.0 * (COLUMNS as f32 - 1.0)) / COLUMNS as f32).max(100.0);
        egui::Grid::new("theme_grid")
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for (i, theme) in app.catalog.themes.iter().enumerate() {
                    if big_list_button(ui, theme.clone(), btn_w, 48.0, true) {
                        chosen = Some(theme.clone());
                    }
                    if (i + 1) % COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
    });

    if let Some(theme) = chosen {
        app.select_theme(&theme);
    }
}
