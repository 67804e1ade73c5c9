use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText, Vec2};

pub fn ui_difficulty_select(app: &mut QuizApp, ctx: &Context) {
    let mut chosen = None;

    centered_panel(ctx, 240.0, 620.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Choose Your Difficulty! 🎯");
            ui.add_space(18.0);

            let count = app.catalog.difficulties.len().max(1) as f32;
            let btn_w = ((ui.available_width() - 8.0 * (count - 1.0)) / count).max(120.0);

            ui.horizontal(|ui| {
                for d in &app.catalog.difficulties {
                    let label = RichText::new(format!("{}\n{}", d.emoji, d.name)).size(20.0);
                    let card = Button::new(label).min_size(Vec2::new(btn_w, 110.0));
                    if ui.add(card).on_hover_text(&d.connectives).clicked() {
                        chosen = Some(d.id);
                    }
                }
            });
        });
    });

    if let Some(d) = chosen {
        app.select_difficulty(d);
    }
}
