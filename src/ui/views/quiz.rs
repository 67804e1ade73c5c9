use crate::QuizApp;
use crate::ui::helpers::option_button;
use crate::ui::layout::{ACCENT, badge, scroll_panel};
use crate::ui::views::tutor::ui_tutor;
use crate::view_models::passage_paragraphs;
use egui::{Button, Color32, Context, Frame, RichText, Stroke};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(view) = app.session.question_view() else {
        return;
    };
    let theme = app.session.theme.clone().unwrap_or_default();
    let difficulty_name = app
        .session
        .difficulty
        .and_then(|d| app.catalog.difficulty(d))
        .map(|info| info.name.clone());

    let mut picked: Option<String> = None;
    let mut next = false;

    scroll_panel(ctx, 760.0, |ui| {
        // Cabecera: tema y dificultad
        ui.horizontal(|ui| {
            badge(ui, "Theme:", &theme);
            if let Some(name) = &difficulty_name {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    badge(ui, "Difficulty:", name);
                });
            }
        });
        ui.add_space(12.0);

        // Texto generado
        ui.label(RichText::new(format!("{theme} Text")).heading().color(ACCENT));
        ui.add_space(6.0);
        for paragraph in passage_paragraphs(&app.session.passage) {
            ui.label(paragraph);
            ui.add_space(8.0);
        }

        ui.separator();
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new(view.heading()).size(18.0).strong().color(ACCENT));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("Score: {}", view.score)).color(ACCENT));
            });
        });
        ui.add_space(8.0);
        ui.label(RichText::new(&view.prompt).size(16.0));
        ui.add_space(8.0);

        let width = ui.available_width();
        for option in &view.options {
            if option_button(ui, option, width) {
                picked = Some(option.label.clone());
            }
            ui.add_space(4.0);
        }

        if let Some(feedback) = &view.feedback {
            ui.add_space(8.0);
            let (fill, stroke, text) = if feedback.correct {
                (
                    Color32::from_rgb(240, 253, 244),
                    Color32::from_rgb(187, 247, 208),
                    Color32::from_rgb(22, 101, 52),
                )
            } else {
                (
                    Color32::from_rgb(254, 242, 242),
                    Color32::from_rgb(254, 202, 202),
                    Color32::from_rgb(153, 27, 27),
                )
            };
            Frame::default()
                .fill(fill)
                .stroke(Stroke::new(1.0, stroke))
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(feedback.headline()).strong().color(text));
                    ui.add_space(4.0);
                    ui.label(RichText::new(&feedback.explanation).color(Color32::from_gray(55)));
                });

            ui.add_space(8.0);
            ui_tutor(app, ui);

            ui.add_space(8.0);
            next = ui
                .add_sized([width, 40.0], Button::new("Next Question"))
                .clicked();
        }
    });

    if let Some(answer) = picked {
        app.select_answer(&answer);
    } else if next {
        app.next_question();
    }
}
