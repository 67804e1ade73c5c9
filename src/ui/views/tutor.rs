use crate::QuizApp;
use crate::ui::layout::ACCENT;
use egui::{Button, Frame, Key, RichText, ScrollArea, Stroke, TextEdit, Ui};

/// Chat con el tutor, debajo del feedback.
pub fn ui_tutor(app: &mut QuizApp, ui: &mut Ui) {
    let mut send = false;

    Frame::default()
        .stroke(Stroke::new(1.0, ACCENT.gamma_multiply(0.4)))
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("🤝 Need help? Chat with your AI tutor!").strong().color(ACCENT));
            ui.add_space(6.0);

            ScrollArea::vertical()
                .id_salt("tutor_transcript")
                .max_height(240.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in &app.chat.transcript {
                        let icon = if message.is_user { "👤" } else { "👩‍🏫" };
                        ui.horizontal_wrapped(|ui| {
                            if message.is_user {
                                ui.add_space(24.0);
                            }
                            ui.label(format!("{icon} {}", message.text));
                        });
                        ui.add_space(4.0);
                    }
                    if app.chat.is_waiting() {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(RichText::new("...").color(ACCENT));
                        });
                    }
                });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let ask_w = 64.0;
                let input = ui.add(
                    TextEdit::singleline(&mut app.chat.draft)
                        .hint_text("Ask a question about this answer...")
                        .desired_width(ui.available_width() - ask_w - 8.0),
                );
                let enter = input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                let label = if app.chat.is_waiting() { "..." } else { "Ask" };
                let ask = ui
                    .add_enabled(app.chat.can_send(), Button::new(label).min_size([ask_w, 24.0].into()))
                    .clicked();

                send = ask || enter;
            });
        });

    if send {
        app.send_chat();
    }
}
