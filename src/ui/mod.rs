mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::view_models::Screen;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Primero las respuestas que hayan llegado de los hilos
        self.poll_completions();

        // CABECERA CON TÍTULO
        top_panel(ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por pantalla a las funciones en views/
        match self.session.screen() {
            Screen::ChooseDifficulty => views::difficulty::ui_difficulty_select(self, ctx),
            Screen::ChooseTheme => views::theme::ui_theme_select(self, ctx),
            Screen::Loading => views::pending::ui_pending_quiz(ctx),
            Screen::Question => views::quiz::ui_quiz(self, ctx),
            Screen::Complete => views::summary::ui_summary_view(self, ctx),
            Screen::Failed => views::failed::ui_failed(self, ctx),
        }
    }
}
