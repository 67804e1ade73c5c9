// src/ui/helpers.rs
use crate::view_models::{OptionTone, OptionView};
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// (relleno, borde) según el estado de la opción
fn tone_colors(tone: OptionTone) -> (Color32, Color32) {
    match tone {
        OptionTone::Idle => (Color32::from_rgb(245, 243, 255), Color32::from_rgb(221, 214, 254)),
        OptionTone::Correct => (Color32::from_rgb(220, 252, 231), Color32::from_rgb(34, 197, 94)),
        OptionTone::Incorrect => (Color32::from_rgb(254, 226, 226), Color32::from_rgb(239, 68, 68)),
        OptionTone::Muted => (Color32::from_rgb(249, 250, 251), Color32::from_rgb(229, 231, 235)),
    }
}

/// Botón de respuesta a ancho completo. Devuelve true si se pulsó.
pub fn option_button(ui: &mut Ui, option: &OptionView, width: f32) -> bool {
    let (fill, stroke) = tone_colors(option.tone);
    // Texto oscuro fijo: los rellenos son claros también en modo oscuro
    let text = RichText::new(&option.label).color(Color32::from_gray(30));
    let button = Button::new(text)
        .fill(fill)
        .stroke(Stroke::new(1.0, stroke))
        .min_size(Vec2::new(width, 36.0));
    ui.add_enabled(option.enabled, button).clicked()
}
