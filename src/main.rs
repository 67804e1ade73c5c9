use conjunction_quiz::QuizApp;
use conjunction_quiz::config::Config;
use conjunction_quiz::generation::HttpGenerator;
use eframe::egui;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let (config, errors) = Config::load();
    for err in &errors {
        log::warn!("Configuración inválida ({err}); se usa el valor por defecto de esa variable");
    }

    let generator = match HttpGenerator::new(&config) {
        Ok(generator) => generator,
        Err(err) => {
            log::error!("No se pudo crear el cliente HTTP: {err}");
            std::process::exit(1);
        }
    };
    log::info!("Generador: {}", generator.endpoint());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 760.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "English Conjunctions Quiz",
        options,
        Box::new(move |cc| {
            let app = QuizApp::new(&config, Arc::new(generator)).with_repaint(cc.egui_ctx.clone());
            Ok(Box::new(app))
        }),
    )
}
