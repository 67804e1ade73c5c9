use crate::generation::{GenerationError, Generator};
use crate::model::GeneratedQuiz;
use std::sync::Arc;
use std::sync::mpsc::Sender;

/// Resultado de un pedido en segundo plano, de vuelta al hilo de la UI.
#[derive(Debug)]
pub enum Completion {
    Quiz {
        request_id: u64,
        result: Result<GeneratedQuiz, GenerationError>,
    },
    Chat {
        request_id: u64,
        result: Result<String, GenerationError>,
    },
}

/// Lanza un hilo que hace la llamada bloqueante y manda un único
/// `Completion` por el canal. `finish` convierte el texto en el mensaje.
pub(crate) fn spawn_request<F>(
    generator: Arc<dyn Generator>,
    instruction: String,
    tx: Sender<Completion>,
    repaint: Option<egui::Context>,
    finish: F,
) where
    F: FnOnce(Result<String, GenerationError>) -> Completion + Send + 'static,
{
    std::thread::spawn(move || {
        let completion = finish(generator.generate(&instruction));
        if tx.send(completion).is_err() {
            log::debug!("La app ya no escucha; se descarta la respuesta");
            return;
        }
        if let Some(ctx) = repaint {
            ctx.request_repaint();
        }
    });
}
