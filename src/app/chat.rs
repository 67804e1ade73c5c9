use crate::generation::GenerationError;
use crate::model::ChatMessage;

pub const FALLBACK_REPLY: &str = "Sorry, I couldn't get a response. Please try again!";

/// Conversación con el tutor sobre la pregunta que se está mostrando.
/// Se vacía al cambiar de pregunta.
#[derive(Debug, Default, Clone)]
pub struct ChatHelper {
    pub transcript: Vec<ChatMessage>,
    pub draft: String,
    pending: Option<u64>,
    seq: u64,
}

impl ChatHelper {
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_send(&self) -> bool {
        !self.is_waiting() && !self.draft.trim().is_empty()
    }

    /// Pasa el borrador al historial y devuelve (id, texto) del pedido a
    /// lanzar, o `None` si no hay nada que enviar.
    pub fn begin_send(&mut self) -> Option<(u64, String)> {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        self.transcript.push(ChatMessage::user(text.clone()));
        self.seq += 1;
        self.pending = Some(self.seq);
        Some((self.seq, text))
    }

    pub fn receive(&mut self, request_id: u64, result: Result<String, GenerationError>) {
        if self.pending != Some(request_id) {
            log::debug!("Respuesta del tutor descartada (pedido {request_id})");
            return;
        }
        self.pending = None;

        let reply = match result {
            Ok(text) => text,
            Err(err) => {
                log::error!("Error del tutor: {err}");
                FALLBACK_REPLY.to_string()
            }
        };
        self.transcript.push(ChatMessage::tutor(reply));
    }

    /// Olvida la conversación. Una respuesta en vuelo se descartará al llegar.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.draft.clear();
        self.pending = None;
    }
}
