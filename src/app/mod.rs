use crate::config::Config;
use crate::data::{Catalog, read_catalog_embedded};
use crate::generation::Generator;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

// Submódulos
pub mod actions;
pub mod chat;
pub mod requests;
pub mod session;
pub mod view_models;

pub use chat::ChatHelper;
pub use requests::Completion;
pub use session::{Effect, QuizEvent, QuizSession, TransitionError};

pub struct QuizApp {
    pub catalog: Catalog,
    pub session: QuizSession,
    pub chat: ChatHelper,
    generator: Arc<dyn Generator>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    /// Para pedir un repintado cuando termina un hilo
    repaint: Option<egui::Context>,
}

impl QuizApp {
    pub fn new(config: &Config, generator: Arc<dyn Generator>) -> Self {
        let (tx, rx) = channel();
        Self {
            catalog: read_catalog_embedded(),
            session: QuizSession::new(config.ask_difficulty),
            chat: ChatHelper::default(),
            generator,
            tx,
            rx,
            repaint: None,
        }
    }

    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }
}
