use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn id(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Pregunta tal y como la devuelve el generador. No se modifica tras parsearla.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

/// Texto + preguntas generados para un tema
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuiz {
    pub text: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_user: true }
    }

    pub fn tutor(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_user: false }
    }
}

/// Etapa almacenada de la sesión. `Complete` no aparece aquí: se deriva
/// de `Answering` cuando el índice alcanza el número de preguntas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    SelectingDifficulty,
    SelectingTheme,
    Loading { request_id: u64 },
    Answering,
    Failed { reason: String },
}

impl AppState {
    pub fn name(&self) -> &'static str {
        match self {
            AppState::SelectingDifficulty => "selecting difficulty",
            AppState::SelectingTheme => "selecting theme",
            AppState::Loading { .. } => "loading",
            AppState::Answering => "answering",
            AppState::Failed { .. } => "failed",
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::SelectingDifficulty
    }
}
