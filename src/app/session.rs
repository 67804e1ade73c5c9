use crate::model::{AppState, Difficulty, GeneratedQuiz, Question};
use thiserror::Error;

/// Eventos que mueven la sesión. Tanto los clics como las respuestas del
/// generador pasan por aquí.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    SelectDifficulty(Difficulty),
    SelectTheme(String),
    QuizGenerated { request_id: u64, quiz: GeneratedQuiz },
    GenerationFailed { request_id: u64, reason: String },
    SelectAnswer(String),
    NextQuestion,
    Retry,
    Reset,
}

impl QuizEvent {
    pub fn name(&self) -> &'static str {
        match self {
            QuizEvent::SelectDifficulty(_) => "select_difficulty",
            QuizEvent::SelectTheme(_) => "select_theme",
            QuizEvent::QuizGenerated { .. } => "quiz_generated",
            QuizEvent::GenerationFailed { .. } => "generation_failed",
            QuizEvent::SelectAnswer(_) => "select_answer",
            QuizEvent::NextQuestion => "next_question",
            QuizEvent::Retry => "retry",
            QuizEvent::Reset => "reset",
        }
    }
}

/// Trabajo que la app debe lanzar tras una transición.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    RequestQuiz {
        request_id: u64,
        difficulty: Option<Difficulty>,
        theme: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("{event} no está permitido en la etapa '{stage}'")]
    NotAllowed {
        event: &'static str,
        stage: &'static str,
    },
    #[error("la pregunta {0} ya tiene respuesta")]
    AlreadyAnswered(usize),
    #[error("la pregunta {0} aún no tiene respuesta")]
    NotAnswered(usize),
    #[error("respuesta obsoleta del pedido {received} (esperando {expected:?})")]
    StaleResponse { received: u64, expected: Option<u64> },
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    ask_difficulty: bool,
    pub state: AppState,
    pub difficulty: Option<Difficulty>,
    pub theme: Option<String>,
    pub passage: String,
    pub questions: Vec<Question>,
    pub current: usize,
    pub selected: Option<String>,
    pub show_feedback: bool,
    pub score: usize,
    request_seq: u64,
}

impl QuizSession {
    pub fn new(ask_difficulty: bool) -> Self {
        Self {
            ask_difficulty,
            state: Self::initial_state(ask_difficulty),
            difficulty: None,
            theme: None,
            passage: String::new(),
            questions: Vec::new(),
            current: 0,
            selected: None,
            show_feedback: false,
            score: 0,
            request_seq: 0,
        }
    }

    fn initial_state(ask_difficulty: bool) -> AppState {
        if ask_difficulty {
            AppState::SelectingDifficulty
        } else {
            AppState::SelectingTheme
        }
    }

    /// Vista derivada: todas las preguntas contestadas.
    pub fn is_complete(&self) -> bool {
        self.state == AppState::Answering && self.current >= self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            AppState::Answering => self.questions.get(self.current),
            _ => None,
        }
    }

    /// Id del pedido de generación que se está esperando, si hay uno.
    pub fn pending_request(&self) -> Option<u64> {
        match self.state {
            AppState::Loading { request_id } => Some(request_id),
            _ => None,
        }
    }

    /// Único punto de mutación de la sesión. Un evento rechazado no toca nada.
    pub fn apply(&mut self, event: QuizEvent) -> Result<Effect, TransitionError> {
        let not_allowed = |event: &QuizEvent, state: &AppState| TransitionError::NotAllowed {
            event: event.name(),
            stage: state.name(),
        };

        match event {
            QuizEvent::SelectDifficulty(d) => {
                if self.state != AppState::SelectingDifficulty {
                    return Err(not_allowed(&QuizEvent::SelectDifficulty(d), &self.state));
                }
                self.difficulty = Some(d);
                self.state = AppState::SelectingTheme;
                Ok(Effect::None)
            }

            QuizEvent::SelectTheme(theme) => {
                if self.state != AppState::SelectingTheme {
                    return Err(not_allowed(&QuizEvent::SelectTheme(theme), &self.state));
                }
                self.theme = Some(theme);
                self.passage.clear();
                self.questions.clear();
                Ok(self.begin_request())
            }

            QuizEvent::QuizGenerated { request_id, quiz } => {
                self.check_request(request_id)?;
                self.passage = quiz.text;
                self.questions = quiz.questions;
                self.current = 0;
                self.selected = None;
                self.show_feedback = false;
                self.score = 0;
                self.state = AppState::Answering;
                Ok(Effect::None)
            }

            QuizEvent::GenerationFailed { request_id, reason } => {
                self.check_request(request_id)?;
                self.state = AppState::Failed { reason };
                Ok(Effect::None)
            }

            QuizEvent::SelectAnswer(answer) => {
                if self.state != AppState::Answering || self.is_complete() {
                    return Err(not_allowed(&QuizEvent::SelectAnswer(answer), &self.state));
                }
                if self.show_feedback {
                    return Err(TransitionError::AlreadyAnswered(self.current + 1));
                }
                if self.questions[self.current].is_correct(&answer) {
                    self.score += 1;
                }
                self.selected = Some(answer);
                self.show_feedback = true;
                Ok(Effect::None)
            }

            QuizEvent::NextQuestion => {
                if self.state != AppState::Answering || self.is_complete() {
                    return Err(not_allowed(&QuizEvent::NextQuestion, &self.state));
                }
                if !self.show_feedback {
                    return Err(TransitionError::NotAnswered(self.current + 1));
                }
                self.selected = None;
                self.show_feedback = false;
                self.current += 1;
                Ok(Effect::None)
            }

            QuizEvent::Retry => {
                if !matches!(self.state, AppState::Failed { .. }) {
                    return Err(not_allowed(&QuizEvent::Retry, &self.state));
                }
                Ok(self.begin_request())
            }

            QuizEvent::Reset => {
                let allowed = self.is_complete() || matches!(self.state, AppState::Failed { .. });
                if !allowed {
                    return Err(not_allowed(&QuizEvent::Reset, &self.state));
                }
                // El contador de pedidos sobrevive: así una respuesta tardía
                // nunca coincide con un pedido nuevo.
                let request_seq = self.request_seq;
                *self = QuizSession::new(self.ask_difficulty);
                self.request_seq = request_seq;
                Ok(Effect::None)
            }
        }
    }

    fn begin_request(&mut self) -> Effect {
        self.request_seq += 1;
        let request_id = self.request_seq;
        self.state = AppState::Loading { request_id };
        Effect::RequestQuiz {
            request_id,
            difficulty: self.difficulty,
            theme: self.theme.clone().unwrap_or_default(),
        }
    }

    fn check_request(&self, received: u64) -> Result<(), TransitionError> {
        match self.pending_request() {
            Some(expected) if expected == received => Ok(()),
            expected => Err(TransitionError::StaleResponse { received, expected }),
        }
    }
}
