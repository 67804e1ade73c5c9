use super::*;
use crate::model::Difficulty;
use crate::prompt::{TutorContext, quiz_prompt, tutor_prompt};
use super::requests::spawn_request;

impl QuizApp {
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.dispatch(QuizEvent::SelectDifficulty(difficulty));
    }

    pub fn select_theme(&mut self, theme: &str) {
        self.dispatch(QuizEvent::SelectTheme(theme.to_string()));
    }

    pub fn select_answer(&mut self, answer: &str) {
        self.dispatch(QuizEvent::SelectAnswer(answer.to_string()));
    }

    pub fn next_question(&mut self) {
        self.dispatch(QuizEvent::NextQuestion);
    }

    pub fn retry(&mut self) {
        self.dispatch(QuizEvent::Retry);
    }

    pub fn reset(&mut self) {
        self.dispatch(QuizEvent::Reset);
    }

    /// Aplica un evento a la sesión y ejecuta el efecto que devuelva.
    pub fn dispatch(&mut self, event: QuizEvent) {
        let name = event.name();
        // El chat solo vive mientras se muestra la misma pregunta
        let clears_chat = matches!(
            event,
            QuizEvent::QuizGenerated { .. } | QuizEvent::NextQuestion | QuizEvent::Reset
        );
        match self.session.apply(event) {
            Ok(effect) => {
                if clears_chat {
                    self.chat.clear();
                }
                self.run_effect(effect);
            }
            Err(err @ TransitionError::StaleResponse { .. }) => {
                log::debug!("{err}");
            }
            Err(err) => {
                log::warn!("Evento {name} rechazado: {err}");
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::RequestQuiz {
                request_id,
                difficulty,
                theme,
            } => {
                let info = difficulty.and_then(|d| self.catalog.difficulty(d));
                let prompt = quiz_prompt(info, &theme);
                log::info!(
                    "Generando quiz #{request_id}: tema {theme}, dificultad {}",
                    difficulty.map(|d| d.id()).unwrap_or("-")
                );
                spawn_request(
                    Arc::clone(&self.generator),
                    prompt,
                    self.tx.clone(),
                    self.repaint.clone(),
                    move |raw| Completion::Quiz {
                        request_id,
                        result: raw.and_then(|text| crate::generation::parse_quiz(&text)),
                    },
                );
            }
        }
    }

    /// Contexto para el tutor; solo existe cuando ya se ha respondido.
    pub fn tutor_context(&self) -> Option<TutorContext> {
        let s = &self.session;
        let question = s.current_question()?;
        let selected = s.selected.clone().filter(|_| s.show_feedback)?;
        Some(TutorContext {
            theme: s.theme.clone().unwrap_or_default(),
            question: question.text.clone(),
            selected_answer: selected,
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
        })
    }

    pub fn send_chat(&mut self) {
        let Some(ctx) = self.tutor_context() else {
            log::warn!("Chat sin pregunta respondida; se ignora");
            return;
        };
        let Some((request_id, text)) = self.chat.begin_send() else {
            return;
        };
        spawn_request(
            Arc::clone(&self.generator),
            tutor_prompt(&ctx, &text),
            self.tx.clone(),
            self.repaint.clone(),
            move |result| Completion::Chat { request_id, result },
        );
    }

    /// Vacía el canal de respuestas. Se llama al principio de cada frame.
    pub fn poll_completions(&mut self) {
        while let Ok(completion) = self.rx.try_recv() {
            match completion {
                Completion::Quiz {
                    request_id,
                    result: Ok(quiz),
                } => {
                    log::info!(
                        "Quiz #{request_id} recibido: {} preguntas",
                        quiz.questions.len()
                    );
                    self.dispatch(QuizEvent::QuizGenerated { request_id, quiz });
                }
                Completion::Quiz {
                    request_id,
                    result: Err(err),
                } => {
                    log::error!("Fallo al generar el quiz #{request_id}: {err}");
                    self.dispatch(QuizEvent::GenerationFailed {
                        request_id,
                        reason: err.to_string(),
                    });
                }
                Completion::Chat { request_id, result } => {
                    self.chat.receive(request_id, result);
                }
            }
        }
    }
}
