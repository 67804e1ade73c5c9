use super::*;
use crate::model::AppState;
use crate::view_models::{FeedbackView, OptionView, QuestionView, Screen, SummaryView, option_tone};

impl QuizSession {
    pub fn screen(&self) -> Screen {
        match self.state {
            AppState::SelectingDifficulty => Screen::ChooseDifficulty,
            AppState::SelectingTheme => Screen::ChooseTheme,
            AppState::Loading { .. } => Screen::Loading,
            AppState::Failed { .. } => Screen::Failed,
            AppState::Answering if self.is_complete() => Screen::Complete,
            AppState::Answering => Screen::Question,
        }
    }

    pub fn question_view(&self) -> Option<QuestionView> {
        let q = self.current_question()?;
        let selected = self.selected.as_deref();

        let options = q
            .options
            .iter()
            .map(|o| OptionView {
                label: o.clone(),
                tone: option_tone(o, &q.correct_answer, selected, self.show_feedback),
                enabled: !self.show_feedback,
            })
            .collect();

        let feedback = self.show_feedback.then(|| FeedbackView {
            correct: selected.is_some_and(|s| q.is_correct(s)),
            explanation: q.explanation.clone(),
        });

        Some(QuestionView {
            number: self.current + 1,
            total: self.questions.len(),
            score: self.score,
            prompt: q.text.clone(),
            options,
            feedback,
        })
    }

    pub fn summary_view(&self) -> Option<SummaryView> {
        self.is_complete().then(|| SummaryView {
            score: self.score,
            total: self.questions.len(),
        })
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.state {
            AppState::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}
