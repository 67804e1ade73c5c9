// src/view_models.rs

/// Pantalla a dibujar. `Complete` se deriva, no se guarda.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    ChooseDifficulty,
    ChooseTheme,
    Loading,
    Question,
    Complete,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTone {
    Idle,      // sin responder todavía
    Correct,   // la correcta, una vez respondida
    Incorrect, // la elegida si era incorrecta
    Muted,     // el resto
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub label: String,
    pub tone: OptionTone,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackView {
    pub correct: bool,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub number: usize, // 1-based
    pub total: usize,
    pub score: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub feedback: Option<FeedbackView>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryView {
    pub score: usize,
    pub total: usize,
}

pub fn option_tone(option: &str, correct: &str, selected: Option<&str>, show_feedback: bool) -> OptionTone {
    if !show_feedback {
        OptionTone::Idle
    } else if option == correct {
        OptionTone::Correct
    } else if Some(option) == selected {
        OptionTone::Incorrect
    } else {
        OptionTone::Muted
    }
}

/// Párrafos del texto generado, separados por líneas en blanco.
pub fn passage_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

impl FeedbackView {
    pub fn headline(&self) -> &'static str {
        if self.correct { "✅ Correct!" } else { "❌ Not quite right." }
    }
}

impl QuestionView {
    pub fn heading(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }
}

impl SummaryView {
    pub fn label(&self) -> String {
        format!("You scored {} out of {}!", self.score, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_before_feedback_are_idle() {
        assert_eq!(option_tone("y", "y", None, false), OptionTone::Idle);
        assert_eq!(option_tone("x", "y", Some("x"), false), OptionTone::Idle);
    }

    #[test]
    fn tones_after_feedback_mark_correct_wrong_and_rest() {
        assert_eq!(option_tone("y", "y", Some("x"), true), OptionTone::Correct);
        assert_eq!(option_tone("x", "y", Some("x"), true), OptionTone::Incorrect);
        assert_eq!(option_tone("z", "y", Some("x"), true), OptionTone::Muted);
        // Acertada: la elegida es la correcta
        assert_eq!(option_tone("y", "y", Some("y"), true), OptionTone::Correct);
    }

    #[test]
    fn passage_splits_on_blank_lines() {
        assert_eq!(passage_paragraphs("A.\n\nB."), vec!["A.", "B."]);
        assert_eq!(passage_paragraphs("A.\n\n\n\nB.\n"), vec!["A.", "B."]);
        assert!(passage_paragraphs("").is_empty());
    }

    #[test]
    fn labels() {
        let summary = SummaryView { score: 3, total: 5 };
        assert_eq!(summary.label(), "You scored 3 out of 5!");
        let fb = FeedbackView { correct: false, explanation: "e".into() };
        assert_eq!(fb.headline(), "❌ Not quite right.");
    }
}
