// src/prompt.rs
//
// Instrucciones en lenguaje natural que se envían al generador.

use crate::data::DifficultyInfo;

pub const AUDIENCE: &str = "HAVO 4 students (age 15-16)";
pub const PARAGRAPHS: usize = 5;
pub const QUESTIONS: usize = 5;

const JSON_SHAPE: &str = r#"{
  "text": "the text content",
  "questions": [
    {
      "text": "question text",
      "options": ["option1", "option2", "option3", "option4"],
      "correctAnswer": "correct option",
      "explanation": "why this is correct"
    }
  ]
}"#;

/// Contexto de la pregunta que se está mostrando, para el tutor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorContext {
    pub theme: String,
    pub question: String,
    pub selected_answer: String,
    pub correct_answer: String,
    pub explanation: String,
}

/// Pide un texto sobre `theme` y las preguntas en formato JSON.
/// Sin dificultad se pide una mezcla de conectores.
pub fn quiz_prompt(difficulty: Option<&DifficultyInfo>, theme: &str) -> String {
    let (level, focus) = match difficulty {
        Some(d) => (
            format!("{} level ", d.id),
            format!("specifically use {}", d.connectives),
        ),
        None => (
            String::new(),
            "use a varied mix of conjunctions".to_string(),
        ),
    };

    format!(
        "Create an engaging {level}text about {theme} for {AUDIENCE}.\n\
         The text should be {PARAGRAPHS} paragraphs long and {focus}.\n\
         Separate the paragraphs with a blank line.\n\
         Then create {QUESTIONS} multiple choice questions about conjunctions used in the text.\n\
         Each question has exactly 4 options and the correctAnswer must be copied exactly from the options.\n\
         Format the response as JSON with this structure:\n{JSON_SHAPE}"
    )
}

pub fn tutor_prompt(ctx: &TutorContext, student_question: &str) -> String {
    format!(
        "You are a helpful English teacher. The student is learning about conjunctions.\n\
         \n\
         Context:\n\
         - Theme: {theme}\n\
         - Question: {question}\n\
         - Student's answer: {selected}\n\
         - Correct answer: {correct}\n\
         - Explanation: {explanation}\n\
         \n\
         Student's question: {student_question}\n\
         \n\
         Please provide a helpful, encouraging response that:\n\
         1. Addresses their specific question\n\
         2. Explains why their answer was incorrect (if relevant)\n\
         3. Helps them understand the correct usage of the conjunction\n\
         4. Provides an additional example if helpful\n\
         \n\
         Keep your response friendly and suitable for a {AUDIENCE} student.",
        theme = ctx.theme,
        question = ctx.question,
        selected = ctx.selected_answer,
        correct = ctx.correct_answer,
        explanation = ctx.explanation,
    )
}
