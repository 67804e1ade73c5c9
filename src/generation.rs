use crate::config::Config;
use crate::model::GeneratedQuiz;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Could not reach the generation service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("The generation service answered HTTP {status}{}", body_suffix(.body))]
    Status { status: u16, body: String },
    #[error("The generation service sent an unexpected response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("The generated quiz has no questions")]
    NoQuestions,
    #[error("Question {0} of the generated quiz has no options")]
    NoOptions(usize),
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(". Body: {body}")
    }
}

/// Servicio externo de generación de texto: instrucción in, texto out.
pub trait Generator: Send + Sync {
    fn generate(&self, instruction: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

/// Cliente HTTP bloqueante contra un endpoint tipo `/api/chat`.
/// Se usa siempre desde un hilo de trabajo, nunca desde el hilo de la UI.
pub struct HttpGenerator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpGenerator {
    pub fn new(config: &Config) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("conjunction-quiz/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Generator for HttpGenerator {
    fn generate(&self, instruction: &str) -> Result<String, GenerationError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message: instruction });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        let envelope: ChatResponse = serde_json::from_str(&body)?;
        log::debug!(
            "Respuesta de {} ({} caracteres)",
            self.endpoint,
            envelope.response.len()
        );
        Ok(envelope.response)
    }
}

/// Quita la valla ```json ... ``` que a veces envuelve la respuesta.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // La primera línea puede llevar el lenguaje ("json")
        text = match rest.split_once('\n') {
            Some((tag, body)) if !tag.trim_start().starts_with('{') => body,
            _ => rest,
        };
        text = text.trim_end();
        if let Some(body) = text.strip_suffix("```") {
            text = body;
        }
    }

    text.trim()
}

pub fn parse_quiz(raw: &str) -> Result<GeneratedQuiz, GenerationError> {
    let quiz: GeneratedQuiz = serde_json::from_str(strip_code_fence(raw))?;

    if quiz.questions.is_empty() {
        return Err(GenerationError::NoQuestions);
    }

    // Sin opciones la pregunta no se puede contestar y la sesión se quedaría atascada
    if let Some(i) = quiz.questions.iter().position(|q| q.options.is_empty()) {
        return Err(GenerationError::NoOptions(i + 1));
    }

    for (i, q) in quiz.questions.iter().enumerate() {
        if !q.options.iter().any(|o| o == &q.correct_answer) {
            log::warn!(
                "Pregunta {}: la respuesta correcta {:?} no está entre las opciones",
                i + 1,
                q.correct_answer
            );
        }
    }

    Ok(quiz)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{"text":"A.\n\nB.","questions":[{"text":"Q1","options":["x","y"],"correctAnswer":"y","explanation":"e"}]}"#;

    #[test]
    fn parses_plain_json() {
        let quiz = parse_quiz(SCENARIO).unwrap();
        assert_eq!(quiz.text, "A.\n\nB.");
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].correct_answer, "y");
        assert_eq!(quiz.questions[0].explanation, "e");
    }

    #[test]
    fn fenced_json_parses_like_plain_json() {
        let fenced = format!("```json\n{SCENARIO}\n```");
        assert_eq!(parse_quiz(&fenced).unwrap(), parse_quiz(SCENARIO).unwrap());

        let bare_fence = format!("```\n{SCENARIO}\n```\n");
        assert_eq!(parse_quiz(&bare_fence).unwrap(), parse_quiz(SCENARIO).unwrap());
    }

    #[test]
    fn strip_code_fence_leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fence("  {\"a\":1}\n"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn non_json_is_malformed() {
        let err = parse_quiz("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, GenerationError::Malformed(_)));
    }

    #[test]
    fn missing_fields_are_malformed() {
        let err = parse_quiz(r#"{"text":"only text"}"#).unwrap_err();
        assert!(matches!(err, GenerationError::Malformed(_)));
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let err = parse_quiz(r#"{"text":"t","questions":[]}"#).unwrap_err();
        assert!(matches!(err, GenerationError::NoQuestions));
    }

    #[test]
    fn question_without_options_is_rejected() {
        let raw = r#"{"text":"t","questions":[
            {"text":"Q1","options":["a","b"],"correctAnswer":"a","explanation":"e"},
            {"text":"Q2","options":[],"correctAnswer":"a","explanation":"e"}
        ]}"#;
        let err = parse_quiz(raw).unwrap_err();
        assert!(matches!(err, GenerationError::NoOptions(2)));
        assert_eq!(err.to_string(), "Question 2 of the generated quiz has no options");
    }

    #[test]
    fn status_error_message_includes_body() {
        let err = GenerationError::Status {
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(
            err.to_string(),
            "The generation service answered HTTP 502. Body: bad gateway"
        );
    }
}
