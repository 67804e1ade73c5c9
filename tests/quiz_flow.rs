use conjunction_quiz::QuizApp;
use conjunction_quiz::app::chat::FALLBACK_REPLY;
use conjunction_quiz::config::Config;
use conjunction_quiz::generation::{GenerationError, Generator};
use conjunction_quiz::model::{ChatMessage, Difficulty};
use conjunction_quiz::view_models::Screen;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const QUIZ_JSON: &str = r#"{"text":"A.\n\nB.","questions":[
    {"text":"Q1","options":["x","y"],"correctAnswer":"y","explanation":"e"},
    {"text":"Q2","options":["and","but"],"correctAnswer":"but","explanation":"contrast"}
]}"#;

/// Generador en memoria: devuelve las respuestas en orden y guarda las instrucciones.
struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, String>>>,
    seen: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    fn new(replies: Vec<Result<&str, &str>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn instructions(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Generator for ScriptedGenerator {
    fn generate(&self, instruction: &str) -> Result<String, GenerationError> {
        self.seen.lock().unwrap().push(instruction.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(body)) => Err(GenerationError::Status { status: 500, body }),
            None => Err(GenerationError::Status {
                status: 503,
                body: "no scripted reply".into(),
            }),
        }
    }
}

fn app_with(generator: Arc<ScriptedGenerator>) -> QuizApp {
    QuizApp::new(&Config::default(), generator)
}

/// Drena el canal hasta que `done` se cumple o pasan 5 s.
fn wait_until(app: &mut QuizApp, done: impl Fn(&QuizApp) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(&*app) {
        assert!(Instant::now() < deadline, "timed out waiting for a completion");
        std::thread::sleep(Duration::from_millis(5));
        app.poll_completions();
    }
}

fn load_quiz(app: &mut QuizApp) {
    app.select_difficulty(Difficulty::Easy);
    app.select_theme("Sports");
    assert_eq!(app.session.screen(), Screen::Loading);
    wait_until(app, |a| a.session.screen() != Screen::Loading);
}

#[test]
fn full_quiz_round_trip() {
    let generator = ScriptedGenerator::new(vec![Ok(QUIZ_JSON)]);
    let mut app = app_with(generator.clone());

    assert_eq!(app.session.screen(), Screen::ChooseDifficulty);
    load_quiz(&mut app);
    assert_eq!(app.session.screen(), Screen::Question);
    assert_eq!(app.session.passage, "A.\n\nB.");

    let prompts = generator.instructions();
    let prompt = &prompts[0];
    assert!(prompt.contains("easy level text about Sports"));
    assert!(prompt.contains("'and', 'but', 'or', 'so'"));

    app.select_answer("y");
    app.select_answer("x"); // ignorado: ya hay feedback
    assert_eq!(app.session.score, 1);
    app.next_question();

    app.select_answer("and");
    assert_eq!(app.session.score, 1);
    app.next_question();

    assert_eq!(app.session.screen(), Screen::Complete);
    let summary = app.session.summary_view().unwrap();
    assert_eq!(summary.label(), "You scored 1 out of 2!");

    app.reset();
    assert_eq!(app.session.screen(), Screen::ChooseDifficulty);
    assert_eq!(app.session.score, 0);
    assert!(app.session.passage.is_empty());
    assert!(app.session.questions.is_empty());
}

#[test]
fn fenced_response_loads_like_plain_json() {
    let fenced = format!("```json\n{QUIZ_JSON}\n```");
    let generator = ScriptedGenerator::new(vec![Ok(fenced.as_str())]);
    let mut app = app_with(generator);

    load_quiz(&mut app);
    assert_eq!(app.session.screen(), Screen::Question);
    assert_eq!(app.session.questions.len(), 2);
    assert_eq!(app.session.questions[1].correct_answer, "but");
}

#[test]
fn non_json_response_fails_without_crashing_and_can_retry() {
    let generator = ScriptedGenerator::new(vec![Ok("I am not JSON"), Ok(QUIZ_JSON)]);
    let mut app = app_with(generator.clone());

    load_quiz(&mut app);
    assert_eq!(app.session.screen(), Screen::Failed);
    assert!(app.session.failure_reason().unwrap().contains("unexpected response"));

    app.retry();
    assert_eq!(app.session.screen(), Screen::Loading);
    wait_until(&mut app, |a| a.session.screen() != Screen::Loading);
    assert_eq!(app.session.screen(), Screen::Question);

    // Mismo tema y dificultad en el segundo pedido
    let prompts = generator.instructions();
    assert_eq!(prompts.len(), 2);
    assert_eq!(prompts[0], prompts[1]);
}

#[test]
fn tutor_chat_appends_reply_and_is_cleared_on_next_question() {
    let generator = ScriptedGenerator::new(vec![Ok(QUIZ_JSON), Ok("'y' shows the result.")]);
    let mut app = app_with(generator.clone());
    load_quiz(&mut app);

    // Sin respuesta todavía no hay contexto para el tutor
    app.chat.draft = "why?".into();
    app.send_chat();
    assert!(app.chat.transcript.is_empty());

    app.select_answer("x");
    app.send_chat();
    assert_eq!(app.chat.transcript, vec![ChatMessage::user("why?")]);
    wait_until(&mut app, |a| !a.chat.is_waiting());
    assert_eq!(
        app.chat.transcript,
        vec![
            ChatMessage::user("why?"),
            ChatMessage::tutor("'y' shows the result."),
        ]
    );

    let prompts = generator.instructions();
    let tutor_prompt = &prompts[1];
    assert!(tutor_prompt.contains("- Question: Q1"));
    assert!(tutor_prompt.contains("- Student's answer: x"));
    assert!(tutor_prompt.contains("- Correct answer: y"));
    assert!(tutor_prompt.contains("- Theme: Sports"));

    app.next_question();
    assert!(app.chat.transcript.is_empty());
}

#[test]
fn tutor_failure_shows_fallback_message() {
    let generator = ScriptedGenerator::new(vec![Ok(QUIZ_JSON), Err("overloaded")]);
    let mut app = app_with(generator);
    load_quiz(&mut app);

    app.select_answer("y");
    app.chat.draft = "can you explain?".into();
    app.send_chat();
    wait_until(&mut app, |a| !a.chat.is_waiting());

    assert_eq!(app.chat.transcript.len(), 2);
    assert_eq!(app.chat.transcript[1], ChatMessage::tutor(FALLBACK_REPLY));
}

#[test]
fn chat_is_cleared_on_reset_and_late_reply_is_dropped() {
    let generator = ScriptedGenerator::new(vec![Ok(QUIZ_JSON), Ok("late reply")]);
    let mut app = app_with(generator.clone());
    load_quiz(&mut app);

    app.select_answer("y");
    app.next_question();
    app.select_answer("and");
    app.chat.draft = "why not 'but'?".into();
    app.send_chat();
    assert!(app.chat.is_waiting());

    app.next_question();
    assert_eq!(app.session.screen(), Screen::Complete);

    // Restos de chat en la pantalla final: reset los tiene que borrar
    app.chat.transcript.push(ChatMessage::user("left over"));
    app.reset();
    assert_eq!(app.session.screen(), Screen::ChooseDifficulty);
    assert!(app.chat.transcript.is_empty());
    assert!(!app.chat.is_waiting());

    // La respuesta que llega tarde no reaparece
    let deadline = Instant::now() + Duration::from_secs(5);
    while generator.instructions().len() < 2 {
        assert!(Instant::now() < deadline, "chat request never reached the generator");
        std::thread::sleep(Duration::from_millis(5));
    }
    std::thread::sleep(Duration::from_millis(50));
    app.poll_completions();
    assert!(app.chat.transcript.is_empty());
    assert!(!app.chat.is_waiting());
}

#[test]
fn chat_is_cleared_when_a_retried_quiz_arrives() {
    let generator = ScriptedGenerator::new(vec![Ok("I am not JSON"), Ok(QUIZ_JSON)]);
    let mut app = app_with(generator);
    load_quiz(&mut app);
    assert_eq!(app.session.screen(), Screen::Failed);

    app.chat.transcript.push(ChatMessage::tutor("from an earlier question"));
    app.retry();
    wait_until(&mut app, |a| a.session.screen() != Screen::Loading);

    assert_eq!(app.session.screen(), Screen::Question);
    assert!(app.chat.transcript.is_empty());
    assert!(!app.chat.is_waiting());
}

#[test]
fn question_without_options_fails_and_can_start_over() {
    let no_options = r#"{"text":"A.","questions":[
        {"text":"Q1","options":[],"correctAnswer":"and","explanation":"e"}
    ]}"#;
    let generator = ScriptedGenerator::new(vec![Ok(no_options)]);
    let mut app = app_with(generator);

    load_quiz(&mut app);
    assert_eq!(app.session.screen(), Screen::Failed);
    assert!(app.session.failure_reason().unwrap().contains("has no options"));

    app.reset();
    assert_eq!(app.session.screen(), Screen::ChooseDifficulty);
}
