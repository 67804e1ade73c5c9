use std::time::Duration;
use thiserror::Error;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/chat";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const ENDPOINT_VAR: &str = "QUIZ_GENERATION_ENDPOINT";
pub const API_KEY_VAR: &str = "QUIZ_GENERATION_API_KEY";
pub const TIMEOUT_VAR: &str = "QUIZ_GENERATION_TIMEOUT_SECS";
pub const ASK_DIFFICULTY_VAR: &str = "QUIZ_ASK_DIFFICULTY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("QUIZ_GENERATION_TIMEOUT_SECS debe ser un entero positivo, recibido {0:?}")]
    InvalidTimeout(String),
    #[error("{key} debe ser true/false, recibido {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    /// Si es false se salta la pantalla de dificultad
    pub ask_difficulty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            ask_difficulty: true,
        }
    }
}

impl Config {
    /// Lee `.env` (si existe) y después las variables de entorno. Cada variable
    /// inválida vuelve a su valor por defecto sin tocar las demás; los errores
    /// se devuelven para que el llamador los registre.
    pub fn load() -> (Self, Vec<ConfigError>) {
        read_dotenv();
        Self::from_lookup_lenient(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let (config, mut errors) = Self::from_lookup_lenient(lookup);
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(errors.remove(0))
        }
    }

    pub fn from_lookup_lenient(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        // Los valores vacíos cuentan como no definidos
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Config::default();
        let mut errors = Vec::new();

        if let Some(endpoint) = get(ENDPOINT_VAR) {
            config.endpoint = endpoint;
        }
        config.api_key = get(API_KEY_VAR);

        if let Some(raw) = get(TIMEOUT_VAR) {
            match raw.parse::<u64>().ok().filter(|s| *s > 0) {
                Some(secs) => config.timeout = Duration::from_secs(secs),
                None => errors.push(ConfigError::InvalidTimeout(raw)),
            }
        }

        if let Some(raw) = get(ASK_DIFFICULTY_VAR) {
            match parse_flag(ASK_DIFFICULTY_VAR, &raw) {
                Ok(flag) => config.ask_difficulty = flag,
                Err(err) => errors.push(err),
            }
        }

        (config, errors)
    }
}

fn read_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        log::debug!("Sin fichero .env: {err}");
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: raw.to_string(),
        }),
    }
}
