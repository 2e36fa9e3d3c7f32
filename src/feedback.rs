use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::obstacles::Difficulty;

/// Remark shown when the feedback service fails or is disabled.
pub const FALLBACK_REMARK: &str = "Game over — an impressive run either way!";

/// Remark shown when the service answers but sends no usable text.
pub const EMPTY_RESPONSE_REMARK: &str = "Great game! Keep it up.";

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const GEMINI_MODEL: &str = "gemini-3-flash-preview";
const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Upper bound on the whole remote call; past it the worker falls back.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Ways the remote feedback call can fail.
///
/// None of these ever reach the player: the worker maps every variant to a
/// canned remark before reporting back.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("feedback request failed: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("could not read feedback response: {0}")]
    Read(#[from] io::Error),
    #[error("feedback response contained no text")]
    EmptyResponse,
}

/// Something that can produce a remark about a finished game.
///
/// The call may block; the client always runs it on a worker thread.
pub trait FeedbackSource: Send + Sync + 'static {
    fn fetch(&self, score: u32, difficulty: Difficulty) -> Result<String, FeedbackError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Blocking client for the Gemini `generateContent` endpoint.
pub struct GeminiFeedback {
    api_key: String,
    agent: ureq::Agent,
}

impl GeminiFeedback {
    /// Builds a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, FeedbackError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(FeedbackError::MissingApiKey)?;

        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();

        Ok(Self { api_key, agent })
    }
}

impl FeedbackSource for GeminiFeedback {
    fn fetch(&self, score: u32, difficulty: Difficulty) -> Result<String, FeedbackError> {
        let prompt = format!(
            "User just played a Snake game. Score: {score}, Difficulty: {difficulty}. \
             Give a short, witty, 1-sentence comment on their performance."
        );
        let url = format!(
            "{GEMINI_ENDPOINT}/{GEMINI_MODEL}:generateContent?key={}",
            self.api_key
        );

        let request = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 50,
            },
        };

        let response = self.agent.post(&url).send_json(request).map_err(Box::new)?;
        let body: GenerateResponse = response.into_json()?;

        let text: String = body
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .map(|part| part.text)
            .collect();
        let text = text.trim().to_owned();

        if text.is_empty() {
            Err(FeedbackError::EmptyResponse)
        } else {
            Ok(text)
        }
    }
}

/// A remark delivered by a feedback worker.
///
/// `serial` identifies the game session that asked; the app discards events
/// whose serial is not the current session's, so a slow response can never
/// show up under a later game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FeedbackEvent {
    pub serial: u64,
    pub text: String,
}

/// Fire-and-forget dispatcher for feedback requests.
///
/// Each request runs on its own worker thread and reports back over a
/// channel the game loop polls. Workers never fail outward: every error is
/// mapped to a canned remark. Without a source (no API key, `--no-feedback`)
/// the fallback remark is delivered immediately.
pub struct FeedbackClient {
    source: Option<Arc<dyn FeedbackSource>>,
    sender: Sender<FeedbackEvent>,
    receiver: Receiver<FeedbackEvent>,
}

impl FeedbackClient {
    #[must_use]
    pub fn new(source: Option<Arc<dyn FeedbackSource>>) -> Self {
        let (sender, receiver) = channel();

        Self {
            source,
            sender,
            receiver,
        }
    }

    /// Returns true when a remote source is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.source.is_some()
    }

    /// Starts a background fetch for the given session serial.
    pub fn request(&self, serial: u64, score: u32, difficulty: Difficulty) {
        let sender = self.sender.clone();

        let Some(source) = self.source.clone() else {
            let _ = sender.send(FeedbackEvent {
                serial,
                text: FALLBACK_REMARK.to_owned(),
            });
            return;
        };

        thread::spawn(move || {
            let text = match source.fetch(score, difficulty) {
                Ok(text) => text,
                Err(FeedbackError::EmptyResponse) => EMPTY_RESPONSE_REMARK.to_owned(),
                Err(error) => {
                    eprintln!("Feedback request failed: {error}");
                    FALLBACK_REMARK.to_owned()
                }
            };

            let _ = sender.send(FeedbackEvent { serial, text });
        });
    }

    /// Returns the next delivered remark, if one has arrived.
    #[must_use]
    pub fn try_recv(&self) -> Option<FeedbackEvent> {
        self.receiver.try_recv().ok()
    }
}
