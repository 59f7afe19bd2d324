use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::TranslateError;
use crate::model::language;

/// The external translation capability.
pub trait Translator {
    fn translate(&self, text: &str, destination: &str) -> Result<String, TranslateError>;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, text: &str, destination: &str) -> Result<String, TranslateError> {
        (**self).translate(text, destination)
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate(&self, text: &str, destination: &str) -> Result<String, TranslateError> {
        (**self).translate(text, destination)
    }
}

const USER_AGENT: &str = "lingo-core/translator";
const ERROR_SNIPPET_CHARS: usize = 400;

/// Client for the public Google Translate endpoint. The source language is
/// always auto-detected by the service.
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, TranslateError> {
        Self::new(cfg.endpoint.clone(), Duration::from_secs(cfg.timeout_secs))
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str, destination: &str) -> Result<String, TranslateError> {
        let code = language::resolve(destination)
            .ok_or_else(|| TranslateError::UnsupportedLanguage(destination.trim().to_string()))?;

        debug!(target_code = code, chars = text.chars().count(), "calling translation service");

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", code),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?;

        let status = resp.status();

        // Read as text first so an error body is not lost when it isn't JSON.
        let body = resp.text()?;

        if !status.is_success() {
            return Err(TranslateError::Status {
                status,
                message: extract_error_message(&body),
            });
        }

        parse_response(&body)
    }
}

/// Joins the translated segments of a `translate_a/single` response.
///
/// The payload is a nested array; its first element holds one entry per
/// sentence, each starting with the translated string. Entries without a
/// string there (romanization rows) are skipped.
pub fn parse_response(body: &str) -> Result<String, TranslateError> {
    let v: Value = serde_json::from_str(body)
        .map_err(|e| TranslateError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let segments = v
        .get(0)
        .and_then(|s| s.as_array())
        .ok_or_else(|| TranslateError::MalformedResponse("missing translation segments".into()))?;

    let translated: String = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(|t| t.as_str()))
        .collect();

    if translated.trim().is_empty() {
        return Err(TranslateError::MalformedResponse("empty translation".into()));
    }

    Ok(translated)
}

fn extract_error_message(body_text: &str) -> String {
    // Common shapes: { "error": { "message": "..." } } or { "message": "..." }
    if let Ok(v) = serde_json::from_str::<Value>(body_text) {
        if let Some(msg) = v
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return msg.to_string();
        }
        if let Some(msg) = v.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
    }

    let trimmed = body_text.trim();
    if trimmed.chars().count() > ERROR_SNIPPET_CHARS {
        let snippet: String = trimmed.chars().take(ERROR_SNIPPET_CHARS).collect();
        format!("{snippet}...")
    } else {
        trimmed.to_string()
    }
}
