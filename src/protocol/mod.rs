use std::io::{self, BufRead, Write};
use std::panic::{catch_unwind, AssertUnwindSafe};

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::CoreError;
use crate::model::language::LANGUAGES;
use crate::services::history::HistoryStore;
use crate::services::orchestrator::{Orchestrator, TranslateOutcome};
use crate::services::translator::{GoogleTranslator, Translator};

mod command;
mod response;

use command::Command;
pub use response::CollectingSurface;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn warning(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "warning",
        "message": message.into()
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn invalid_json() -> String {
    json!({
        "status": "error",
        "message": "invalid json"
    })
    .to_string()
}

/// Response for a request whose handler panicked.
pub fn internal_error() -> String {
    json!({
        "status": "error",
        "message": "internal core error"
    })
    .to_string()
}

/// One connected UI. Requests are handled strictly one at a time.
pub struct Session<T> {
    orchestrator: Orchestrator<T>,
}

/// Opens the configured history database and wires it to the Google client.
pub fn open_session(cfg: &Config) -> Result<Session<GoogleTranslator>, CoreError> {
    let store = HistoryStore::open(&cfg.db_path)?;
    store.initialize()?;

    let translator = GoogleTranslator::from_config(cfg)?;
    let orchestrator = Orchestrator::new(store, translator, cfg.source_language.clone());

    Ok(Session::new(orchestrator))
}

impl<T: Translator> Session<T> {
    pub fn new(orchestrator: Orchestrator<T>) -> Self {
        Self { orchestrator }
    }

    pub fn orchestrator(&self) -> &Orchestrator<T> {
        &self.orchestrator
    }

    pub fn handle(&mut self, input: &str) -> String {
        let req: Value = match serde_json::from_str(input) {
            Ok(v) => v,
            Err(_) => return invalid_json(),
        };

        let id = get_id(&req);
        let cmd_str = get_cmd(&req);
        let payload = get_payload(&req);

        let cmd = Command::from(cmd_str);
        debug!(cmd = cmd_str, ?cmd, "request");

        match cmd {
            Command::Ping => ok(id, json!({ "message": "lingo-core alive" })),

            Command::Translate => {
                let text = payload.get("text").and_then(|v| v.as_str()).unwrap_or("");
                let destination = payload.get("destination").and_then(|v| v.as_str());

                let mut surface = CollectingSurface::default();
                match self.orchestrator.translate_text(text, destination, &mut surface) {
                    TranslateOutcome::Completed { saved, .. } => {
                        let mut body = json!({ "translation": surface.translation, "saved": saved });
                        if !saved {
                            body["message"] = Value::String(surface.error_message());
                        }
                        ok(id, body)
                    }
                    TranslateOutcome::Rejected(_) => warning(id, surface.warning_message()),
                    TranslateOutcome::Failed(_) => err(id, surface.error_message()),
                }
            }

            Command::History => {
                let mut surface = CollectingSurface::default();
                self.orchestrator.show_history(&mut surface);
                match surface.history {
                    Some(text) => ok(id, json!({ "text": text })),
                    None => err(id, surface.error_message()),
                }
            }

            Command::HistoryList => match self.orchestrator.history() {
                Ok(records) => ok(id, json!({ "records": records })),
                Err(e) => err(id, e.to_string()),
            },

            Command::Languages => ok(id, json!({ "languages": LANGUAGES })),

            Command::Unknown => err(id, "unknown command"),
        }
    }
}

/// Reads requests line by line and writes one response line for each, until
/// the input ends or the output goes away. Every non-blank line gets an answer,
/// including lines that are not UTF-8.
pub fn serve<T, R, W>(session: &mut Session<T>, reader: R, mut writer: W) -> io::Result<()>
where
    T: Translator,
    R: BufRead,
    W: Write,
{
    for line in reader.split(b'\n') {
        let line = line?;

        let response = match std::str::from_utf8(&line) {
            Ok(text) => {
                let text = text.trim_end_matches('\r');
                if text.trim().is_empty() {
                    continue;
                }
                catch_unwind(AssertUnwindSafe(|| session.handle(text)))
                    .unwrap_or_else(|_| internal_error())
            }
            Err(_) => {
                warn!(bytes = line.len(), "request line is not valid UTF-8");
                invalid_json()
            }
        };

        if writeln!(writer, "{response}").is_err() {
            break;
        }

        let _ = writer.flush();
    }

    Ok(())
}
