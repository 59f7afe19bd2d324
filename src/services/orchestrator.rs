use tracing::{debug, error, info, warn};

use crate::error::{StorageError, TranslateError, ValidationError};
use crate::model::record::TranslationRecord;
use crate::services::history::HistoryStore;
use crate::services::surface::Surface;
use crate::services::translator::Translator;

pub const NO_HISTORY_MESSAGE: &str = "No history entries found.";
pub const VALIDATION_WARNING: &str = "Please enter text and choose a language";

/// Where a translate request currently is. Every request ends back at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Validating,
    Calling,
    Completed,
    Failed,
    Rejected,
}

/// How a translate request ended.
#[derive(Debug)]
pub enum TranslateOutcome {
    /// `saved` is false when the history write failed; the translation was
    /// still shown.
    Completed { translation: String, saved: bool },
    Rejected(ValidationError),
    Failed(TranslateError),
}

pub struct Orchestrator<T> {
    store: HistoryStore,
    translator: T,
    source_language: String,
    state: RequestState,
}

impl<T: Translator> Orchestrator<T> {
    pub fn new(store: HistoryStore, translator: T, source_language: impl Into<String>) -> Self {
        Self {
            store,
            translator,
            source_language: source_language.into(),
            state: RequestState::Idle,
        }
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    fn transition(&mut self, next: RequestState) {
        debug!(from = ?self.state, to = ?next, "request state");
        self.state = next;
    }

    /// Runs one translate request: validate, call the service, show the
    /// result, then record it.
    pub fn translate_text(
        &mut self,
        text: &str,
        destination: Option<&str>,
        surface: &mut dyn Surface,
    ) -> TranslateOutcome {
        self.transition(RequestState::Validating);

        let destination = match validate(text, destination) {
            Ok(d) => d,
            Err(e) => {
                self.transition(RequestState::Rejected);
                warn!(reason = %e, "translate request rejected");
                surface.show_warning(VALIDATION_WARNING);
                self.transition(RequestState::Idle);
                return TranslateOutcome::Rejected(e);
            }
        };

        self.transition(RequestState::Calling);

        let translation = match self
            .translator
            .translate(text, destination)
            .and_then(non_empty)
        {
            Ok(t) => t,
            Err(e) => {
                self.transition(RequestState::Failed);
                warn!(destination, error = %e, "translation failed");
                surface.show_error(&format!("Translation failed: {e}"));
                self.transition(RequestState::Idle);
                return TranslateOutcome::Failed(e);
            }
        };

        self.transition(RequestState::Completed);
        surface.show_translation(&translation);

        let record = TranslationRecord::new(
            self.source_language.as_str(),
            text,
            destination,
            translation.as_str(),
        );

        let saved = match self.store.append(&record) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "failed to save translation history");
                surface.show_error(&format!("Could not save translation history: {e}"));
                false
            }
        };

        info!(destination, saved, "translation completed");
        self.transition(RequestState::Idle);

        TranslateOutcome::Completed { translation, saved }
    }

    pub fn history(&self) -> Result<Vec<TranslationRecord>, StorageError> {
        self.store.list_all()
    }

    pub fn get_history_display(&self) -> Result<String, StorageError> {
        let records = self.store.list_all()?;
        Ok(format_history(&records))
    }

    /// Formats the history and hands it to the surface, or reports why it
    /// could not be read.
    pub fn show_history(&self, surface: &mut dyn Surface) {
        match self.get_history_display() {
            Ok(text) => surface.show_history(&text),
            Err(e) => {
                error!(error = %e, "failed to read translation history");
                surface.show_error(&format!("Could not read translation history: {e}"));
            }
        }
    }
}

/// Returns the destination, as entered, when the request may go out.
pub fn validate<'a>(text: &str, destination: Option<&'a str>) -> Result<&'a str, ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }

    match destination {
        Some(d) if !d.trim().is_empty() => Ok(d),
        _ => Err(ValidationError::NoDestination),
    }
}

pub fn format_history(records: &[TranslationRecord]) -> String {
    if records.is_empty() {
        return NO_HISTORY_MESSAGE.to_string();
    }

    records.iter().map(TranslationRecord::display_block).collect()
}

fn non_empty(translation: String) -> Result<String, TranslateError> {
    if translation.trim().is_empty() {
        Err(TranslateError::MalformedResponse("empty translation".into()))
    } else {
        Ok(translation)
    }
}
