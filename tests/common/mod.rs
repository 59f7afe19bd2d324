//! Fakes shared by the integration tests.

use std::cell::RefCell;
use std::collections::HashMap;

use lingo_core::error::TranslateError;
use lingo_core::model::language;
use lingo_core::services::surface::Surface;
use lingo_core::services::translator::Translator;

/// Translator backed by a fixed phrase book. Records every call it receives.
#[derive(Default)]
pub struct PhraseBook {
    phrases: HashMap<(String, String), String>,
    pub calls: RefCell<Vec<(String, String)>>,
}

impl PhraseBook {
    pub fn with(mut self, text: &str, code: &str, translation: &str) -> Self {
        self.phrases
            .insert((text.to_string(), code.to_string()), translation.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Translator for PhraseBook {
    fn translate(&self, text: &str, destination: &str) -> Result<String, TranslateError> {
        self.calls
            .borrow_mut()
            .push((text.to_string(), destination.to_string()));

        let code = language::resolve(destination)
            .ok_or_else(|| TranslateError::UnsupportedLanguage(destination.to_string()))?;

        self.phrases
            .get(&(text.to_string(), code.to_string()))
            .cloned()
            .ok_or_else(|| TranslateError::MalformedResponse(format!("no phrase for {text:?}")))
    }
}

#[derive(Debug, Default)]
pub struct Screen {
    pub translations: Vec<String>,
    pub history: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Surface for Screen {
    fn show_translation(&mut self, text: &str) {
        self.translations.push(text.to_string());
    }

    fn show_history(&mut self, formatted: &str) {
        self.history.push(formatted.to_string());
    }

    fn show_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

pub fn phrase_book() -> PhraseBook {
    PhraseBook::default()
        .with("hello", "fr", "bonjour")
        .with("good", "es", "bueno")
        .with("thank you", "de", "danke")
}
