//! End-to-end behaviour of the orchestrator over a file-backed history.

mod common;

use common::{phrase_book, PhraseBook, Screen};
use lingo_core::error::{TranslateError, ValidationError};
use lingo_core::model::record::TranslationRecord;
use lingo_core::services::history::HistoryStore;
use lingo_core::services::orchestrator::{
    Orchestrator, RequestState, TranslateOutcome, NO_HISTORY_MESSAGE, VALIDATION_WARNING,
};

fn open_store(dir: &tempfile::TempDir) -> HistoryStore {
    let store = HistoryStore::open(&dir.path().join("trans.db")).unwrap();
    store.initialize().unwrap();
    store
}

#[test]
fn valid_request_appends_exactly_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let book = phrase_book();
    let mut o = Orchestrator::new(open_store(&dir), &book, "English");
    let mut screen = Screen::default();

    let before = o.history().unwrap().len();
    let outcome = o.translate_text("hello", Some("fr"), &mut screen);

    assert!(matches!(outcome, TranslateOutcome::Completed { saved: true, .. }));
    let records = o.history().unwrap();
    assert_eq!(records.len(), before + 1);
    assert_eq!(
        records.last().unwrap(),
        &TranslationRecord::new("English", "hello", "fr", "bonjour")
    );
    assert_eq!(screen.translations, vec!["bonjour"]);
    assert!(screen.warnings.is_empty() && screen.errors.is_empty());
}

#[test]
fn destination_is_stored_as_chosen() {
    let dir = tempfile::tempdir().unwrap();
    let book = phrase_book();
    let mut o = Orchestrator::new(open_store(&dir), &book, "English");
    let mut screen = Screen::default();

    o.translate_text("thank you", Some("german"), &mut screen);

    let records = o.history().unwrap();
    assert_eq!(records[0].target_language, "german");
    assert_eq!(records[0].translated_text, "danke");
}

#[test]
fn invalid_input_never_reaches_the_service() {
    let dir = tempfile::tempdir().unwrap();
    let book = phrase_book();
    let mut o = Orchestrator::new(open_store(&dir), &book, "English");
    let mut screen = Screen::default();

    let cases = [
        ("", Some("fr"), ValidationError::EmptyText),
        ("hello", None, ValidationError::NoDestination),
        ("", None, ValidationError::EmptyText),
        ("hello", Some(""), ValidationError::NoDestination),
    ];

    for (text, dest, expected) in cases {
        match o.translate_text(text, dest, &mut screen) {
            TranslateOutcome::Rejected(e) => assert_eq!(e, expected),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(o.state(), RequestState::Idle);
    }

    assert_eq!(book.call_count(), 0);
    assert!(o.history().unwrap().is_empty());
    assert_eq!(screen.warnings, vec![VALIDATION_WARNING; 4]);
}

#[test]
fn service_error_is_shown_and_not_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let book = phrase_book();
    let mut o = Orchestrator::new(open_store(&dir), &book, "English");
    let mut screen = Screen::default();

    let outcome = o.translate_text("hi", Some("xx"), &mut screen);

    assert!(matches!(
        outcome,
        TranslateOutcome::Failed(TranslateError::UnsupportedLanguage(_))
    ));
    assert_eq!(book.call_count(), 1);
    assert!(o.history().unwrap().is_empty());
    assert!(screen.translations.is_empty());
    assert_eq!(screen.errors.len(), 1);
    assert!(screen.errors[0].starts_with("Translation failed"));

    // Still usable afterwards.
    assert_eq!(o.state(), RequestState::Idle);
    let outcome = o.translate_text("hello", Some("fr"), &mut screen);
    assert!(matches!(outcome, TranslateOutcome::Completed { .. }));
}

#[test]
fn empty_translation_counts_as_failure() {
    let dir = tempfile::tempdir().unwrap();
    let book = PhraseBook::default().with("hello", "fr", "   ");
    let mut o = Orchestrator::new(open_store(&dir), &book, "English");
    let mut screen = Screen::default();

    let outcome = o.translate_text("hello", Some("fr"), &mut screen);

    assert!(matches!(outcome, TranslateOutcome::Failed(_)));
    assert!(o.history().unwrap().is_empty());
}

#[test]
fn storage_failure_keeps_the_translation_visible() {
    let dir = tempfile::tempdir().unwrap();
    // Opened but never initialized: the history table is missing.
    let store = HistoryStore::open(&dir.path().join("trans.db")).unwrap();
    let book = phrase_book();
    let mut o = Orchestrator::new(store, &book, "English");
    let mut screen = Screen::default();

    let outcome = o.translate_text("hello", Some("fr"), &mut screen);

    match outcome {
        TranslateOutcome::Completed { translation, saved } => {
            assert_eq!(translation, "bonjour");
            assert!(!saved);
        }
        other => panic!("expected completion, got {other:?}"),
    }
    assert_eq!(screen.translations, vec!["bonjour"]);
    assert_eq!(screen.errors.len(), 1);
    assert!(screen.errors[0].contains("history"));
    assert_eq!(o.state(), RequestState::Idle);

    o.show_history(&mut screen);
    assert!(screen.history.is_empty());
    assert_eq!(screen.errors.len(), 2);
}

#[test]
fn history_display_in_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    store
        .append(&TranslationRecord::new("English", "hello", "fr", "bonjour"))
        .unwrap();
    store
        .append(&TranslationRecord::new("English", "good", "es", "bueno"))
        .unwrap();

    let o = Orchestrator::new(store, phrase_book(), "English");

    assert_eq!(
        o.get_history_display().unwrap(),
        "From: English\nText: hello\nTo: fr\nTranslation: bonjour\n\n\
         From: English\nText: good\nTo: es\nTranslation: bueno\n\n"
    );
}

#[test]
fn fresh_store_shows_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let o = Orchestrator::new(open_store(&dir), phrase_book(), "English");
    let mut screen = Screen::default();

    assert!(o.history().unwrap().is_empty());
    assert_eq!(o.get_history_display().unwrap(), NO_HISTORY_MESSAGE);

    o.show_history(&mut screen);
    assert_eq!(screen.history, vec![NO_HISTORY_MESSAGE]);
}

#[test]
fn history_survives_reopen_and_reinitialize() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("trans.db");

    {
        let store = HistoryStore::open(&path).unwrap();
        store.initialize().unwrap();
        let book = phrase_book();
        let mut o = Orchestrator::new(store, &book, "English");
        let mut screen = Screen::default();
        o.translate_text("hello", Some("fr"), &mut screen);
        o.translate_text("good", Some("es"), &mut screen);
    }

    let store = HistoryStore::open(&path).unwrap();
    store.initialize().unwrap();
    store.initialize().unwrap();

    assert_eq!(
        store.list_all().unwrap(),
        vec![
            TranslationRecord::new("English", "hello", "fr", "bonjour"),
            TranslationRecord::new("English", "good", "es", "bueno"),
        ]
    );
}
