use serde::{Deserialize, Serialize};

/// One completed translation, as stored in the history table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    pub source_language: String,
    pub source_text: String,
    pub target_language: String,
    pub translated_text: String,
}

impl TranslationRecord {
    pub fn new(
        source_language: impl Into<String>,
        source_text: impl Into<String>,
        target_language: impl Into<String>,
        translated_text: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.into(),
            source_text: source_text.into(),
            target_language: target_language.into(),
            translated_text: translated_text.into(),
        }
    }

    /// Renders the record as one history block, trailing blank line included.
    pub fn display_block(&self) -> String {
        format!(
            "From: {}\nText: {}\nTo: {}\nTranslation: {}\n\n",
            self.source_language, self.source_text, self.target_language, self.translated_text
        )
    }
}
