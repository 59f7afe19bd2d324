use crate::services::surface::Surface;

/// Surface that buffers everything the orchestrator shows so a single
/// protocol response can be built from it.
#[derive(Debug, Default)]
pub struct CollectingSurface {
    pub translation: Option<String>,
    pub history: Option<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl CollectingSurface {
    pub fn warning_message(&self) -> String {
        self.warnings.join("\n")
    }

    pub fn error_message(&self) -> String {
        self.errors.join("\n")
    }
}

impl Surface for CollectingSurface {
    fn show_translation(&mut self, text: &str) {
        self.translation = Some(text.to_string());
    }

    fn show_history(&mut self, formatted: &str) {
        self.history = Some(formatted.to_string());
    }

    fn show_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
