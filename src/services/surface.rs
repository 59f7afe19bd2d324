/// Whatever shows results to the user. The orchestrator only talks to the UI
/// through this trait.
pub trait Surface {
    fn show_translation(&mut self, text: &str);
    fn show_history(&mut self, formatted: &str);
    /// Validation problems the user can fix.
    fn show_warning(&mut self, message: &str);
    fn show_error(&mut self, message: &str);
}
