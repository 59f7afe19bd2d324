pub mod history;
pub mod orchestrator;
pub mod surface;
pub mod translator;
