#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    Translate,
    History,
    HistoryList,
    Languages,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "translate" => Command::Translate,
            "history" => Command::History,
            "history.list" => Command::HistoryList,
            "languages" => Command::Languages,
            _ => Command::Unknown,
        }
    }
}
