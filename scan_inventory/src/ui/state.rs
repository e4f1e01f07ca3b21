#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Scan,
    AllItems,
}

/// One line of feedback shown under a screen's controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

#[derive(Debug, Default)]
pub struct ScanState {
    /// Text in the code field (typed, pasted or sent by a keyboard-wedge scanner)
    pub code_input: String,
    pub title_input: String,
    pub description_input: String,
    /// Validation problem shown inside the entry dialog
    pub entry_error: Option<String>,
    pub message: Option<StatusMessage>,
}

impl ScanState {
    pub fn clear_entry(&mut self) {
        self.title_input.clear();
        self.description_input.clear();
        self.entry_error = None;
    }
}

#[derive(Debug, Default)]
pub struct ListState {
    pub message: Option<StatusMessage>,
}

/// Change made on the item list that other screens need to hear about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Deleted(String),
}
