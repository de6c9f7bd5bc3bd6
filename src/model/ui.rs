//! UI state - new-entry input and user-facing notices

/// Transient state of the entry form and the last blocking notice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Text typed into the new change point input
    pub draft: String,
    /// Last notice shown to the user (validation rejection)
    pub notice: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft text
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Take the draft, leaving it empty
    pub fn take_draft(&mut self) -> String {
        std::mem::take(&mut self.draft)
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
