//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the rendering surface should perform
//! after an update.

/// Side effect requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-read the snapshot and redraw
    Redraw,
    /// Show a blocking notice to the user
    ShowNotice(String),
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Notices are drawn by the surface too
            Cmd::ShowNotice(_) => true,
        }
    }

    /// Notice text, if this command shows one
    pub fn notice(&self) -> Option<&str> {
        match self {
            Cmd::ShowNotice(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
