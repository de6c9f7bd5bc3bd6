//! Highlight of the most recently injected row

/// Row emphasised after a random insertion
///
/// No time-based expiry; replaced by the next highlight or cleared by a
/// table reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightTracker {
    row: Option<usize>,
}

impl HighlightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, row: usize) {
        self.row = Some(row);
    }

    pub fn clear(&mut self) {
        self.row = None;
    }

    pub fn get(&self) -> Option<usize> {
        self.row
    }

    /// Keep designating the same row after a row was inserted at `at`
    pub fn rows_inserted(&mut self, at: usize) {
        if let Some(row) = self.row.as_mut() {
            if *row >= at {
                *row += 1;
            }
        }
    }
}
