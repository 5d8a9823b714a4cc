use crate::api::HistoryEntry;
use crate::history::order::sort_descending;

/// One rendered row of a history table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Entry {
        camera: String,
        time: String,
        people_count: u32,
    },
    /// Single row spanning all columns when a feed has no history yet.
    Placeholder,
}

/// Display model for one feed's head-count history table.
#[derive(Debug, Clone)]
pub struct HistoryTable {
    feed: usize,
    entries: Vec<HistoryEntry>,
}

impl HistoryTable {
    pub const PLACEHOLDER_TEXT: &'static str = "No history yet.";

    /// Selected-feed view: latest entries first.
    pub fn selected(feed: usize, mut entries: Vec<HistoryEntry>) -> Self {
        sort_descending(&mut entries);
        Self { feed, entries }
    }

    /// All-active-ROI view: server order (ascending) preserved.
    pub fn feed_order(feed: usize, entries: Vec<HistoryEntry>) -> Self {
        Self { feed, entries }
    }

    pub fn feed(&self) -> usize {
        self.feed
    }

    /// Operator-facing camera label; feeds are 1-based in the UI.
    pub fn camera_label(&self) -> String {
        format!("Camera {}", self.feed + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Rows as rendered: data rows, or exactly one placeholder.
    pub fn rows(&self) -> Vec<TableRow> {
        if self.entries.is_empty() {
            return vec![TableRow::Placeholder];
        }
        self.entries
            .iter()
            .map(|entry| TableRow::Entry {
                camera: self.camera_label(),
                time: entry.time.clone(),
                people_count: entry.people_count,
            })
            .collect()
    }

    /// Spreadsheet rows (Camera, Time, People Count), in table order.
    pub fn export_rows(&self) -> Vec<[String; 3]> {
        self.entries
            .iter()
            .map(|entry| {
                [
                    self.camera_label(),
                    entry.time.clone(),
                    entry.people_count.to_string(),
                ]
            })
            .collect()
    }
}
