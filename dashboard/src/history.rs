use crate::backend::BackendClient;
use crate::controller::FeedController;
use crate::error::{ClientError, Result};
use crowdcore::history::HistoryTable;
use log::debug;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SELECTED_REFRESH_PERIOD: Duration = Duration::from_secs(30);
pub const ALL_ACTIVE_REFRESH_PERIOD: Duration = Duration::from_secs(5);

/// The two read-only history views: one selected feed on a slow
/// cadence (or on selector change), and every feed with an active ROI
/// on a faster one.
pub struct HistoryView {
    selected_feed: usize,
}

impl HistoryView {
    pub fn new(selected_feed: usize) -> Self {
        Self { selected_feed }
    }

    pub fn selected_feed(&self) -> usize {
        self.selected_feed
    }

    /// Selector change; the caller refreshes immediately afterwards.
    pub fn select(&mut self, feed: usize) {
        self.selected_feed = feed;
    }

    /// Fetches the selected feed's history, latest entries first. An
    /// unsuccessful response renders as an empty table (placeholder
    /// row), not an error.
    pub async fn refresh_selected(&self, client: &BackendClient) -> Result<HistoryTable> {
        let response = client.head_count_history(self.selected_feed).await?;
        let entries = if response.success {
            response.history
        } else {
            Vec::new()
        };
        Ok(HistoryTable::selected(self.selected_feed, entries))
    }

    /// Fetches one table per feed whose acknowledged ROI is set and
    /// non-zero-sized, in feed-index order, preserving the server's
    /// ascending entry order. Per-feed fetch failures skip that feed
    /// for this pass.
    pub async fn refresh_all_active(&self, controller: &FeedController) -> Vec<HistoryTable> {
        let mut tables = Vec::new();
        for feed in controller.feeds() {
            if !feed.roi().is_active() {
                continue;
            }
            let index = feed.index();
            match controller.client().head_count_history(index).await {
                Ok(response) if response.success => {
                    tables.push(HistoryTable::feed_order(index, response.history));
                }
                Ok(_) => debug!("feed {index}: history fetch unsuccessful, skipped"),
                Err(err) => debug!("feed {index}: history fetch failed: {err}"),
            }
        }
        tables
    }

    /// Exports the selected feed's full history, latest first, to
    /// `head_count_history_camera_{n}.csv` under `dir`. Empty history
    /// aborts before any file is written.
    pub async fn export_selected(&self, client: &BackendClient, dir: &Path) -> Result<PathBuf> {
        let response = client.head_count_history(self.selected_feed).await?;
        let entries = if response.success {
            response.history
        } else {
            Vec::new()
        };
        let table = HistoryTable::selected(self.selected_feed, entries);
        write_history_csv(&table, dir)
    }
}

fn write_history_csv(table: &HistoryTable, dir: &Path) -> Result<PathBuf> {
    if table.is_empty() {
        return Err(ClientError::Rejected("No data to export.".to_string()));
    }
    let path = dir.join(format!(
        "head_count_history_camera_{}.csv",
        table.feed() + 1
    ));
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["Camera", "Time", "People Count"])?;
    for row in table.export_rows() {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(path)
}
