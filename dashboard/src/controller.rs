use crate::backend::BackendClient;
use crate::error::{ClientError, Result};
use crowdcore::feed::{Feed, FeedLifecycle, FeedSource};
use crowdcore::geometry::{PercentRect, PixelPoint, PixelRect, SurfaceSize};
use log::{info, warn};
use std::path::Path;

/// Binds the per-feed state machines to the backend client. All
/// lifecycle and ROI commands flow through here; the poll loops only
/// read commands' results back through the feeds.
pub struct FeedController {
    client: BackendClient,
    feeds: Vec<Feed>,
}

impl FeedController {
    pub fn new(client: BackendClient, feed_count: usize) -> Self {
        Self {
            client,
            feeds: (0..feed_count).map(Feed::new).collect(),
        }
    }

    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    pub fn feed_count(&self) -> usize {
        self.feeds.len()
    }

    pub fn feed(&self, feed: usize) -> &Feed {
        &self.feeds[feed]
    }

    pub fn feeds(&self) -> impl Iterator<Item = &Feed> {
        self.feeds.iter()
    }

    pub(crate) fn feed_mut(&mut self, feed: usize) -> &mut Feed {
        &mut self.feeds[feed]
    }

    pub fn set_surface(&mut self, feed: usize, surface: SurfaceSize) {
        self.feeds[feed].set_surface(surface);
    }

    /// Starts a feed: optimistic `Starting` transition, then the
    /// command. On rejection the backend's message is surfaced
    /// verbatim and the optimistic state rolls back.
    pub async fn start(&mut self, feed: usize, source: FeedSource) -> Result<()> {
        self.feeds[feed].begin_start(source.clone())?;
        match self.client.start_processing(feed, &source).await {
            Ok(ack) if ack.success => {
                self.feeds[feed].ack_start();
                info!(
                    "feed {feed} active, streaming from {}",
                    self.client.video_feed_url(feed)
                );
                Ok(())
            }
            Ok(ack) => {
                self.feeds[feed].fail_start();
                Err(ClientError::Rejected(
                    ack.message
                        .unwrap_or_else(|| "start rejected by backend".to_string()),
                ))
            }
            Err(err) => {
                self.feeds[feed].fail_start();
                Err(err)
            }
        }
    }

    /// Stops a feed. On ack, display fields reset to placeholders and
    /// the all-zero ROI is reissued to clear any backend-held region.
    pub async fn stop(&mut self, feed: usize) -> Result<()> {
        let ack = self.client.stop_processing(feed).await?;
        if !ack.success {
            return Err(ClientError::Rejected(
                ack.message
                    .unwrap_or_else(|| "stop rejected by backend".to_string()),
            ));
        }
        self.feeds[feed].ack_stop();
        if let Err(err) = self.client.set_roi(feed, &PercentRect::ZERO).await {
            warn!("feed {feed}: ROI reset after stop failed: {err}");
        }
        Ok(())
    }

    /// Pointer-down on the overlay. Rejected client-side, before any
    /// network call, unless the feed is active.
    pub fn begin_roi_draw(&mut self, feed: usize, anchor: PixelPoint) -> Result<()> {
        Ok(self.feeds[feed].begin_roi_draw(anchor)?)
    }

    /// Pointer-move: live outline only, never touches the backend.
    pub fn update_roi_draw(&self, feed: usize, pointer: PixelPoint) -> Option<PixelRect> {
        self.feeds[feed].update_roi_draw(pointer)
    }

    /// Pointer-up: finalizes and transmits the normalized rect. A
    /// surface with no known size skips the transmission entirely
    /// (silent no-op); a backend rejection leaves the readout at its
    /// previous value.
    pub async fn commit_roi_draw(&mut self, feed: usize, pointer: PixelPoint) -> Result<Option<PercentRect>> {
        let Some(submission) = self.feeds[feed].commit_roi_draw(pointer) else {
            return Ok(None);
        };
        let ack = self.client.set_roi(feed, &submission.percent).await?;
        if !ack.success {
            warn!("feed {feed}: ROI commit rejected, readout unchanged");
            return Ok(None);
        }
        self.feeds[feed].ack_roi(submission);
        Ok(Some(submission.percent))
    }

    /// Clears the ROI and transmits the all-zero rect unconditionally,
    /// surface size known or not.
    pub async fn reset_roi(&mut self, feed: usize) -> Result<()> {
        let zero = self.feeds[feed].reset_roi();
        self.client.set_roi(feed, &zero).await?;
        Ok(())
    }

    /// Upload chain: stop a running feed first (awaiting the ack, so
    /// two sources never write the same slot), upload the file, then
    /// start from the server-side path the upload returned. Any step's
    /// failure halts the chain.
    pub async fn upload(&mut self, feed: usize, path: &Path) -> Result<()> {
        if self.feeds[feed].lifecycle() == FeedLifecycle::Active {
            self.stop(feed).await?;
        }
        let upload = self.client.upload_video(feed, path).await?;
        if !upload.success {
            return Err(ClientError::Rejected(format!(
                "Upload failed: {}",
                upload.message.unwrap_or_default()
            )));
        }
        let filepath = upload.filepath.ok_or_else(|| {
            ClientError::Rejected("upload response carried no filepath".to_string())
        })?;
        self.start(feed, FeedSource::File(filepath)).await
    }
}
