use crate::feed::lifecycle::{FeedLifecycle, FeedSource};
use crate::geometry::{to_percent, PercentRect, PixelPoint, PixelRect, SurfaceSize};
use crate::stats::{RoundTracker, StatsSnapshot};
use crate::{FeedError, FeedResult};
use log::debug;
use std::fmt;

/// Displayed ROI readout. An explicit field set by the commit and
/// reset paths; never re-derived from rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RoiState {
    #[default]
    Unset,
    Set(PercentRect),
}

impl RoiState {
    /// True when a non-zero-sized ROI has been acknowledged. Gates the
    /// all-active-ROI history view.
    pub fn is_active(&self) -> bool {
        matches!(self, RoiState::Set(rect) if !rect.is_unset())
    }
}

impl fmt::Display for RoiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoiState::Unset => write!(f, "Not set"),
            RoiState::Set(r) => write!(f, "({:.1}%, {:.1}%, {:.1}%, {:.1}%)", r.x, r.y, r.w, r.h),
        }
    }
}

/// A finalized ROI draw ready for transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiSubmission {
    pub pixels: PixelRect,
    pub percent: PercentRect,
}

/// One feed's complete client-side state: lifecycle, ROI, draw
/// progress, surface size, last stats, and the poll round tracker.
/// All fields live together so the per-feed invariants are enforced in
/// one place.
#[derive(Debug)]
pub struct Feed {
    index: usize,
    lifecycle: FeedLifecycle,
    source: Option<FeedSource>,
    roi: RoiState,
    surface: SurfaceSize,
    draw_anchor: Option<PixelPoint>,
    last_stats: Option<StatsSnapshot>,
    rounds: RoundTracker,
    rollback: FeedLifecycle,
}

impl Feed {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            lifecycle: FeedLifecycle::Idle,
            source: None,
            roi: RoiState::Unset,
            surface: SurfaceSize::default(),
            draw_anchor: None,
            last_stats: None,
            rounds: RoundTracker::new(),
            rollback: FeedLifecycle::Idle,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn lifecycle(&self) -> FeedLifecycle {
        self.lifecycle
    }

    pub fn source(&self) -> Option<&FeedSource> {
        self.source.as_ref()
    }

    pub fn roi(&self) -> RoiState {
        self.roi
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn last_stats(&self) -> Option<&StatsSnapshot> {
        self.last_stats.as_ref()
    }

    /// Layout/resize notification from the rendering surface.
    pub fn set_surface(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }

    // --- start/stop -----------------------------------------------------

    /// Optimistic transition into `Starting`; the caller issues the
    /// start command and then applies `ack_start` or `fail_start`.
    pub fn begin_start(&mut self, source: FeedSource) -> FeedResult<()> {
        if !self.lifecycle.can_start() {
            return Err(FeedError::AlreadyRunning(self.index));
        }
        debug!("feed {} starting ({source})", self.index);
        self.rollback = self.lifecycle;
        self.lifecycle = FeedLifecycle::Starting;
        self.source = Some(source);
        Ok(())
    }

    /// Backend acknowledged the start; the live stream is displayed and
    /// ROI drawing becomes permitted.
    pub fn ack_start(&mut self) {
        if self.lifecycle == FeedLifecycle::Starting {
            self.lifecycle = FeedLifecycle::Active;
        }
    }

    /// Backend rejected the start (or transport failed): single
    /// well-defined rollback to the pre-start state.
    pub fn fail_start(&mut self) {
        if self.lifecycle == FeedLifecycle::Starting {
            self.lifecycle = self.rollback;
            self.source = None;
        }
    }

    /// Backend acknowledged a stop: display fields reset to their
    /// placeholders, the ROI readout clears to unset, and drawing is
    /// disabled.
    pub fn ack_stop(&mut self) {
        self.lifecycle = FeedLifecycle::Stopped;
        self.source = None;
        self.roi = RoiState::Unset;
        self.draw_anchor = None;
        self.last_stats = Some(StatsSnapshot::placeholder());
    }

    // --- ROI drawing ----------------------------------------------------

    /// Records the pixel-space anchor of a new draw. Rejected before
    /// any state mutation unless the feed is active.
    pub fn begin_roi_draw(&mut self, anchor: PixelPoint) -> FeedResult<()> {
        if !self.lifecycle.can_draw() {
            return Err(FeedError::NotActive(self.index));
        }
        self.draw_anchor = Some(anchor);
        Ok(())
    }

    /// Live outline from the anchor to the current pointer position.
    /// No-op (returns `None`) unless a draw is in progress; never
    /// reaches the backend.
    pub fn update_roi_draw(&self, pointer: PixelPoint) -> Option<PixelRect> {
        self.draw_anchor
            .map(|anchor| PixelRect::from_corners(anchor, pointer))
    }

    /// Finalizes the draw. Returns the normalized submission, or `None`
    /// when no draw was in progress or the surface has no known size
    /// (in which case nothing must be transmitted).
    pub fn commit_roi_draw(&mut self, pointer: PixelPoint) -> Option<RoiSubmission> {
        let anchor = self.draw_anchor.take()?;
        let pixels = PixelRect::from_corners(anchor, pointer);
        let percent = to_percent(pixels, self.surface)?;
        Some(RoiSubmission { pixels, percent })
    }

    /// Backend acknowledged the ROI commit; only now does the readout
    /// update. On failure the previous readout stays.
    pub fn ack_roi(&mut self, submission: RoiSubmission) {
        self.roi = RoiState::Set(submission.percent);
    }

    /// Clears the displayed ROI and yields the all-zero rect, which is
    /// transmitted unconditionally, surface size known or not.
    pub fn reset_roi(&mut self) -> PercentRect {
        self.roi = RoiState::Unset;
        self.draw_anchor = None;
        PercentRect::ZERO
    }

    // --- polling --------------------------------------------------------

    /// Tags the next in-flight stats request for this feed.
    pub fn begin_poll(&mut self) -> u64 {
        self.rounds.begin()
    }

    /// Applies a poll completion unless it is older than the latest
    /// applied round. Returns whether the snapshot was applied.
    pub fn apply_stats(&mut self, round: u64, snapshot: StatsSnapshot) -> bool {
        if !self.rounds.try_commit(round) {
            return false;
        }
        self.last_stats = Some(snapshot);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Reading;

    #[test]
    fn webcam_start_transitions_to_active_on_ack() {
        let mut feed = Feed::new(0);
        feed.begin_start(FeedSource::Webcam("0".into())).unwrap();
        assert_eq!(feed.lifecycle(), FeedLifecycle::Starting);
        assert!(feed.begin_roi_draw(PixelPoint::new(0.0, 0.0)).is_err());
        feed.ack_start();
        assert_eq!(feed.lifecycle(), FeedLifecycle::Active);
        assert!(feed.begin_roi_draw(PixelPoint::new(0.0, 0.0)).is_ok());
    }

    #[test]
    fn failed_start_rolls_back_to_previous_state() {
        let mut feed = Feed::new(1);
        feed.begin_start(FeedSource::Webcam("1".into())).unwrap();
        feed.ack_start();
        feed.ack_stop();
        assert_eq!(feed.lifecycle(), FeedLifecycle::Stopped);

        feed.begin_start(FeedSource::Webcam("1".into())).unwrap();
        feed.fail_start();
        assert_eq!(feed.lifecycle(), FeedLifecycle::Stopped);
        assert!(feed.source().is_none());
    }

    #[test]
    fn start_rejected_while_running() {
        let mut feed = Feed::new(0);
        feed.begin_start(FeedSource::Webcam("0".into())).unwrap();
        assert_eq!(
            feed.begin_start(FeedSource::Webcam("0".into())),
            Err(FeedError::AlreadyRunning(0))
        );
    }

    #[test]
    fn draw_on_idle_feed_is_rejected_without_mutation() {
        let mut feed = Feed::new(2);
        assert_eq!(
            feed.begin_roi_draw(PixelPoint::new(5.0, 5.0)),
            Err(FeedError::NotActive(2))
        );
        assert_eq!(feed.update_roi_draw(PixelPoint::new(9.0, 9.0)), None);
        assert_eq!(feed.commit_roi_draw(PixelPoint::new(9.0, 9.0)), None);
        assert_eq!(feed.roi(), RoiState::Unset);
    }

    fn active_feed(surface: SurfaceSize) -> Feed {
        let mut feed = Feed::new(0);
        feed.set_surface(surface);
        feed.begin_start(FeedSource::Webcam("0".into())).unwrap();
        feed.ack_start();
        feed
    }

    #[test]
    fn commit_normalizes_and_readout_updates_only_on_ack() {
        let mut feed = active_feed(SurfaceSize::new(400.0, 200.0));
        feed.begin_roi_draw(PixelPoint::new(100.0, 50.0)).unwrap();
        let outline = feed.update_roi_draw(PixelPoint::new(300.0, 150.0)).unwrap();
        assert_eq!(outline, PixelRect::new(100.0, 50.0, 200.0, 100.0));

        let submission = feed.commit_roi_draw(PixelPoint::new(300.0, 150.0)).unwrap();
        assert_eq!(submission.percent, PercentRect::new(25.0, 25.0, 50.0, 50.0));
        // Not yet acknowledged: readout untouched.
        assert_eq!(feed.roi(), RoiState::Unset);

        feed.ack_roi(submission);
        assert!(feed.roi().is_active());
    }

    #[test]
    fn commit_on_unsized_surface_transmits_nothing() {
        let mut feed = active_feed(SurfaceSize::default());
        feed.begin_roi_draw(PixelPoint::new(10.0, 10.0)).unwrap();
        assert_eq!(feed.commit_roi_draw(PixelPoint::new(60.0, 60.0)), None);
    }

    #[test]
    fn reset_always_yields_zero_rect() {
        let mut feed = active_feed(SurfaceSize::default());
        assert_eq!(feed.reset_roi(), PercentRect::ZERO);
        assert_eq!(feed.roi(), RoiState::Unset);
    }

    #[test]
    fn stop_clears_display_to_placeholders() {
        let mut feed = active_feed(SurfaceSize::new(400.0, 200.0));
        feed.begin_roi_draw(PixelPoint::new(0.0, 0.0)).unwrap();
        let submission = feed.commit_roi_draw(PixelPoint::new(200.0, 100.0)).unwrap();
        feed.ack_roi(submission);
        let round = feed.begin_poll();
        assert!(feed.apply_stats(round, StatsSnapshot::placeholder()));

        feed.ack_stop();
        assert_eq!(feed.lifecycle(), FeedLifecycle::Stopped);
        assert_eq!(feed.roi(), RoiState::Unset);
        let stats = feed.last_stats().unwrap();
        assert_eq!(stats.people_count, 0);
        assert_eq!(stats.predicted_density, Reading::NotApplicable);
    }

    #[test]
    fn stale_poll_round_is_discarded() {
        let mut feed = active_feed(SurfaceSize::new(1.0, 1.0));
        let slow = feed.begin_poll();
        let fast = feed.begin_poll();
        let mut fresh = StatsSnapshot::placeholder();
        fresh.people_count = 9;
        assert!(feed.apply_stats(fast, fresh));
        assert!(!feed.apply_stats(slow, StatsSnapshot::placeholder()));
        assert_eq!(feed.last_stats().unwrap().people_count, 9);
    }

    #[test]
    fn roi_readout_formats_like_the_display() {
        assert_eq!(RoiState::Unset.to_string(), "Not set");
        let readout = RoiState::Set(PercentRect::new(25.0, 25.0, 50.0, 50.0));
        assert_eq!(readout.to_string(), "(25.0%, 25.0%, 50.0%, 50.0%)");
    }
}
