use crate::controller::FeedController;
use crowdcore::stats::{AggregateSnapshot, AlertLevel, StatsSnapshot};
use futures::future::join_all;
use log::{debug, info};
use std::time::Duration;

pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_millis(500);

/// Drives the fixed-cadence telemetry rounds: one independent fetch
/// per feed, concurrently, with per-feed failures swallowed for the
/// round and the cross-feed aggregate recomputed from scratch.
pub struct StatsPoller {
    period: Duration,
}

impl StatsPoller {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Executes one poll round. Every feed is fetched regardless of
    /// lifecycle (the backend answers for stopped feeds too); a
    /// transport failure or `success: false` means that feed simply
    /// does not update this round. Stale completions are discarded by
    /// the per-feed round tracker.
    pub async fn poll_round(&self, controller: &mut FeedController) -> AggregateSnapshot {
        let feed_count = controller.feed_count();
        let rounds: Vec<u64> = (0..feed_count)
            .map(|feed| controller.feed_mut(feed).begin_poll())
            .collect();

        let responses = {
            let client = controller.client();
            join_all((0..feed_count).map(|feed| client.current_stats(feed))).await
        };

        let mut round_results: Vec<Option<StatsSnapshot>> = Vec::with_capacity(feed_count);
        for (feed, (round, response)) in rounds.into_iter().zip(responses).enumerate() {
            match response {
                Ok(stats) if stats.success => {
                    let snapshot = StatsSnapshot::from_response(&stats);
                    if controller.feed_mut(feed).apply_stats(round, snapshot.clone()) {
                        round_results.push(Some(snapshot));
                    } else {
                        round_results.push(None);
                    }
                }
                Ok(_) => {
                    debug!("feed {feed}: stats round {round} unsuccessful, skipped");
                    round_results.push(None);
                }
                Err(err) => {
                    // Swallowed per round; the next tick retries naturally.
                    debug!("feed {feed}: stats round {round} failed: {err}");
                    round_results.push(None);
                }
            }
        }

        AggregateSnapshot::from_round(&round_results)
    }

    /// Logs the per-feed display fields and the aggregate for a round.
    pub fn report(&self, controller: &FeedController, aggregate: &AggregateSnapshot) {
        for feed in controller.feeds() {
            if let Some(stats) = feed.last_stats() {
                info!(
                    "feed {}: people {} density {} predicted {} alert [{}] {}",
                    feed.index(),
                    stats.people_count,
                    stats.density,
                    stats.predicted_density,
                    AlertLevel::classify(&stats.alert_message),
                    stats.alert_message
                );
            }
        }
        info!(
            "overall density {} predicted {}",
            aggregate.overall_density, aggregate.overall_predicted_density
        );
    }
}

impl Default for StatsPoller {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_PERIOD)
    }
}
