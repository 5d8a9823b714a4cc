use log::debug;

/// Per-feed monotonic round counter guarding against out-of-order poll
/// completions. Rounds are begun when the request is issued; a
/// completion older than the latest applied round is discarded.
#[derive(Debug, Clone, Default)]
pub struct RoundTracker {
    next: u64,
    last_applied: Option<u64>,
}

impl RoundTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags a new in-flight request.
    pub fn begin(&mut self) -> u64 {
        let round = self.next;
        self.next += 1;
        round
    }

    /// Returns true if the completion for `round` may be applied, and
    /// records it as the latest. Stale completions return false.
    pub fn try_commit(&mut self, round: u64) -> bool {
        match self.last_applied {
            Some(applied) if round <= applied => {
                debug!("discarding stale completion for round {round} (latest {applied})");
                false
            }
            _ => {
                self.last_applied = Some(round);
                true
            }
        }
    }
}
