use crate::stats::reading::Reading;
use crate::stats::snapshot::StatsSnapshot;

/// Cross-feed mean metrics, recomputed from scratch every poll round.
/// Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateSnapshot {
    pub overall_density: Reading,
    pub overall_predicted_density: Reading,
}

impl AggregateSnapshot {
    /// Computes the arithmetic mean of density and predicted density
    /// over exactly the feeds that responded this round with a numeric
    /// value. A failed or non-numeric feed is excluded from the
    /// denominator, not treated as zero. Each metric counts its own
    /// contributors.
    pub fn from_round(round: &[Option<StatsSnapshot>]) -> Self {
        let snapshots = || round.iter().flatten();
        Self {
            overall_density: mean(snapshots().filter_map(|s| s.density.value())),
            overall_predicted_density: mean(snapshots().filter_map(|s| s.predicted_density.value())),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Reading {
    let (sum, count) = values.fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        Reading::NotApplicable
    } else {
        Reading::Value(sum / f64::from(count))
    }
}
