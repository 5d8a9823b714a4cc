pub mod aggregate;
pub mod alert;
pub mod reading;
pub mod round;
pub mod snapshot;

pub use aggregate::AggregateSnapshot;
pub use alert::AlertLevel;
pub use reading::Reading;
pub use round::RoundTracker;
pub use snapshot::StatsSnapshot;
